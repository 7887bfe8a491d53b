//! Error taxonomy for scan-configuration validation.
//!
//! Every rule failure is a value the engine records, never a fault it
//! raises; the rendered messages are the ones surfaced to submitters.

use thiserror::Error;

/// A single rule failure recorded while vetting a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required path was absent from the document. Aborts the rule pass.
    #[error("One or more options are missing")]
    MissingOption,

    /// A field held the wrong primitive kind.
    #[error("Option [{option}] must be {expected}")]
    TypeMismatch {
        /// Option tag surfaced to the submitter.
        option: &'static str,
        /// Expected kind, phrased for the message.
        expected: &'static str,
    },

    /// A numeric field was type-correct but outside its allowed bound.
    #[error("Option [{option}] must be between {min}-{max}")]
    RangeViolation {
        /// Option tag surfaced to the submitter.
        option: &'static str,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A string field failed a syntax or content rule.
    #[error("Option [{option}] {reason}")]
    FormatViolation {
        /// Option tag surfaced to the submitter.
        option: &'static str,
        /// Rule description, phrased for the message.
        reason: &'static str,
    },

    /// A syntactically valid network is explicitly disallowed.
    #[error("Option [{option}] is not allowed")]
    PolicyViolation {
        /// Option tag surfaced to the submitter.
        option: &'static str,
    },

    /// A named interface does not exist on this host.
    #[error("Option [{option}] must be valid")]
    ResourceNotFound {
        /// Option tag surfaced to the submitter.
        option: &'static str,
    },
}
