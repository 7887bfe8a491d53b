//! Error types for network classification.

use thiserror::Error;

/// Errors raised while constructing network-facing collaborators.
#[derive(Debug, Error)]
pub enum NetError {
    /// The system DNS resolver could not be constructed.
    #[error("failed to initialise DNS resolver: {detail}")]
    ResolverInit {
        /// Underlying resolver error rendered as text.
        detail: String,
    },
}
