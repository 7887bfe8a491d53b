//! The rule engine that vets a stamped scan-configuration document.
//!
//! # Design
//! - Extraction is all-or-nothing: one absent required path rejects the
//!   submission with a generic missing-option failure and no rules run.
//! - Rules run in a fixed order, independently; every failure is collected
//!   in evaluation order rather than kept in a single overwritten slot, and
//!   [`Verdict::error`] exposes the last one.
//! - Numeric rules inspect the value kind before the bound, so a wrong type
//!   and an out-of-range value are distinct failures.
//! - The engine's only mutation is normalising an empty interface selection
//!   to an explicit null.

use scanvet_net::NetworkClassifier;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::safety::{is_string_safe, is_string_url};

const NAME_RULE: &str = "must not exceed 30 characters and must not have special characters";
const DESCRIPTION_RULE: &str = "must not exceed 50 characters and must not have special characters";
const ENGINEER_RULE: &str = "must not exceed 20 characters and must not have special characters";
const CIDR_RULE: &str = "must be a valid network CIDR";
const DOMAIN_RULE: &str = "must contain valid domains (and they must be resolveable!)";
const SCHEDULE_RULE: &str = r#"must be "once" or "continuous""#;
const WEBHOOK_RULE: &str = "must be a valid URL";
const TARGETS_RULE: &str = "or option [DOMAINS] must not be empty";

/// Outcome of vetting one submission. The document always comes back,
/// normalised or not, so rejected submissions can be surfaced verbatim.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Whether the document may move downstream.
    pub accepted: bool,
    /// Every rule failure, in evaluation order. Empty when accepted.
    pub errors: Vec<ValidationError>,
    /// The submitted document, with the interface field normalised.
    pub document: Value,
}

impl Verdict {
    /// The last failing rule's error, the one surfaced to the submitter.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.errors.last()
    }

    /// Consume the verdict, yielding the (possibly normalised) document.
    #[must_use]
    pub fn into_document(self) -> Value {
        self.document
    }
}

/// Runs the full rule set against stamped submissions.
#[derive(Debug)]
pub struct Verifier<'a> {
    classifier: &'a NetworkClassifier,
}

impl<'a> Verifier<'a> {
    /// Build a verifier over `classifier`.
    #[must_use]
    pub const fn new(classifier: &'a NetworkClassifier) -> Self {
        Self { classifier }
    }

    /// Vet `document`, returning the verdict together with the document.
    /// Validation is a single synchronous pass; the only blocking work is
    /// DNS resolution and interface enumeration inside the classifier.
    #[must_use]
    pub fn verify(&self, mut document: Value) -> Verdict {
        let errors = match RawConfig::extract(&document) {
            Ok(raw) => self.run_rules(&raw, &mut document),
            Err(missing) => vec![missing],
        };
        let accepted = errors.is_empty();
        if accepted {
            debug!("scan configuration accepted");
        } else if let Some(last) = errors.last() {
            warn!(failures = errors.len(), error = %last, "scan configuration rejected");
        }
        Verdict {
            accepted,
            errors,
            document,
        }
    }

    fn run_rules(&self, raw: &RawConfig, document: &mut Value) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        check_text("ASSESSMENT_NAME", &raw.name, 30, NAME_RULE, false, &mut errors);
        check_text(
            "ASSESSMENT_DESCRIPTION",
            &raw.description,
            50,
            DESCRIPTION_RULE,
            true,
            &mut errors,
        );
        check_text("ENGINEER", &raw.engineer, 20, ENGINEER_RULE, true, &mut errors);
        self.check_webhook(&raw.webhook, &mut errors);
        check_schedule(&raw.frequency, &mut errors);
        check_bool("ALLOW_DENIAL-OF-SERVICE", &raw.allow_dos, &mut errors);
        check_bool("ALLOW_BRUTEFORCE", &raw.allow_bf, &mut errors);
        check_bool("ALLOW_INTERNET-OUTBOUND", &raw.allow_internet, &mut errors);
        check_int("AGGRESSIVE_LEVEL", &raw.aggressive, 0, 3, &mut errors);
        check_int("MAX_PORTS", &raw.max_ports, 10, 65_535, &mut errors);
        check_targets_present(&raw.networks, &raw.domains, &mut errors);
        self.check_networks(&raw.networks, &mut errors);
        self.check_excluded_networks(&raw.excluded_networks, &mut errors);
        self.check_domains(&raw.domains, &mut errors);
        self.check_interface(&raw.interface, document, &mut errors);
        check_int("ATTACK_THREADS", &raw.parallel_attack, 10, 100, &mut errors);
        check_int("SCAN_THREADS", &raw.parallel_scan, 10, 100, &mut errors);
        check_list("DICTIONARY_USERNAMES", &raw.usernames, &mut errors);
        check_list("DICTIONARY_PASSWORDS", &raw.passwords, &mut errors);

        errors
    }

    fn check_webhook(&self, value: &Value, errors: &mut Vec<ValidationError>) {
        match value.as_str() {
            Some("") => {}
            Some(webhook) => {
                if !is_string_url(webhook) {
                    errors.push(ValidationError::FormatViolation {
                        option: "WEBHOOK",
                        reason: WEBHOOK_RULE,
                    });
                }
            }
            None if value.is_null() => {}
            None => errors.push(ValidationError::TypeMismatch {
                option: "WEBHOOK",
                expected: "a string",
            }),
        }
    }

    fn check_networks(&self, value: &Value, errors: &mut Vec<ValidationError>) {
        let Some(entries) = value.as_array() else {
            errors.push(ValidationError::TypeMismatch {
                option: "NETWORKS",
                expected: "an array",
            });
            return;
        };
        for entry in entries {
            match entry.as_str() {
                Some(network) if !self.classifier.is_network(network) => {
                    errors.push(ValidationError::FormatViolation {
                        option: "NETWORKS",
                        reason: CIDR_RULE,
                    });
                }
                Some(network) if self.classifier.is_network_in_denylist(network) => {
                    errors.push(ValidationError::PolicyViolation { option: "NETWORKS" });
                }
                Some(_) => {}
                None => errors.push(ValidationError::FormatViolation {
                    option: "NETWORKS",
                    reason: CIDR_RULE,
                }),
            }
        }
    }

    // Exclusions may reference denylisted ranges, so only syntax is checked.
    fn check_excluded_networks(&self, value: &Value, errors: &mut Vec<ValidationError>) {
        let Some(entries) = value.as_array() else {
            errors.push(ValidationError::TypeMismatch {
                option: "EXCLUDED NETWORKS",
                expected: "an array",
            });
            return;
        };
        for entry in entries {
            if !entry.as_str().is_some_and(|n| self.classifier.is_network(n)) {
                errors.push(ValidationError::FormatViolation {
                    option: "EXCLUDED NETWORKS",
                    reason: CIDR_RULE,
                });
            }
        }
    }

    fn check_domains(&self, value: &Value, errors: &mut Vec<ValidationError>) {
        let Some(entries) = value.as_array() else {
            errors.push(ValidationError::TypeMismatch {
                option: "DOMAINS",
                expected: "an array",
            });
            return;
        };
        for entry in entries {
            if !entry.as_str().is_some_and(|d| self.classifier.is_dns(d)) {
                errors.push(ValidationError::FormatViolation {
                    option: "DOMAINS",
                    reason: DOMAIN_RULE,
                });
            }
        }
    }

    fn check_interface(
        &self,
        value: &Value,
        document: &mut Value,
        errors: &mut Vec<ValidationError>,
    ) {
        match value.as_str() {
            Some("") => normalize_interface(document),
            Some(interface) => {
                if !self.classifier.get_nics().contains(interface) {
                    errors.push(ValidationError::ResourceNotFound { option: "INTERFACE" });
                }
            }
            None if value.is_null() => normalize_interface(document),
            None => errors.push(ValidationError::TypeMismatch {
                option: "INTERFACE",
                expected: "a string",
            }),
        }
    }
}

/// Required paths extracted up front. Holds clones so the document stays
/// free for the engine's interface normalisation.
struct RawConfig {
    networks: Value,
    excluded_networks: Value,
    domains: Value,
    name: Value,
    description: Value,
    engineer: Value,
    webhook: Value,
    aggressive: Value,
    allow_dos: Value,
    allow_bf: Value,
    allow_internet: Value,
    usernames: Value,
    passwords: Value,
    max_ports: Value,
    interface: Value,
    parallel_scan: Value,
    parallel_attack: Value,
    frequency: Value,
}

impl RawConfig {
    fn extract(document: &Value) -> Result<Self, ValidationError> {
        Ok(Self {
            networks: required(document, &["targets", "networks"])?,
            excluded_networks: required(document, &["targets", "excluded_networks"])?,
            domains: required(document, &["targets", "domains"])?,
            name: required(document, &["config", "name"])?,
            description: required(document, &["config", "description"])?,
            engineer: required(document, &["config", "engineer"])?,
            webhook: required(document, &["config", "post_event", "webhook"])?,
            aggressive: required(document, &["config", "allow_aggressive"])?,
            allow_dos: required(document, &["config", "allow_dos"])?,
            allow_bf: required(document, &["config", "allow_bf"])?,
            allow_internet: required(document, &["config", "allow_internet"])?,
            usernames: required(document, &["config", "dictionary", "usernames"])?,
            passwords: required(document, &["config", "dictionary", "passwords"])?,
            max_ports: required(document, &["config", "scan_opts", "max_ports"])?,
            interface: required(document, &["config", "scan_opts", "interface"])?,
            parallel_scan: required(document, &["config", "scan_opts", "parallel_scan"])?,
            parallel_attack: required(document, &["config", "scan_opts", "parallel_attack"])?,
            frequency: required(document, &["config", "frequency"])?,
        })
    }
}

fn required(document: &Value, path: &[&str]) -> Result<Value, ValidationError> {
    let mut current = document;
    for key in path {
        current = current.get(key).ok_or(ValidationError::MissingOption)?;
    }
    Ok(current.clone())
}

fn check_text(
    option: &'static str,
    value: &Value,
    max_len: usize,
    reason: &'static str,
    optional: bool,
    errors: &mut Vec<ValidationError>,
) {
    match value.as_str() {
        Some(text) if optional && text.is_empty() => {}
        Some(text) => {
            if text.chars().count() > max_len || !is_string_safe(text) {
                errors.push(ValidationError::FormatViolation { option, reason });
            }
        }
        None if optional && value.is_null() => {}
        None => errors.push(ValidationError::TypeMismatch {
            option,
            expected: "a string",
        }),
    }
}

fn check_schedule(value: &Value, errors: &mut Vec<ValidationError>) {
    if !value
        .as_str()
        .is_some_and(|frequency| matches!(frequency, "once" | "continuous"))
    {
        errors.push(ValidationError::FormatViolation {
            option: "SCHEDULE",
            reason: SCHEDULE_RULE,
        });
    }
}

fn check_bool(option: &'static str, value: &Value, errors: &mut Vec<ValidationError>) {
    if !value.is_boolean() {
        errors.push(ValidationError::TypeMismatch {
            option,
            expected: "true or false",
        });
    }
}

// Type before range, so a wrong kind and an out-of-bound value stay
// distinct failures.
fn check_int(
    option: &'static str,
    value: &Value,
    min: i64,
    max: i64,
    errors: &mut Vec<ValidationError>,
) {
    match value.as_i64() {
        None => errors.push(ValidationError::TypeMismatch {
            option,
            expected: "an Integer",
        }),
        Some(number) if !(min..=max).contains(&number) => {
            errors.push(ValidationError::RangeViolation { option, min, max });
        }
        Some(_) => {}
    }
}

fn check_targets_present(networks: &Value, domains: &Value, errors: &mut Vec<ValidationError>) {
    let networks_empty = networks.as_array().is_none_or(|entries| entries.is_empty());
    let domains_empty = domains.as_array().is_none_or(|entries| entries.is_empty());
    if networks_empty && domains_empty {
        errors.push(ValidationError::FormatViolation {
            option: "NETWORKS",
            reason: TARGETS_RULE,
        });
    }
}

fn check_list(option: &'static str, value: &Value, errors: &mut Vec<ValidationError>) {
    if !value.is_array() {
        errors.push(ValidationError::TypeMismatch {
            option,
            expected: "an array",
        });
    }
}

fn normalize_interface(document: &mut Value) {
    if let Some(slot) = document.pointer_mut("/config/scan_opts/interface") {
        *slot = Value::Null;
    }
}
