//! Submission metadata stamping.
//!
//! Metadata is captured once, before validation, and never touched by the
//! engine afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

/// Identity of the caller that submitted the document, as reported by the
/// fronting request handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issuer {
    /// Client user agent, when the transport carried one.
    pub user_agent: Option<String>,
    /// Client source address, when the transport carried one.
    pub source_ip: Option<String>,
}

/// Submission metadata attached to every document before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    /// Identifier assigned to this submission.
    pub unique_id: Uuid,
    /// Instant the submission was stamped.
    pub timestamp: DateTime<Utc>,
    /// Hostname of the node that stamped it.
    pub node: String,
    /// Identity of the submitter.
    pub issuer: Issuer,
}

impl Metadata {
    /// Capture fresh metadata for a submission from `issuer`.
    #[must_use]
    pub fn capture(issuer: Issuer) -> Self {
        Self {
            unique_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            node: local_node(),
            issuer,
        }
    }

    /// Serialise the metadata into its document representation.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "unique_id": self.unique_id,
            "timestamp": self.timestamp,
            "node": self.node,
            "issuer": {
                "user_agent": self.issuer.user_agent,
                "source_ip": self.issuer.source_ip,
            },
        })
    }
}

/// Insert `metadata` into `document` under the `metadata` key. A non-object
/// document is left untouched; the engine will reject it anyway.
pub fn stamp(document: &mut Value, metadata: &Metadata) {
    match document.as_object_mut() {
        Some(map) => {
            map.insert("metadata".to_string(), metadata.to_json());
        }
        None => warn!("refusing to stamp non-object submission"),
    }
}

fn local_node() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
