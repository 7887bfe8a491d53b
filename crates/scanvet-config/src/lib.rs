#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Vetting of scan-configuration documents before pipeline admission.
//!
//! Layout: `metadata.rs` (submission stamping), `safety.rs` (free-text and
//! URL checks), `validate.rs` (the rule engine and its `Verdict`),
//! `model.rs` (read-only accessor views for accepted documents and scan
//! results), `helpers.rs` (presentation helpers).

pub mod error;
pub mod helpers;
pub mod metadata;
pub mod model;
pub mod safety;
pub mod validate;

pub use error::ValidationError;
pub use metadata::{Issuer, Metadata, stamp};
pub use model::{ScanConfig, ScanReport};
pub use safety::{is_string_safe, is_string_url};
pub use validate::{Verdict, Verifier};
