//! DNS resolution behind an injectable trait.
//!
//! Validation treats "does not resolve" the same as "not a domain", which
//! makes the check network-dependent. The [`Resolve`] trait keeps that I/O at
//! the edge so the engine stays testable without live DNS.

use std::time::Duration;

use hickory_resolver::Resolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use tracing::debug;

use crate::error::NetError;

/// Per-lookup timeout. Keeps validation from hanging on unreachable DNS
/// infrastructure; transient failures are terminal, not retried.
const DNS_TIMEOUT: Duration = Duration::from_secs(3);

/// Resolves hostnames to decide whether a scan target is reachable by name.
pub trait Resolve: Send + Sync {
    /// Whether `name` currently resolves to at least one address.
    fn resolve(&self, name: &str) -> bool;
}

/// Production resolver backed by `hickory-resolver` with a bounded timeout
/// and a single attempt per lookup.
pub struct SystemResolver {
    inner: Resolver,
}

impl SystemResolver {
    /// Build a resolver with the default upstream configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::ResolverInit`] when the resolver cannot be
    /// constructed.
    pub fn new() -> Result<Self, NetError> {
        let mut opts = ResolverOpts::default();
        opts.timeout = DNS_TIMEOUT;
        opts.attempts = 1;
        let inner =
            Resolver::new(ResolverConfig::default(), opts).map_err(|err| NetError::ResolverInit {
                detail: err.to_string(),
            })?;
        Ok(Self { inner })
    }
}

impl Resolve for SystemResolver {
    fn resolve(&self, name: &str) -> bool {
        match self.inner.lookup_ip(name) {
            Ok(lookup) => lookup.iter().next().is_some(),
            Err(err) => {
                debug!(domain = name, error = %err, "DNS lookup failed");
                false
            }
        }
    }
}

impl std::fmt::Debug for SystemResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemResolver").finish_non_exhaustive()
    }
}
