//! Target classification: CIDR validity, denylist membership, DNS
//! resolvability, and interface existence.
//!
//! # Design
//! - The denylist is read-only data injected at construction; callers refresh
//!   it by rebuilding the classifier, so there is no hidden process-wide
//!   mutable state.
//! - Resolution and interface enumeration go through [`Resolve`] and
//!   [`NicSource`] so tests never perform live I/O.

use std::collections::HashSet;

use ipnetwork::IpNetwork;
use tracing::warn;

use crate::error::NetError;
use crate::nics::{NicSource, SystemNics};
use crate::resolver::{Resolve, SystemResolver};

/// Network ranges never accepted as scan targets regardless of syntactic
/// validity. Exclusion lists may still reference them.
const DENYLIST_RANGES: &[&str] = &[
    "0.0.0.0/8",
    "127.0.0.0/8",
    "169.254.0.0/16",
    "224.0.0.0/4",
    "240.0.0.0/4",
    "::1/128",
    "fe80::/10",
    "ff00::/8",
];

/// The default set of disallowed ranges: unspecified, loopback, link-local,
/// multicast, and reserved blocks for both address families.
#[must_use]
pub fn default_denylist() -> Vec<IpNetwork> {
    DENYLIST_RANGES
        .iter()
        .filter_map(|range| range.parse().ok())
        .collect()
}

/// Answers the validation engine's questions about networks, domains, and
/// interfaces.
pub struct NetworkClassifier {
    denylist: Vec<IpNetwork>,
    resolver: Box<dyn Resolve>,
    nics: Box<dyn NicSource>,
}

impl NetworkClassifier {
    /// Build a classifier from an explicit denylist and injected
    /// collaborators.
    #[must_use]
    pub fn new(
        denylist: Vec<IpNetwork>,
        resolver: Box<dyn Resolve>,
        nics: Box<dyn NicSource>,
    ) -> Self {
        Self {
            denylist,
            resolver,
            nics,
        }
    }

    /// Build the production classifier: default denylist, system DNS
    /// resolver, and live interface enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`NetError`] when the system resolver cannot be constructed.
    pub fn with_defaults() -> Result<Self, NetError> {
        Ok(Self::new(
            default_denylist(),
            Box::new(SystemResolver::new()?),
            Box::new(SystemNics),
        ))
    }

    /// Whether `candidate` parses as a CIDR network (a bare address counts as
    /// a host network).
    #[must_use]
    pub fn is_network(&self, candidate: &str) -> bool {
        candidate.parse::<IpNetwork>().is_ok()
    }

    /// Whether `candidate` overlaps any denylisted range. An unparseable
    /// candidate is not in the denylist; syntax is [`Self::is_network`]'s
    /// concern.
    #[must_use]
    pub fn is_network_in_denylist(&self, candidate: &str) -> bool {
        let Ok(network) = candidate.parse::<IpNetwork>() else {
            return false;
        };
        let denied = self
            .denylist
            .iter()
            .any(|range| networks_overlap(*range, network));
        if denied {
            warn!(network = candidate, "denylisted network offered as scan target");
        }
        denied
    }

    /// Whether `name` is a syntactically valid hostname that currently
    /// resolves. A lookup failure is indistinguishable from a bad name.
    #[must_use]
    pub fn is_dns(&self, name: &str) -> bool {
        is_hostname(name) && self.resolver.resolve(name)
    }

    /// Names of the local interfaces available for scanning.
    #[must_use]
    pub fn get_nics(&self) -> HashSet<String> {
        self.nics.interfaces()
    }
}

impl std::fmt::Debug for NetworkClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkClassifier")
            .field("denylist", &self.denylist)
            .finish_non_exhaustive()
    }
}

/// Prefix-overlap test: two networks of the same family overlap when the
/// wider one contains the narrower one's network address.
fn networks_overlap(a: IpNetwork, b: IpNetwork) -> bool {
    match (a, b) {
        (IpNetwork::V4(_), IpNetwork::V4(_)) | (IpNetwork::V6(_), IpNetwork::V6(_)) => {
            if a.prefix() <= b.prefix() {
                a.contains(b.network())
            } else {
                b.contains(a.network())
            }
        }
        _ => false,
    }
}

/// RFC 1123 hostname shape: dot-separated labels of letters, digits, and
/// interior hyphens, at most 253 characters overall.
fn is_hostname(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticResolver {
        known: &'static [&'static str],
    }

    impl Resolve for StaticResolver {
        fn resolve(&self, name: &str) -> bool {
            self.known.contains(&name)
        }
    }

    struct StaticNics;

    impl NicSource for StaticNics {
        fn interfaces(&self) -> HashSet<String> {
            ["eth0", "lo"].iter().map(ToString::to_string).collect()
        }
    }

    fn classifier() -> NetworkClassifier {
        NetworkClassifier::new(
            default_denylist(),
            Box::new(StaticResolver {
                known: &["example.com"],
            }),
            Box::new(StaticNics),
        )
    }

    #[test]
    fn default_denylist_parses_every_range() {
        assert_eq!(default_denylist().len(), DENYLIST_RANGES.len());
    }

    #[test]
    fn recognises_cidr_networks() {
        let classifier = classifier();
        assert!(classifier.is_network("10.0.0.0/24"));
        assert!(classifier.is_network("192.168.1.1"));
        assert!(classifier.is_network("2001:db8::/32"));
        assert!(!classifier.is_network("not-a-cidr"));
        assert!(!classifier.is_network("10.0.0.0/33"));
    }

    #[test]
    fn denylist_catches_loopback_and_sub_ranges() {
        let classifier = classifier();
        assert!(classifier.is_network_in_denylist("127.0.0.0/8"));
        assert!(classifier.is_network_in_denylist("127.0.0.1/32"));
        assert!(classifier.is_network_in_denylist("169.254.10.0/24"));
        assert!(classifier.is_network_in_denylist("ff02::/16"));
        assert!(!classifier.is_network_in_denylist("10.0.0.0/24"));
        assert!(!classifier.is_network_in_denylist("garbage"));
    }

    #[test]
    fn wider_candidate_overlapping_denied_range_is_denied() {
        // 224.0.0.0/4 sits inside 128.0.0.0/1.
        assert!(classifier().is_network_in_denylist("128.0.0.0/1"));
    }

    #[test]
    fn dns_requires_syntax_and_resolution() {
        let classifier = classifier();
        assert!(classifier.is_dns("example.com"));
        assert!(!classifier.is_dns("does-not-resolve.invalid"));
        assert!(!classifier.is_dns("bad_host!name"));
        assert!(!classifier.is_dns(""));
    }

    #[test]
    fn hostname_shape_rules() {
        assert!(is_hostname("a.example-host.com"));
        assert!(is_hostname("localhost"));
        assert!(!is_hostname("-leading.example.com"));
        assert!(!is_hostname("trailing-.example.com"));
        assert!(!is_hostname("double..dot"));
        assert!(!is_hostname(&"x".repeat(254)));
    }

    #[test]
    fn nics_come_from_the_injected_source() {
        let nics = classifier().get_nics();
        assert!(nics.contains("eth0"));
        assert!(!nics.contains("wlan9"));
    }
}
