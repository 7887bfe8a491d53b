//! Local network-interface enumeration behind an injectable trait.

use std::collections::HashSet;

use sysinfo::Networks;

/// Enumerates the interfaces a scan may be pinned to.
pub trait NicSource: Send + Sync {
    /// Names of the interfaces currently available on this host.
    fn interfaces(&self) -> HashSet<String>;
}

/// Production source backed by `sysinfo`, refreshed on every call so a
/// freshly attached interface is visible to the next validation pass.
#[derive(Debug, Default)]
pub struct SystemNics;

impl NicSource for SystemNics {
    fn interfaces(&self) -> HashSet<String> {
        Networks::new_with_refreshed_list()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}
