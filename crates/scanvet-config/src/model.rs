//! Read-only accessor views over accepted documents and scan results.
//!
//! These are the downstream faces of the pipeline: once a submission passes
//! the verifier, consumers read it through [`ScanConfig`] instead of
//! navigating raw JSON, and per-host results come back through
//! [`ScanReport`].

use serde_json::Value;

/// Typed view over an accepted scan-configuration document.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    values: Value,
}

impl ScanConfig {
    /// Wrap an accepted document.
    #[must_use]
    pub const fn new(values: Value) -> Self {
        Self { values }
    }

    /// The underlying document.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.values
    }

    /// Stamped submission metadata.
    #[must_use]
    pub fn metadata(&self) -> &Value {
        &self.values["metadata"]
    }

    /// Identifier assigned at stamping time.
    #[must_use]
    pub fn scan_id(&self) -> Option<&str> {
        self.values["metadata"]["unique_id"].as_str()
    }

    /// Target networks, in submission order.
    #[must_use]
    pub fn networks(&self) -> Vec<&str> {
        str_list(&self.values["targets"]["networks"])
    }

    /// Networks carved out of the scan, in submission order.
    #[must_use]
    pub fn excluded_networks(&self) -> Vec<&str> {
        str_list(&self.values["targets"]["excluded_networks"])
    }

    /// Target domains, in submission order.
    #[must_use]
    pub fn domains(&self) -> Vec<&str> {
        str_list(&self.values["targets"]["domains"])
    }

    /// Permitted aggressiveness level (0-3).
    #[must_use]
    pub fn aggressive_level(&self) -> Option<i64> {
        self.values["config"]["allow_aggressive"].as_i64()
    }

    /// Whether denial-of-service checks are permitted.
    #[must_use]
    pub fn allow_dos(&self) -> Option<bool> {
        self.values["config"]["allow_dos"].as_bool()
    }

    /// Whether brute-force checks are permitted.
    #[must_use]
    pub fn allow_bf(&self) -> Option<bool> {
        self.values["config"]["allow_bf"].as_bool()
    }

    /// Whether outbound internet access is permitted during the scan.
    #[must_use]
    pub fn allow_internet(&self) -> Option<bool> {
        self.values["config"]["allow_internet"].as_bool()
    }

    /// Upper bound on ports probed per host.
    #[must_use]
    pub fn max_ports(&self) -> Option<i64> {
        self.values["config"]["scan_opts"]["max_ports"].as_i64()
    }

    /// Username dictionary for credential checks.
    #[must_use]
    pub fn usernames(&self) -> Vec<&str> {
        str_list(&self.values["config"]["dictionary"]["usernames"])
    }

    /// Password dictionary for credential checks.
    #[must_use]
    pub fn passwords(&self) -> Vec<&str> {
        str_list(&self.values["config"]["dictionary"]["passwords"])
    }

    /// Pinned interface, `None` after normalisation or when unset.
    #[must_use]
    pub fn interface(&self) -> Option<&str> {
        self.values["config"]["scan_opts"]["interface"].as_str()
    }

    /// Worker count for the attack phase.
    #[must_use]
    pub fn attack_threads(&self) -> Option<i64> {
        self.values["config"]["scan_opts"]["parallel_attack"].as_i64()
    }

    /// Worker count for the scan phase.
    #[must_use]
    pub fn scan_threads(&self) -> Option<i64> {
        self.values["config"]["scan_opts"]["parallel_scan"].as_i64()
    }

    /// Post-event webhook, when one was supplied.
    #[must_use]
    pub fn webhook(&self) -> Option<&str> {
        match self.values["config"]["post_event"]["webhook"].as_str() {
            Some("") | None => None,
            Some(webhook) => Some(webhook),
        }
    }

    /// Scheduling mode (`once` or `continuous`).
    #[must_use]
    pub fn frequency(&self) -> Option<&str> {
        self.values["config"]["frequency"].as_str()
    }
}

/// Typed view over one host's scan result, focused on a single port.
#[derive(Debug, Clone)]
pub struct ScanReport {
    port: u16,
    values: Value,
}

impl ScanReport {
    /// Wrap a per-host result document, focused on `port`.
    #[must_use]
    pub const fn new(port: u16, values: Value) -> Self {
        Self { port, values }
    }

    /// CPE identifier detected on the focused port.
    #[must_use]
    pub fn cpe(&self) -> Option<&str> {
        self.port_field("cpe").as_str()
    }

    /// Detected product version.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.port_field("version").as_str()
    }

    /// Module that produced the finding.
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.port_field("module").as_str()
    }

    /// Detected product, with an explicit marker when detection came back
    /// empty.
    #[must_use]
    pub fn product(&self) -> &str {
        match self.port_field("product").as_str() {
            Some("") | None => "N/A",
            Some(product) => product,
        }
    }

    /// Reported state of the focused port.
    #[must_use]
    pub fn port_state(&self) -> Option<&str> {
        self.port_field("state").as_str()
    }

    /// Every port reported for the host.
    #[must_use]
    pub fn ports(&self) -> Vec<u16> {
        self.values["ports"]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_u64)
                    .filter_map(|port| u16::try_from(port).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Domain the host was reached through, when known.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.values["domain"].as_str()
    }

    fn port_field(&self, field: &str) -> &Value {
        &self.values["port_data"][self.port.to_string()][field]
    }
}

fn str_list(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
