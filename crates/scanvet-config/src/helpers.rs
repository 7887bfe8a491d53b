//! Presentation helpers for rendering findings.

/// Render a CPE identifier as an NVD search hyperlink.
#[must_use]
pub fn cpe_hyperlink(cpe: &str) -> String {
    format!(
        "<a href=\"https://nvd.nist.gov/vuln/search/results?cpe_version={cpe}\">CVE List</a>"
    )
}

/// Render a CVE identifier as an NVD detail hyperlink.
#[must_use]
pub fn cve_hyperlink(cve: &str) -> String {
    format!("<a href=\"https://nvd.nist.gov/vuln/detail/{cve}\">{cve}</a>")
}

/// Best-effort translation of a port number to its well-known service name.
/// Unmapped ports yield an explicit marker rather than failing.
#[must_use]
pub const fn port_service_name(port: u16) -> &'static str {
    match port {
        21 => "ftp",
        22 => "ssh",
        23 => "telnet",
        25 => "smtp",
        53 => "domain",
        80 => "http",
        110 => "pop3",
        111 => "sunrpc",
        135 => "msrpc",
        139 => "netbios-ssn",
        143 => "imap",
        389 => "ldap",
        443 => "https",
        445 => "microsoft-ds",
        465 => "smtps",
        587 => "submission",
        636 => "ldaps",
        993 => "imaps",
        995 => "pop3s",
        1433 => "ms-sql-s",
        1521 => "oracle",
        2049 => "nfs",
        3306 => "mysql",
        3389 => "ms-wbt-server",
        5432 => "postgresql",
        5900 => "vnc",
        6379 => "redis",
        8080 => "http-alt",
        8443 => "https-alt",
        9200 => "elasticsearch",
        11211 => "memcache",
        27017 => "mongodb",
        _ => "unknown",
    }
}
