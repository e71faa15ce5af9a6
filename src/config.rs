//! Runtime configuration resolved once at startup.

use tracing::warn;

pub const DEFAULT_HOST: &str = "192.168.178.1";
pub const DEFAULT_PORT: u16 = 49000;
pub const DEFAULT_BUCKET: &str = "fritzbox";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub bucket: String,
}

impl Config {
    /// Apply defaults to raw CLI/environment values.
    ///
    /// An empty host means the default router address. A port that is empty,
    /// zero or unparseable means the default control port.
    pub fn resolve(host: Option<&str>, port: Option<&str>, bucket: &str) -> Self {
        let host = host
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOST)
            .to_string();

        let port = match port.filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => match parse_port(raw) {
                Some(0) => DEFAULT_PORT,
                Some(p) => p,
                None => {
                    warn!("ignoring invalid port {:?}, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
        };

        Self {
            host,
            port,
            bucket: bucket.to_string(),
        }
    }
}

/// Parse a port number with an optional base prefix.
///
/// Accepts `0x`/`0o`/`0b` prefixes, a bare leading `0` for octal, and `_`
/// between digits when a prefix is present.
pub fn parse_port(raw: &str) -> Option<u16> {
    let lower = raw.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        return parse_digits(&lower, 10);
    };

    parse_digits(&digits.replace('_', ""), radix)
}

fn parse_digits(digits: &str, radix: u32) -> Option<u16> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u16::from_str_radix(digits, radix).ok()
}
