//! Extraction of IP networks from raw source text.
//!
//! Two layouts are understood: BIND-style ACL files, where the networks for
//! a country live inside an `acl <CC> { ... };` block, and plain lists with
//! one network per line. In both, a token that fails CIDR validation is
//! counted and skipped, never fatal, and a bare address becomes a host
//! route (`/32` or `/128`).

use ipnet::IpNet;
use std::net::IpAddr;
use tracing::debug;

/// Networks extracted from one source blob.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    pub networks: Vec<IpNet>,
    /// Tokens that looked like data but failed CIDR validation.
    pub skipped: usize,
}

impl Parsed {
    fn push_token(&mut self, token: &str) {
        match parse_token(token) {
            Some(net) => self.networks.push(net),
            None => {
                debug!("Skipping invalid network token: {}", token);
                self.skipped += 1;
            }
        }
    }
}

/// Parse a BIND-style ACL blob, keeping only the block(s) named `country`.
///
/// Lines outside the country's block are framing, not tokens; they are
/// neither parsed nor counted. A blob without a matching block yields an
/// empty result.
pub fn parse_acl(content: &str, country: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let mut in_block = false;

    for line in content.lines() {
        let line = line.trim();
        if !in_block {
            in_block = is_block_header(line, country);
            continue;
        }
        if line.contains('}') {
            in_block = false;
            continue;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let token = line.trim_end_matches(';').trim();
        if !token.is_empty() {
            parsed.push_token(token);
        }
    }
    parsed
}

/// Parse a plain list: one address or CIDR per line, `#` comments allowed.
pub fn parse_list(content: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let token = line.trim_end_matches(';').trim();
        if !token.is_empty() {
            parsed.push_token(token);
        }
    }
    parsed
}

/// Host bits below the prefix are cleared so records compare canonically.
fn parse_token(token: &str) -> Option<IpNet> {
    if token.contains('/') {
        token.parse::<IpNet>().ok().map(|net| net.trunc())
    } else {
        token.parse::<IpAddr>().ok().map(IpNet::from)
    }
}

/// Match `acl <name> {` headers where `<name>` equals the country code
/// exactly; quoted names are accepted.
fn is_block_header(line: &str, country: &str) -> bool {
    let Some(rest) = line.strip_prefix("acl") else {
        return false;
    };
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    let name = rest
        .trim_start()
        .split(|c: char| c == '{' || c.is_whitespace())
        .next()
        .unwrap_or("");
    name.trim_matches('"') == country
}
