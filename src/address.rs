//! SIP-style address parsing and formatting
//!
//! Handles the address subset relevant to contact matching: scheme, user,
//! host, optional port and parameters. Bare `user@host` input is accepted and
//! normalized to the `sip:` scheme; a bare user part can be completed with a
//! default domain via [`interpret`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Allowed characters in the user part (unreserved + the RFC 3261 user set,
/// percent escapes included).
static USER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\-_.!~*'()+&$,;?/%=]+$").unwrap()
});

/// Hostname: dot-separated labels, no leading/trailing separator.
static HOST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9\-.]*[A-Za-z0-9])?$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Sip,
    Sips,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
        }
    }
}

/// A parsed SIP-style address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipAddress {
    pub scheme: Scheme,
    pub username: String,
    pub domain: String,
    pub port: Option<u16>,
    /// URI parameters in source order, `name` or `name=value`.
    pub params: Vec<(String, Option<String>)>,
}

impl SipAddress {
    /// Lowercased `scheme:user@domain[:port]` form, parameters stripped.
    /// Two addresses denote the same target iff their keys are equal.
    pub fn canonical_key(&self) -> String {
        let mut key = format!(
            "{}:{}@{}",
            self.scheme.as_str(),
            self.username.to_lowercase(),
            self.domain.to_lowercase()
        );
        if let Some(port) = self.port {
            key.push(':');
            key.push_str(&port.to_string());
        }
        key
    }
}

impl fmt::Display for SipAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@{}",
            self.scheme.as_str(),
            self.username,
            self.domain.to_lowercase()
        )?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        for (name, value) in &self.params {
            match value {
                Some(value) => write!(f, ";{name}={value}")?,
                None => write!(f, ";{name}")?,
            }
        }
        Ok(())
    }
}

/// Parse `text` as a SIP-style address.
///
/// Accepted forms: `sip:user@host`, `sips:user@host`, bare `user@host`, each
/// optionally followed by `:port` and `;name[=value]` parameters. Both the
/// user and host part must be present; anything else returns `None`.
pub fn parse(text: &str) -> Option<SipAddress> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_lowercase();
    let (scheme, rest) = if let Some(rest) = strip_scheme(trimmed, &lower, "sips:") {
        (Scheme::Sips, rest)
    } else if let Some(rest) = strip_scheme(trimmed, &lower, "sip:") {
        (Scheme::Sip, rest)
    } else {
        (Scheme::Sip, trimmed)
    };

    let (user, host_and_params) = rest.split_once('@')?;
    if !USER_REGEX.is_match(user) {
        return None;
    }

    let mut segments = host_and_params.split(';');
    let host_port = segments.next()?;
    let (host, port) = match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port.parse::<u16>().ok()?)),
        None => (host_port, None),
    };
    if !HOST_REGEX.is_match(host) || host.contains("..") {
        return None;
    }

    let mut params = Vec::new();
    for segment in segments {
        if segment.is_empty() {
            return None;
        }
        match segment.split_once('=') {
            Some((name, value)) => params.push((name.to_string(), Some(value.to_string()))),
            None => params.push((segment.to_string(), None)),
        }
    }

    Some(SipAddress {
        scheme,
        username: user.to_string(),
        domain: host.to_string(),
        port,
        params,
    })
}

/// Interpret free text as an address, completing a bare user part with
/// `default_domain` when the text alone does not parse.
pub fn interpret(text: &str, default_domain: Option<&str>) -> Option<SipAddress> {
    if let Some(address) = parse(text) {
        return Some(address);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('@') || !USER_REGEX.is_match(trimmed) {
        return None;
    }
    let domain = default_domain?.trim();
    if domain.is_empty() || !HOST_REGEX.is_match(domain) || domain.contains("..") {
        return None;
    }

    Some(SipAddress {
        scheme: Scheme::Sip,
        username: trimmed.to_string(),
        domain: domain.to_string(),
        port: None,
        params: Vec::new(),
    })
}

fn strip_scheme<'a>(original: &'a str, lower: &str, scheme: &str) -> Option<&'a str> {
    if lower.starts_with(scheme) {
        Some(&original[scheme.len()..])
    } else {
        None
    }
}
