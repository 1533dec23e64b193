//! URI parsing and validation
//!
//! Resource references such as `model://shapes/box` or
//! `https://example.org/assets/mesh.dae?rev=2` are validated here before
//! any resolver touches them.

use crate::error::{Error, Result};
use crate::util;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed URI: `scheme://authority/path?query#fragment`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Uri {
    pub scheme: String,
    pub authority: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Uri {
    /// Parse a URI string
    pub fn parse(input: &str) -> Result<Self> {
        let input = util::trimmed(input);
        if input.is_empty() {
            return Err(Error::InvalidUri("empty string".to_string()));
        }

        let (rest, fragment) = split_once_owned(&input, '#');
        let (rest, query) = split_once_owned(&rest, '?');

        let (scheme, rest) = rest
            .split_once(':')
            .ok_or_else(|| Error::InvalidUri(format!("missing scheme in [{input}]")))?;
        if !valid_scheme(scheme) {
            return Err(Error::InvalidUri(format!("invalid scheme [{scheme}]")));
        }
        let scheme = util::lowercase(scheme);

        let (authority, path) = if let Some(after) = rest.strip_prefix("//") {
            match after.find('/') {
                Some(slash) => (Some(&after[..slash]), &after[slash..]),
                None => (Some(after), ""),
            }
        } else {
            (None, rest)
        };

        // A host is mandatory when using a scheme other than file
        if scheme != "file" && authority.is_some_and(str::is_empty) {
            log::error!("A host is mandatory when using a scheme other than file: [{input}]");
            return Err(Error::InvalidUri(format!("missing host in [{input}]")));
        }

        for part in [Some(path), authority, query.as_deref(), fragment.as_deref()]
            .into_iter()
            .flatten()
        {
            validate_escapes(part)?;
        }

        if let Some(q) = &query {
            if !valid_query(q) {
                return Err(Error::InvalidUri(format!("invalid query [{q}]")));
            }
        }

        Ok(Self {
            scheme,
            authority: authority.map(str::to_string),
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// Check whether a string is a valid URI
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

fn split_once_owned(input: &str, sep: char) -> (String, Option<String>) {
    match input.split_once(sep) {
        Some((head, tail)) => (head.to_string(), Some(tail.to_string())),
        None => (input.to_string(), None),
    }
}

/// Scheme grammar: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Percent escapes must be `%` followed by two hex digits
fn validate_escapes(part: &str) -> Result<()> {
    let bytes = part.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 3 > bytes.len() {
                return Err(Error::InvalidUri(format!("truncated escape in [{part}]")));
            }
            if !bytes[i + 1].is_ascii_hexdigit() || !bytes[i + 2].is_ascii_hexdigit() {
                return Err(Error::InvalidUri(format!("invalid escape in [{part}]")));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Queries are `key=value` pairs joined by `&`
fn valid_query(query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    util::split(query, "&")
        .iter()
        .all(|pair| matches!(pair.split_once('='), Some((k, _)) if !k.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_uri() {
        let uri = Uri::parse("https://example.org/assets/mesh.dae?rev=2#frag").unwrap();
        assert_eq!(uri.scheme, "https");
        assert_eq!(uri.authority.as_deref(), Some("example.org"));
        assert_eq!(uri.path, "/assets/mesh.dae");
        assert_eq!(uri.query.as_deref(), Some("rev=2"));
        assert_eq!(uri.fragment.as_deref(), Some("frag"));
        assert_eq!(
            uri.to_string(),
            "https://example.org/assets/mesh.dae?rev=2#frag"
        );
    }

    #[test]
    fn host_mandatory_for_non_file_schemes() {
        assert!(!Uri::is_valid("https:///"));
        assert!(Uri::is_valid("file:///tmp/mesh.dae"));
        assert!(Uri::is_valid("https://host/"));
    }

    #[test]
    fn scheme_grammar() {
        assert!(Uri::is_valid("model://shapes/box"));
        assert!(Uri::is_valid("x-scheme+v1.0://host/p"));
        assert!(!Uri::is_valid("9http://host/p"));
        assert!(!Uri::is_valid("ht tp://host/p"));
        assert!(!Uri::is_valid("no-scheme-here"));
        assert!(!Uri::is_valid(""));
    }

    #[test]
    fn scheme_is_lowercased() {
        let uri = Uri::parse("FILE:///tmp/a").unwrap();
        assert_eq!(uri.scheme, "file");
    }

    #[test]
    fn no_authority() {
        let uri = Uri::parse("file:/tmp/mesh.dae").unwrap();
        assert_eq!(uri.authority, None);
        assert_eq!(uri.path, "/tmp/mesh.dae");
        assert_eq!(uri.to_string(), "file:/tmp/mesh.dae");
    }

    #[test]
    fn query_grammar() {
        assert!(Uri::is_valid("model://shapes/box?name=unit_box"));
        assert!(Uri::is_valid("model://shapes/box?a=1&b=2"));
        assert!(!Uri::is_valid("model://shapes/box?novalue"));
        assert!(!Uri::is_valid("model://shapes/box?=orphan"));
        assert!(!Uri::is_valid("model://shapes/box?"));
    }

    #[test]
    fn percent_escapes() {
        assert!(Uri::is_valid("file:///tmp/my%20mesh.dae"));
        assert!(!Uri::is_valid("file:///tmp/my%2"));
        assert!(!Uri::is_valid("file:///tmp/my%zzmesh"));
    }

    #[test]
    fn from_str_roundtrip() {
        let uri: Uri = "model://shapes/box?a=1#top".parse().unwrap();
        let again: Uri = uri.to_string().parse().unwrap();
        assert_eq!(uri, again);
    }
}
