//! Validated server address.
//!
//! The address is a syntactically valid IPv4 dotted-quad. Validation is
//! strict: four dot-separated decimal groups, each in 0-255. Normalization
//! re-renders the octets, so `192.168.001.010` parses to `192.168.1.10`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Syntactic gate: four dot-separated all-digit groups. Range checking is
/// done numerically after the regex accepts.
static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").unwrap());

/// A validated, normalized IPv4 server address.
///
/// Construction only succeeds through [`ServerAddress::parse`]; holders can
/// therefore assume the inner string is a well-formed dotted-quad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAddress(String);

impl ServerAddress {
    /// Validate `candidate` and return the normalized address.
    ///
    /// Rejects wrong group counts, non-numeric groups, and out-of-range
    /// octets. Leading zeros are accepted and normalized away.
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        let candidate = candidate.trim();

        let Some(caps) = IPV4_RE.captures(candidate) else {
            // Distinguish "wrong number of groups" from "group isn't a number"
            // so the user-facing message names the actual problem.
            let groups: Vec<&str> = candidate.split('.').collect();
            if groups.len() != 4 {
                return Err(ValidationError::WrongGroupCount {
                    candidate: candidate.to_string(),
                    groups: groups.len(),
                });
            }
            let bad = groups
                .iter()
                .find(|g| g.is_empty() || !g.chars().all(|c| c.is_ascii_digit()))
                .copied()
                .unwrap_or(candidate);
            return Err(ValidationError::NotNumeric {
                candidate: candidate.to_string(),
                group: bad.to_string(),
            });
        };

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            // Group i+1 is all digits and at most 3 of them, so u64 parse cannot fail.
            let value: u64 = caps[i + 1].parse().unwrap_or(u64::MAX);
            if value > 255 {
                return Err(ValidationError::OctetOutOfRange {
                    candidate: candidate.to_string(),
                    octet: value,
                });
            }
            *octet = value as u8;
        }

        Ok(Self(format!(
            "{}.{}.{}.{}",
            octets[0], octets[1], octets[2], octets[3]
        )))
    }

    /// The normalized dotted-quad string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServerAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
