//! Pre-release tag handling for semantic versioning
//!
//! A pre-release tag is an identifier with an optional trailing numeric
//! counter, e.g. "alpha.0" or "SNAPSHOT". The counter is what gets
//! incremented when a pre-release run repeats without new release-level
//! changes. According to semver.org: https://semver.org/#spec-item-9

use crate::error::{ModverError, Result};
use std::fmt;

/// Pre-release tag with an optional numeric counter
///
/// # Examples
/// - "alpha" -> PreRelease { identifier: "alpha", counter: None }
/// - "alpha.0" -> PreRelease { identifier: "alpha", counter: Some(0) }
/// - "rc.3" -> PreRelease { identifier: "rc", counter: Some(3) }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    /// Identifier portion (may itself contain dots or hyphens)
    pub identifier: String,
    /// Trailing numeric counter, incremented per pre-release cycle
    pub counter: Option<u32>,
}

impl PreRelease {
    /// Open a fresh pre-release tag at counter 0, e.g. "alpha.0"
    pub fn opened(identifier: &str) -> Self {
        PreRelease {
            identifier: identifier.to_string(),
            counter: Some(0),
        }
    }

    /// Parse a pre-release tag from the raw string after the `-` separator
    ///
    /// A trailing dot-separated numeric segment becomes the counter; the
    /// rest is the identifier.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ModverError::version("Empty pre-release tag"));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(ModverError::version(format!(
                "Invalid pre-release tag: '{}'",
                s
            )));
        }

        match s.rsplit_once('.') {
            Some((identifier, tail)) if !identifier.is_empty() => {
                if let Ok(counter) = tail.parse::<u32>() {
                    Ok(PreRelease {
                        identifier: identifier.to_string(),
                        counter: Some(counter),
                    })
                } else {
                    Ok(PreRelease {
                        identifier: s.to_string(),
                        counter: None,
                    })
                }
            }
            _ => Ok(PreRelease {
                identifier: s.to_string(),
                counter: None,
            }),
        }
    }

    /// Increment the counter
    ///
    /// A tag without a counter gains `.1`.
    pub fn incremented(&self) -> Self {
        PreRelease {
            identifier: self.identifier.clone(),
            counter: Some(self.counter.map_or(1, |n| n + 1)),
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(counter) = self.counter {
            write!(f, ".{}", counter)?;
        }
        Ok(())
    }
}
