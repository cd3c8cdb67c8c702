use serde::{Deserialize, Serialize};
use std::fmt;

/// Bump severity lattice, ordered `None < Patch < Minor < Major`.
///
/// Cascade merges rely on this total order: merging two severities is
/// simply taking the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpSeverity {
    None,
    Patch,
    Minor,
    Major,
}

impl BumpSeverity {
    /// Merge two severities, keeping the stronger one
    pub fn merge(self, other: BumpSeverity) -> BumpSeverity {
        self.max(other)
    }
}

impl Default for BumpSeverity {
    fn default() -> Self {
        BumpSeverity::None
    }
}

impl fmt::Display for BumpSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpSeverity::None => write!(f, "none"),
            BumpSeverity::Patch => write!(f, "patch"),
            BumpSeverity::Minor => write!(f, "minor"),
            BumpSeverity::Major => write!(f, "major"),
        }
    }
}
