use std::fmt;

/// Non-fatal conditions collected during a calculation run.
/// These should be reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcWarning {
    /// Fetching a module's commits failed; the module was treated as having
    /// no commits of its own
    CommitFetchFailed { module_id: String, reason: String },
    /// A module inherits its version rather than declaring one; the bump is
    /// computed against the inherited value
    InheritedVersion { module_id: String },
}

impl fmt::Display for CalcWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcWarning::CommitFetchFailed { module_id, reason } => {
                write!(
                    f,
                    "Could not fetch commits for module '{}': {} (treated as no commits)",
                    module_id, reason
                )
            }
            CalcWarning::InheritedVersion { module_id } => {
                write!(
                    f,
                    "Module '{}' inherits its version; bump computed against the inherited value",
                    module_id
                )
            }
        }
    }
}
