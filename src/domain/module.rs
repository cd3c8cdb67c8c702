use crate::domain::severity::BumpSeverity;
use crate::domain::version::Version;
use std::fmt;

/// Root sentinel path for the top-level module
pub const ROOT_PATH: &str = ".";

/// Whether a module is the repository root or a nested module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Root,
    Module,
}

/// Immutable module snapshot supplied by a build-system adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Unique hierarchical identifier (e.g. "core/api")
    pub id: String,
    pub name: String,
    /// Path relative to the repository root, "." for the root module
    pub path: String,
    pub kind: ModuleKind,
    /// Ids of modules a change in this module propagates to
    pub affects: Vec<String>,
    pub version: Version,
    /// Whether the module owns an explicit version or inherits one
    pub declared_version: bool,
}

/// Why a module ended up in the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpReason {
    /// The module's own commits produced a severity
    Commits,
    /// Severity arrived through the affects graph
    DependencyCascade,
    /// Forced inclusion of unchanged modules in a pre-release run
    PrereleaseUnchanged,
    /// Forced inclusion for build metadata stamping
    BuildMetadata,
    /// Included only because the snapshot suffix changed the version
    SnapshotSuffix,
}

impl fmt::Display for BumpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpReason::Commits => write!(f, "commits"),
            BumpReason::DependencyCascade => write!(f, "dependency-cascade"),
            BumpReason::PrereleaseUnchanged => write!(f, "prerelease-unchanged"),
            BumpReason::BuildMetadata => write!(f, "build-metadata"),
            BumpReason::SnapshotSuffix => write!(f, "snapshot-suffix"),
        }
    }
}

/// Per-module working record, mutated in place during the cascade
///
/// Lives in an arena indexed by module position; frozen into a
/// [ModuleVersionChange] by the formatter and discarded after each run.
#[derive(Debug, Clone)]
pub struct ModuleChange {
    pub severity: BumpSeverity,
    pub reason: BumpReason,
    pub needs_processing: bool,
}

impl ModuleChange {
    /// Initial record for a module that has nothing to do yet
    pub fn inactive() -> Self {
        ModuleChange {
            severity: BumpSeverity::None,
            reason: BumpReason::Commits,
            needs_processing: false,
        }
    }
}

/// Frozen result record for one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleVersionChange {
    pub module_id: String,
    pub module_name: String,
    pub from_version: String,
    pub to_version: String,
    pub severity: BumpSeverity,
    pub reason: BumpReason,
}
