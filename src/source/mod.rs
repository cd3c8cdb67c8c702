//! Commit source abstraction layer
//!
//! The calculation core never talks to a VCS directly: it computes
//! include/exclude path parameters ([crate::attribution::PathSpec]) and hands
//! them to a [CommitSource]. The concrete implementations are:
//!
//! - [git::GitCommitSource]: a real implementation using the `git2` crate
//! - [mock::MockCommitSource]: an in-memory implementation for testing
//!
//! Code should depend on the trait rather than a concrete implementation so
//! the pure core stays testable without any git repository.

pub mod git;
pub mod mock;

pub use git::GitCommitSource;
pub use mock::MockCommitSource;

use crate::attribution::PathSpec;
use crate::domain::Commit;
use crate::error::Result;

/// Source of attributed commits for one module's path spec
///
/// Implementations must return commits in a stable order (oldest first) and
/// must honor the spec's exclusions so commits in nested module paths are
/// never double-counted.
pub trait CommitSource: Send + Sync {
    /// Commits belonging to the module described by `spec`
    fn commits_for(&self, spec: &PathSpec) -> Result<Vec<Commit>>;
}
