//! Commit attribution: path parameters that scope a module's history.
//!
//! A commit touching `core/api/` must count for `core/api` and not also for
//! `core` or the root. Each module's fetch is therefore scoped to its own
//! path minus the paths of every strictly nested module.

use crate::domain::{Module, ROOT_PATH};
use crate::graph::ModuleGraph;

/// Include/exclude path parameters for one module's commit fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    /// The module's own path, "." for the root module
    pub path: String,
    /// Paths of strictly nested modules whose commits must not count here
    pub excludes: Vec<String>,
}

impl PathSpec {
    /// Whether a changed file belongs to this spec's module
    pub fn contains(&self, file_path: &str) -> bool {
        path_within(file_path, &self.path)
            && !self.excludes.iter().any(|ex| path_within(file_path, ex))
    }
}

/// Compute the fetch parameters for one module against the full module set
///
/// Pure function: the exclusion set is every other module whose path is a
/// strict descendant of this module's path, sorted for determinism.
pub fn path_spec(module: &Module, graph: &ModuleGraph) -> PathSpec {
    let mut excludes: Vec<String> = graph
        .modules()
        .iter()
        .filter(|other| other.id != module.id && is_descendant(&other.path, &module.path))
        .map(|other| other.path.clone())
        .collect();
    excludes.sort();

    PathSpec {
        path: module.path.clone(),
        excludes,
    }
}

/// Whether `path` is a strict descendant of `ancestor`
///
/// The root sentinel "." is an ancestor of every non-root path.
fn is_descendant(path: &str, ancestor: &str) -> bool {
    if ancestor == ROOT_PATH {
        return path != ROOT_PATH;
    }
    path.starts_with(ancestor)
        && path.len() > ancestor.len()
        && path.as_bytes()[ancestor.len()] == b'/'
}

/// Whether a file path lives under a module path (inclusive)
fn path_within(file_path: &str, module_path: &str) -> bool {
    if module_path == ROOT_PATH {
        return true;
    }
    file_path == module_path || is_descendant(file_path, module_path)
}
