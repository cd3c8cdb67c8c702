//! Cascade propagation: spreads per-module severities through the affects
//! graph until a fixed point.
//!
//! The per-module severity forms a finite 4-level lattice and every update
//! strictly increases it, so the number of state-changing updates is bounded
//! by `4 * |modules|` and traversal terminates even on cyclic graphs.

use crate::config::CascadeConfig;
use crate::domain::{BumpReason, BumpSeverity, ModuleChange};
use crate::graph::ModuleGraph;
use std::collections::VecDeque;

/// Propagate severities to a fixed point, mutating the change arena in place.
///
/// A module's out-edges are traversed at most once per severity value: it is
/// re-expanded only after a strict severity increase. Returns per-module
/// expansion counts so callers and tests can audit the traversal.
pub fn propagate(
    graph: &ModuleGraph,
    changes: &mut [ModuleChange],
    transfer: &CascadeConfig,
) -> Vec<u32> {
    debug_assert_eq!(graph.len(), changes.len());

    // Initial frontier: modules already marked for processing with a real
    // severity. Forced-inclusion modules at severity None participate in the
    // output but are never cascade sources.
    let mut queue: VecDeque<usize> = (0..changes.len())
        .filter(|&i| changes[i].needs_processing && changes[i].severity != BumpSeverity::None)
        .collect();

    // Severity at which each module was last expanded
    let mut expanded_at: Vec<Option<BumpSeverity>> = vec![None; changes.len()];
    let mut expansions = vec![0u32; changes.len()];

    while let Some(m) = queue.pop_front() {
        let severity = changes[m].severity;
        if expanded_at[m] == Some(severity) {
            continue;
        }
        expanded_at[m] = Some(severity);
        expansions[m] += 1;

        let transferred = transfer.transfer(severity);
        if transferred == BumpSeverity::None {
            continue;
        }

        for &d in graph.affects(m) {
            let merged = changes[d].severity.merge(transferred);
            if merged != changes[d].severity {
                changes[d].severity = merged;
                changes[d].reason = BumpReason::DependencyCascade;
                changes[d].needs_processing = true;
                queue.push_back(d);
            } else if !changes[d].needs_processing {
                // Severity already covered but the module was not yet
                // participating; it keeps the merged value and joins the run.
                changes[d].needs_processing = true;
                changes[d].reason = BumpReason::DependencyCascade;
                queue.push_back(d);
            }
        }
    }

    expansions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Module, ModuleKind, Version};

    fn module(id: &str, affects: &[&str]) -> Module {
        Module {
            id: id.to_string(),
            name: id.to_string(),
            path: if id == "root" {
                ".".to_string()
            } else {
                id.to_string()
            },
            kind: if id == "root" {
                ModuleKind::Root
            } else {
                ModuleKind::Module
            },
            affects: affects.iter().map(|s| s.to_string()).collect(),
            version: Version::new(1, 0, 0),
            declared_version: true,
        }
    }

    fn seeded(graph: &ModuleGraph, seeds: &[(&str, BumpSeverity)]) -> Vec<ModuleChange> {
        let mut changes = vec![ModuleChange::inactive(); graph.len()];
        for (id, severity) in seeds {
            let idx = graph.index_of(id).unwrap();
            changes[idx].severity = *severity;
            changes[idx].reason = BumpReason::Commits;
            changes[idx].needs_processing = true;
        }
        changes
    }

    fn table(major: BumpSeverity, minor: BumpSeverity, patch: BumpSeverity) -> CascadeConfig {
        CascadeConfig {
            major,
            minor,
            patch,
        }
    }

    #[test]
    fn test_linear_cascade() {
        // C affects B affects A (root)
        let graph = ModuleGraph::new(vec![
            module("root", &[]),
            module("b", &["root"]),
            module("c", &["b"]),
        ])
        .unwrap();
        let mut changes = seeded(&graph, &[("c", BumpSeverity::Major)]);
        let transfer = table(
            BumpSeverity::Patch,
            BumpSeverity::Patch,
            BumpSeverity::Patch,
        );

        propagate(&graph, &mut changes, &transfer);

        let b = graph.index_of("b").unwrap();
        let a = graph.index_of("root").unwrap();
        assert_eq!(changes[b].severity, BumpSeverity::Patch);
        assert_eq!(changes[b].reason, BumpReason::DependencyCascade);
        assert_eq!(changes[a].severity, BumpSeverity::Patch);
        assert_eq!(changes[a].reason, BumpReason::DependencyCascade);
    }

    #[test]
    fn test_diamond_converges_with_single_expansion() {
        // A is affected by both B (Minor) and C (Patch)
        let graph = ModuleGraph::new(vec![
            module("root", &[]),
            module("b", &["root"]),
            module("c", &["root"]),
        ])
        .unwrap();
        let mut changes = seeded(
            &graph,
            &[("b", BumpSeverity::Minor), ("c", BumpSeverity::Patch)],
        );
        let transfer = table(
            BumpSeverity::Patch,
            BumpSeverity::Patch,
            BumpSeverity::Patch,
        );

        let expansions = propagate(&graph, &mut changes, &transfer);

        let a = graph.index_of("root").unwrap();
        assert_eq!(changes[a].severity, BumpSeverity::Patch);
        assert_eq!(changes[a].reason, BumpReason::DependencyCascade);
        assert!(expansions[a] <= 1, "root expanded {} times", expansions[a]);
    }

    #[test]
    fn test_reexpansion_on_severity_increase() {
        // b cascades Patch into root, then c cascades Major into b, which
        // must re-expand b and lift root to Major.
        let graph = ModuleGraph::new(vec![
            module("root", &[]),
            module("b", &["root"]),
            module("c", &["b"]),
        ])
        .unwrap();
        let mut changes = seeded(
            &graph,
            &[("b", BumpSeverity::Patch), ("c", BumpSeverity::Major)],
        );
        let transfer = table(
            BumpSeverity::Major,
            BumpSeverity::Minor,
            BumpSeverity::Patch,
        );

        let expansions = propagate(&graph, &mut changes, &transfer);

        let b = graph.index_of("b").unwrap();
        let root = graph.index_of("root").unwrap();
        assert_eq!(changes[b].severity, BumpSeverity::Major);
        assert_eq!(changes[root].severity, BumpSeverity::Major);
        assert_eq!(expansions[b], 2);
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = ModuleGraph::new(vec![
            module("root", &[]),
            module("a", &["b"]),
            module("b", &["a", "root"]),
        ])
        .unwrap();
        let mut changes = seeded(&graph, &[("a", BumpSeverity::Minor)]);
        let transfer = table(
            BumpSeverity::Minor,
            BumpSeverity::Minor,
            BumpSeverity::Patch,
        );

        propagate(&graph, &mut changes, &transfer);

        let b = graph.index_of("b").unwrap();
        let root = graph.index_of("root").unwrap();
        assert_eq!(changes[b].severity, BumpSeverity::Minor);
        assert_eq!(changes[root].severity, BumpSeverity::Minor);
    }

    #[test]
    fn test_none_transfer_stops_cascade() {
        let graph =
            ModuleGraph::new(vec![module("root", &[]), module("b", &["root"])]).unwrap();
        let mut changes = seeded(&graph, &[("b", BumpSeverity::Patch)]);
        let transfer = table(
            BumpSeverity::Patch,
            BumpSeverity::Patch,
            BumpSeverity::None,
        );

        propagate(&graph, &mut changes, &transfer);

        let root = graph.index_of("root").unwrap();
        assert!(!changes[root].needs_processing);
        assert_eq!(changes[root].severity, BumpSeverity::None);
    }

    #[test]
    fn test_earlier_reason_kept_when_merge_does_not_increase() {
        // root already has its own Minor from commits; the Patch arriving
        // from b must not overwrite the reason.
        let graph =
            ModuleGraph::new(vec![module("root", &[]), module("b", &["root"])]).unwrap();
        let mut changes = seeded(
            &graph,
            &[("root", BumpSeverity::Minor), ("b", BumpSeverity::Patch)],
        );
        let transfer = table(
            BumpSeverity::Patch,
            BumpSeverity::Patch,
            BumpSeverity::Patch,
        );

        propagate(&graph, &mut changes, &transfer);

        let root = graph.index_of("root").unwrap();
        assert_eq!(changes[root].severity, BumpSeverity::Minor);
        assert_eq!(changes[root].reason, BumpReason::Commits);
    }

    #[test]
    fn test_reason_becomes_cascade_when_merge_increases() {
        let graph =
            ModuleGraph::new(vec![module("root", &[]), module("b", &["root"])]).unwrap();
        let mut changes = seeded(
            &graph,
            &[("root", BumpSeverity::Patch), ("b", BumpSeverity::Major)],
        );
        let transfer = table(
            BumpSeverity::Major,
            BumpSeverity::Patch,
            BumpSeverity::Patch,
        );

        propagate(&graph, &mut changes, &transfer);

        let root = graph.index_of("root").unwrap();
        assert_eq!(changes[root].severity, BumpSeverity::Major);
        assert_eq!(changes[root].reason, BumpReason::DependencyCascade);
    }

    #[test]
    fn test_forced_inclusion_at_none_is_not_a_source() {
        // A module marked needs_processing with severity None (e.g. a
        // prerelease-unchanged run) must not push anything anywhere.
        let graph =
            ModuleGraph::new(vec![module("root", &[]), module("b", &["root"])]).unwrap();
        let mut changes = vec![ModuleChange::inactive(); graph.len()];
        let b = graph.index_of("b").unwrap();
        changes[b].needs_processing = true;
        changes[b].reason = BumpReason::PrereleaseUnchanged;

        let transfer = CascadeConfig::default();
        propagate(&graph, &mut changes, &transfer);

        let root = graph.index_of("root").unwrap();
        assert!(!changes[root].needs_processing);
        assert_eq!(changes[b].reason, BumpReason::PrereleaseUnchanged);
    }
}
