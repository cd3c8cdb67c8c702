//! Version formatting: turns each processed module's severity and reason
//! into a final version string through four ordered transforms (base bump,
//! build metadata, snapshot suffix, output filtering).

use crate::config::{Config, ModeConfig, SnapshotConfig};
use crate::domain::{BumpReason, BumpSeverity, ModuleChange, ModuleVersionChange};
use crate::graph::ModuleGraph;

pub struct VersionFormatter<'a> {
    modes: &'a ModeConfig,
    prerelease_id: &'a str,
    snapshot: &'a SnapshotConfig,
    /// Short commit id stamped as build metadata when the mode is on
    build_metadata: Option<String>,
}

impl<'a> VersionFormatter<'a> {
    pub fn new(config: &'a Config, build_metadata: Option<String>) -> Self {
        VersionFormatter {
            modes: &config.modes,
            prerelease_id: &config.prerelease.identifier,
            snapshot: &config.snapshot,
            build_metadata,
        }
    }

    /// Freeze the change arena into the ordered result list
    ///
    /// Only modules with final `needs_processing == true` appear. The
    /// snapshot transform is the single path by which formatting itself can
    /// newly qualify a module: when the suffix is the only thing that
    /// changed its version, the module joins with reason `snapshot-suffix`.
    pub fn format(&self, graph: &ModuleGraph, changes: &[ModuleChange]) -> Vec<ModuleVersionChange> {
        let mut results = Vec::new();

        for (idx, change) in changes.iter().enumerate() {
            let module = graph.module(idx);
            let from = &module.version;
            let mut needs = change.needs_processing;
            let mut reason = change.reason;
            let mut to = from.clone();

            if needs {
                if change.severity != BumpSeverity::None && self.modes.prerelease {
                    to = from.prerelease_bump(change.severity, self.prerelease_id);
                } else if change.severity != BumpSeverity::None {
                    to = from.bump(change.severity);
                } else if reason == BumpReason::PrereleaseUnchanged {
                    to = from.prerelease_bump(BumpSeverity::None, self.prerelease_id);
                }

                if self.modes.build_metadata {
                    if let Some(metadata) = &self.build_metadata {
                        to = to.with_build(metadata);
                    }
                }
            }

            if self.modes.snapshot && self.snapshot.supported {
                let suffixed = to.append_snapshot(&self.snapshot.suffix);
                if suffixed != to {
                    to = suffixed;
                    if !needs {
                        needs = true;
                        reason = BumpReason::SnapshotSuffix;
                    }
                }
            }

            if needs {
                results.push(ModuleVersionChange {
                    module_id: module.id.clone(),
                    module_name: module.name.clone(),
                    from_version: from.to_string(),
                    to_version: to.to_string(),
                    severity: change.severity,
                    reason,
                });
            }
        }

        results
    }
}
