//! Calculation orchestration: fetch -> classify -> cascade -> format.
//!
//! A run is atomic at this boundary: the caller either receives the full,
//! frozen outcome or an error. All working state (the change arena, the
//! worklist) is allocated fresh per invocation.

use crate::attribution::path_spec;
use crate::cascade;
use crate::classifier::BumpClassifier;
use crate::config::Config;
use crate::domain::{BumpReason, BumpSeverity, ModuleChange, ModuleVersionChange};
use crate::error::Result;
use crate::formatter::VersionFormatter;
use crate::graph::ModuleGraph;
use crate::source::CommitSource;
use crate::warnings::CalcWarning;

/// Frozen result of one calculation run
#[derive(Debug)]
pub struct CalculationOutcome {
    /// Modules whose version changed, in module order
    pub changes: Vec<ModuleVersionChange>,
    /// Non-fatal conditions encountered along the way
    pub warnings: Vec<CalcWarning>,
}

pub struct VersionCalculator<'a> {
    config: &'a Config,
}

impl<'a> VersionCalculator<'a> {
    /// Create a calculator over a validated configuration
    ///
    /// Configuration problems are fatal here, before any calculation starts.
    pub fn new(config: &'a Config) -> Result<Self> {
        config.validate()?;
        Ok(VersionCalculator { config })
    }

    /// Run one full calculation over the graph
    ///
    /// `build_metadata` is the adapter-supplied short commit id stamped when
    /// the build-metadata mode is on. Commit fetch failures degrade to an
    /// empty commit list for that module and surface as warnings.
    pub fn calculate<S: CommitSource>(
        &self,
        graph: &ModuleGraph,
        source: &S,
        build_metadata: Option<String>,
    ) -> Result<CalculationOutcome> {
        let classifier = BumpClassifier::new(&self.config.severities);
        let mut warnings = Vec::new();

        // Seed the change arena from each module's own commits. Cascade must
        // not start until every initial severity is known.
        let mut changes = Vec::with_capacity(graph.len());
        for module in graph.modules() {
            let spec = path_spec(module, graph);
            let commits = match source.commits_for(&spec) {
                Ok(commits) => commits,
                Err(e) => {
                    warnings.push(CalcWarning::CommitFetchFailed {
                        module_id: module.id.clone(),
                        reason: e.to_string(),
                    });
                    Vec::new()
                }
            };

            let severity = classifier.classify(&commits);
            changes.push(ModuleChange {
                severity,
                reason: BumpReason::Commits,
                needs_processing: severity != BumpSeverity::None,
            });
        }

        // Mode-driven forced inclusion: participation only, never severity
        if self.config.modes.prerelease && self.config.modes.include_unchanged {
            for change in &mut changes {
                if !change.needs_processing {
                    change.needs_processing = true;
                    change.reason = BumpReason::PrereleaseUnchanged;
                }
            }
        }
        if self.config.modes.build_metadata {
            for change in &mut changes {
                if !change.needs_processing {
                    change.needs_processing = true;
                    change.reason = BumpReason::BuildMetadata;
                }
            }
        }

        cascade::propagate(graph, &mut changes, &self.config.cascade);

        let formatter = VersionFormatter::new(self.config, build_metadata);
        let results = formatter.format(graph, &changes);

        for result in &results {
            if let Some(idx) = graph.index_of(&result.module_id) {
                if !graph.module(idx).declared_version {
                    warnings.push(CalcWarning::InheritedVersion {
                        module_id: result.module_id.clone(),
                    });
                }
            }
        }

        Ok(CalculationOutcome {
            changes: results,
            warnings,
        })
    }
}
