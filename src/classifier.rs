//! Commit classification: reduces a module's commit list to one initial
//! bump severity.

use crate::config::{SeverityConfig, TypeMapping};
use crate::domain::{BumpSeverity, Commit};
use std::collections::HashMap;

/// Maps commits to severities using the configured type rules
pub struct BumpClassifier {
    types: HashMap<String, TypeMapping>,
    default_severity: BumpSeverity,
}

impl BumpClassifier {
    pub fn new(config: &SeverityConfig) -> Self {
        BumpClassifier {
            types: config.types.clone(),
            default_severity: config.default_severity,
        }
    }

    /// Severity of a single commit
    ///
    /// Breaking commits are `Major` regardless of type. `ignore` mappings
    /// resolve to `None` here and never reach the cascade.
    pub fn classify_commit(&self, commit: &Commit) -> BumpSeverity {
        if commit.breaking {
            return BumpSeverity::Major;
        }

        match self.types.get(&commit.r#type) {
            Some(TypeMapping::Major) => BumpSeverity::Major,
            Some(TypeMapping::Minor) => BumpSeverity::Minor,
            Some(TypeMapping::Patch) => BumpSeverity::Patch,
            Some(TypeMapping::Ignore) => BumpSeverity::None,
            None => self.default_severity,
        }
    }

    /// Reduce a module's commits to its initial severity
    ///
    /// The reduction is a maximum over the severity order, so it is
    /// independent of commit order; an empty or all-ignored list yields
    /// `None`.
    pub fn classify(&self, commits: &[Commit]) -> BumpSeverity {
        commits
            .iter()
            .map(|c| self.classify_commit(c))
            .fold(BumpSeverity::None, BumpSeverity::merge)
    }
}
