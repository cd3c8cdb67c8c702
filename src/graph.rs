//! Validated snapshot of the module set and its "affects" edges.
//!
//! The graph is adapter-supplied data: edges are taken exactly as given and
//! no hierarchy-implies-dependency edge is ever inferred. Validation happens
//! once at construction so the calculation phases can index freely.

use crate::domain::{Module, ModuleKind};
use crate::error::{ModverError, Result};
use std::collections::HashMap;

/// Immutable module graph with resolved adjacency over the affects edges
#[derive(Debug)]
pub struct ModuleGraph {
    modules: Vec<Module>,
    index: HashMap<String, usize>,
    affects: Vec<Vec<usize>>,
}

impl ModuleGraph {
    /// Build and validate a graph from adapter-supplied modules
    ///
    /// Fails when module ids are duplicated, when the module set does not
    /// contain exactly one root, or when any affects edge references an
    /// unknown module id. Edge violations are reported in one diagnostic
    /// enumerating every offending edge.
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        let mut index = HashMap::with_capacity(modules.len());
        for (i, module) in modules.iter().enumerate() {
            if index.insert(module.id.clone(), i).is_some() {
                return Err(ModverError::graph(format!(
                    "Duplicate module id '{}'",
                    module.id
                )));
            }
        }

        let roots = modules
            .iter()
            .filter(|m| m.kind == ModuleKind::Root)
            .count();
        if roots != 1 {
            return Err(ModverError::graph(format!(
                "Expected exactly one root module, found {}",
                roots
            )));
        }

        let mut affects = Vec::with_capacity(modules.len());
        let mut unresolved = Vec::new();
        for module in &modules {
            let mut targets = Vec::with_capacity(module.affects.len());
            for target in &module.affects {
                match index.get(target) {
                    Some(&t) => targets.push(t),
                    None => unresolved.push(format!("{} -> {}", module.id, target)),
                }
            }
            affects.push(targets);
        }

        if !unresolved.is_empty() {
            return Err(ModverError::graph(format!(
                "Unresolved affects edges: {}",
                unresolved.join(", ")
            )));
        }

        Ok(ModuleGraph {
            modules,
            index,
            affects,
        })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, idx: usize) -> &Module {
        &self.modules[idx]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Indices of modules a change in `idx` propagates to
    pub fn affects(&self, idx: usize) -> &[usize] {
        &self.affects[idx]
    }
}
