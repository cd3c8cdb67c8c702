//! Pure formatting functions for terminal output.
//!
//! Functions here have no side effects beyond printing and take already
//! computed data, so the calculation core never needs a terminal.

use crate::domain::ModuleVersionChange;
use crate::graph::ModuleGraph;
use crate::warnings::CalcWarning;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a non-fatal calculation warning.
pub fn display_warning(warning: &CalcWarning) {
    eprintln!("{} {}", style("⚠").yellow().bold(), warning);
}

/// Display the computed version changes, one line per module.
///
/// Shows `id: from -> to (severity, reason)` with the destination version
/// highlighted. An empty list prints a short notice instead.
pub fn display_changes(changes: &[ModuleVersionChange]) {
    if changes.is_empty() {
        println!("{}", style("No modules require a version change.").dim());
        return;
    }

    println!("\n{}", style("Module version changes:").bold());

    let id_width = changes
        .iter()
        .map(|c| c.module_id.len())
        .max()
        .unwrap_or(0);

    for change in changes {
        println!(
            "  {:<width$}  {} -> {}  ({}, {})",
            change.module_id,
            style(&change.from_version).red(),
            style(&change.to_version).green(),
            change.severity,
            change.reason,
            width = id_width
        );
    }
}

/// Display the modules of the manifest graph (for --list).
pub fn display_modules(graph: &ModuleGraph) {
    println!("{}", style("Configured modules:").bold());
    for module in graph.modules() {
        let affects = if module.affects.is_empty() {
            String::new()
        } else {
            format!("  affects: {}", module.affects.join(", "))
        };
        println!(
            "  {}  path={}  version={}{}",
            style(&module.id).cyan(),
            module.path,
            module.version,
            affects
        );
    }
}
