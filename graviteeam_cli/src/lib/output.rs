//! Printing state and diagnostics.
//!
//! State goes to stdout as JSON so it can be piped; diagnostics go to
//! stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use graviteeam_core::{diagnostics::Severity, Diagnostic, Diagnostics};

/// Pretty-print a value as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let label = match diagnostic.severity {
        Severity::Error => "Error:".red().bold(),
        Severity::Warning => "Warning:".yellow().bold(),
    };
    let mut out = format!("{label} {}", diagnostic.summary.bold());
    if let Some(attribute) = &diagnostic.attribute {
        out.push_str(&format!("\n  with {attribute}"));
    }
    if !diagnostic.detail.is_empty() {
        out.push_str(&format!("\n\n{}", diagnostic.detail));
    }
    out
}

pub(crate) fn print_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        eprintln!("{}\n", format_diagnostic(diagnostic));
    }
}
