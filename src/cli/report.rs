//! Report formatting and printing utilities.
//!
//! This module displays diagnostics in cargo-style format on stderr, keeping
//! stdout free for the generated document. Separate from core logic to allow
//! scrapi to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, OutputTarget, PageSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::diagnostics::{Diagnostic, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print diagnostics in cargo-style format to `writer`.
pub fn report_to<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    if diagnostics.is_empty() {
        return;
    }

    let mut sorted = diagnostics.to_vec();
    sorted.sort_by(compare_diagnostics);

    for diagnostic in &sorted {
        print_diagnostic(diagnostic, writer);
    }

    print_summary(&sorted, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let severity_str = match diagnostic.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        diagnostic.message(),
        diagnostic.report_rule().to_string().dimmed().cyan()
    );

    let location = match diagnostic.location() {
        ReportLocation::Row(ctx) => format!("{} row {} ({})", ctx.page_url, ctx.row, ctx.property),
        ReportLocation::Page { url } => url.to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = diagnostic.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = diagnostic.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between diagnostics
}

fn print_summary<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    let total_errors = diagnostics
        .iter()
        .filter(|d| d.report_severity() == Severity::Error)
        .count();
    let total_warnings = diagnostics.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        diagnostics.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

/// Page URL first, then row, so one page's diagnostics stay together.
fn compare_diagnostics(a: &Diagnostic, b: &Diagnostic) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();

    a_loc
        .url()
        .cmp(b_loc.url())
        .then_with(|| a_loc.row().cmp(&b_loc.row()))
}

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command result, with `out` receiving only command payload.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, out: &mut O, err: &mut E) {
    report_to(&result.diagnostics, err);

    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, result, err),
        CommandSummary::Page(summary) => print_page(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, err),
    }
}

fn print_generate<W: Write>(summary: &GenerateSummary, result: &CommandResult, writer: &mut W) {
    let target = match &summary.output {
        OutputTarget::File(path) => path.display().to_string(),
        OutputTarget::Stdout => "stdout".to_string(),
    };
    let msg = format!(
        "Wrote {} {} from {} {} to {}",
        summary.schema_count,
        if summary.schema_count == 1 { "schema" } else { "schemas" },
        summary.page_count,
        if summary.page_count == 1 { "page" } else { "pages" },
        target
    );

    if result.diagnostics.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} - no issues found", msg).green()
        );
    } else {
        let _ = writeln!(writer, "{}", msg);
    }

    if summary.without_attributes_count > 0 {
        let _ = writeln!(
            writer,
            "  - {} page(s) without attributes",
            summary.without_attributes_count
        );
    }
}

fn print_page<O: Write, E: Write>(summary: &PageSummary, out: &mut O, err: &mut E) {
    let _ = writeln!(out, "{}", summary.rendered);

    if let Some(subobject) = &summary.subobject {
        let _ = writeln!(err, "  {} {} {}", "=".blue(), "sub-object:".bold(), subobject);
    }
    if !summary.requests.is_empty() {
        let _ = writeln!(
            err,
            "  {} {} {}",
            "=".blue(),
            "requests:".bold(),
            summary.requests.join(", ")
        );
    }
    let _ = writeln!(err, "{} {}", "Parsed".green().bold(), summary.url);
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
