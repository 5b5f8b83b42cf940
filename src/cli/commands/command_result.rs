use std::path::PathBuf;

use crate::diagnostics::{Diagnostic, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Generate,
    Page,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Page(PageSummary),
    Init(InitSummary),
}

/// Where the generated document went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub output: OutputTarget,
    /// Pages linked from the index.
    pub page_count: usize,
    pub schema_count: usize,
    /// Pages parsed fine but without an attributes section.
    pub without_attributes_count: usize,
}

#[derive(Debug)]
pub struct PageSummary {
    pub url: String,
    /// Pretty-printed `name -> schema` map, empty object if the page has none.
    pub rendered: String,
    pub subobject: Option<String>,
    pub requests: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running scrapi commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All diagnostics raised while running, in page discovery order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CommandResult {
    pub fn new(kind: CommandKind, summary: CommandSummary, diagnostics: Vec<Diagnostic>) -> Self {
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count();
        let warning_count = diagnostics.len() - error_count;
        Self {
            kind,
            summary,
            error_count,
            warning_count,
            diagnostics,
        }
    }
}
