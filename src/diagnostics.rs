//! Diagnostic types produced while scraping documentation.
//!
//! Each diagnostic is self-contained with everything the reporter needs to
//! display it. Components never log diagnostics themselves; they emit them
//! into a [`DiagnosticSink`] handed in by the caller.

use enum_dispatch::enum_dispatch;

use crate::core::StructureError;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each diagnostic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnknownType,
    UnresolvedType,
    Structure,
    FetchError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnknownType => write!(f, "unknown-type"),
            Rule::UnresolvedType => write!(f, "unresolved-type"),
            Rule::Structure => write!(f, "structure"),
            Rule::FetchError => write!(f, "fetch-error"),
        }
    }
}

// ============================================================
// Contexts
// ============================================================

/// Where in a page an attribute row lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowContext {
    pub page_url: String,
    /// 1-based position among the table's body rows.
    pub row: usize,
    pub property: String,
}

impl RowContext {
    pub fn new(page_url: impl Into<String>, row: usize, property: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            row,
            property: property.into(),
        }
    }
}

// ============================================================
// Diagnostic Types
// ============================================================

/// Single type token missing from the scalar table. The property was emitted
/// as a string with the lower-cased token as its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTypeDiagnostic {
    pub context: RowContext,
    pub token: String,
}

impl UnknownTypeDiagnostic {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownType
    }
}

/// Type expression with an unrecognized shape. The property was emitted with
/// a `null` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedTypeDiagnostic {
    pub context: RowContext,
    /// Text tokens of the expression, in order.
    pub tokens: Vec<String>,
}

impl UnresolvedTypeDiagnostic {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnresolvedType
    }
}

/// Page skipped because its markup did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureDiagnostic {
    pub page_url: String,
    pub error: StructureError,
}

impl StructureDiagnostic {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Structure
    }
}

/// Page skipped because it could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchDiagnostic {
    pub url: String,
    pub error: String,
}

impl FetchDiagnostic {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::FetchError
    }
}

// ============================================================
// Diagnostic Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownType(UnknownTypeDiagnostic),
    UnresolvedType(UnresolvedTypeDiagnostic),
    Structure(StructureDiagnostic),
    Fetch(FetchDiagnostic),
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnknownType(_) => UnknownTypeDiagnostic::severity(),
            Diagnostic::UnresolvedType(_) => UnresolvedTypeDiagnostic::severity(),
            Diagnostic::Structure(_) => StructureDiagnostic::severity(),
            Diagnostic::Fetch(_) => FetchDiagnostic::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Diagnostic::UnknownType(_) => UnknownTypeDiagnostic::rule(),
            Diagnostic::UnresolvedType(_) => UnresolvedTypeDiagnostic::rule(),
            Diagnostic::Structure(_) => StructureDiagnostic::rule(),
            Diagnostic::Fetch(_) => FetchDiagnostic::rule(),
        }
    }
}

// ============================================================
// Sink
// ============================================================

/// Receiver for diagnostics raised while parsing.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A row inside a page's attributes table.
    Row(&'a RowContext),
    /// Whole page, no row context.
    Page { url: &'a str },
}

impl ReportLocation<'_> {
    pub fn url(&self) -> &str {
        match self {
            ReportLocation::Row(ctx) => &ctx.page_url,
            ReportLocation::Page { url } => url,
        }
    }

    /// Row number, 0 for page-level locations.
    pub fn row(&self) -> usize {
        match self {
            ReportLocation::Row(ctx) => ctx.row,
            ReportLocation::Page { .. } => 0,
        }
    }
}

/// Implemented by all diagnostic types so the reporter can treat them
/// uniformly. Uses `enum_dispatch` for dispatch on the `Diagnostic` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Optional hint for the "= hint:" line.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for UnknownTypeDiagnostic {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Row(&self.context)
    }

    fn message(&self) -> String {
        self.token.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "property `{}` emitted as string with format \"{}\"",
            self.context.property,
            self.token.to_lowercase()
        ))
    }
}

impl Report for UnresolvedTypeDiagnostic {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Row(&self.context)
    }

    fn message(&self) -> String {
        self.tokens.concat()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "property `{}` emitted with a null type (tokens: {:?})",
            self.context.property, self.tokens
        ))
    }
}

impl Report for StructureDiagnostic {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Page {
            url: &self.page_url,
        }
    }

    fn message(&self) -> String {
        self.error.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("page skipped; no schema was produced for it")
    }
}

impl Report for FetchDiagnostic {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Page { url: &self.url }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
