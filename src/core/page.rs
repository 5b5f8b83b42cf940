//! Page schema building.
//!
//! Turns one parsed documentation page into at most one named object schema.

use scraper::Html;
use tracing::debug;

use crate::{
    core::{
        StructureError,
        layout::{ArticleLayout, Outline},
        schema::{ObjectSchema, SchemaName},
        table::parse_attributes_table,
    },
    diagnostics::DiagnosticSink,
};

/// Schema derived from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSchema {
    pub name: SchemaName,
    /// Group heading the name was derived from.
    pub group: String,
    pub schema: ObjectSchema,
    pub outline: Outline,
}

/// Build the schema for one page.
///
/// Returns `Ok(None)` if the page has no attributes section, which is normal
/// for pages that only document actions.
pub fn build_page_schema(
    document: &Html,
    page_url: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<PageSchema>, StructureError> {
    let layout = ArticleLayout::locate(document)?;
    let Some(section) = layout.attributes else {
        debug!("No attributes section in {} ({})", page_url, layout.group);
        return Ok(None);
    };

    let schema = parse_attributes_table(&section, page_url, sink)?;
    let outline = section.outline();
    debug!(
        "Found subobjects to parse {:?} and requests {:?} in {}",
        outline.subobject, outline.requests, page_url
    );

    Ok(Some(PageSchema {
        name: SchemaName::from_group(&layout.group),
        group: layout.group,
        schema,
        outline,
    }))
}

/// Parse raw page bytes and build its schema.
pub fn build_page_schema_from_bytes(
    bytes: &[u8],
    page_url: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<PageSchema>, StructureError> {
    let document = Html::parse_document(&String::from_utf8_lossy(bytes));
    build_page_schema(&document, page_url, sink)
}
