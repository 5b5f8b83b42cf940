//! Attributes table to object schema.

use crate::{
    core::{
        StructureError,
        layout::AttributesSection,
        row::parse_row,
        schema::{ObjectSchema, Properties},
    },
    diagnostics::DiagnosticSink,
};

/// Parse every body row of an attributes section into an object schema.
///
/// The first malformed row aborts the whole table: a row that does not fit
/// the four-cell layout means the page does not have the expected shape.
pub fn parse_attributes_table(
    section: &AttributesSection<'_>,
    page_url: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<ObjectSchema, StructureError> {
    let mut properties = Properties::new();
    let mut required = Vec::new();

    for (index, tr) in section.rows().into_iter().enumerate() {
        let row = parse_row(tr, index + 1, page_url, sink)?;
        if row.is_required() && !required.contains(&row.name) {
            required.push(row.name.clone());
        }
        properties.insert(row.name, row.schema);
    }

    Ok(ObjectSchema::new(properties, required))
}
