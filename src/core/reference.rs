//! Hyperlink targets to schema names.

use tracing::debug;

use crate::core::schema::SchemaRef;

/// Strip leading fragment markers from an anchor target.
///
/// `"#InvoiceLine"` and `"InvoiceLine"` both yield `"InvoiceLine"`.
pub fn dereference(target: &str) -> &str {
    target.trim_start_matches('#')
}

/// Reference pointer for the schema an anchor links to.
pub fn reference_for(target: &str) -> SchemaRef {
    debug!("Dereferencing {}", target);
    SchemaRef::to(dereference(target))
}
