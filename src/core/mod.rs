//! Documentation-to-schema inference engine.
//!
//! ## Module Structure
//!
//! - `types`: type expression classification
//! - `reference`: hyperlink target normalization
//! - `row`: one attribute row into one property schema
//! - `table`: one attributes table into one object schema
//! - `page`: one page into one named schema
//! - `registry`: per-page schemas merged by name
//! - `layout`: named accessors over the expected page markup
//! - `schema`: serializable schema types
//! - `error`: structural and collision errors
//!
//! The engine is synchronous and never logs diagnostics itself; callers pass
//! a [`crate::diagnostics::DiagnosticSink`].

mod error;
pub mod layout;
pub mod page;
pub mod reference;
pub mod registry;
pub mod row;
pub mod schema;
pub mod table;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{NameCollision, StructureError};
pub use page::{PageSchema, build_page_schema, build_page_schema_from_bytes};
pub use registry::Registry;
pub use schema::{ObjectSchema, PropertySchema, PropertyType, SchemaName, SchemaRef};
pub use types::{TypeExpr, TypeResolution, TypeToken, resolve_type};
