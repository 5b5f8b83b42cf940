use thiserror::Error;

use crate::core::schema::SchemaName;

/// The page does not have the shape the schema builder expects.
///
/// Aborts schema production for that page only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("no element with class \"api-article\"")]
    MissingArticle,
    #[error("api-article container has no <h1> group heading")]
    MissingGroupHeading,
    #[error("#attributes heading is not followed by a <div>")]
    MissingAttributesDiv,
    #[error("attributes <div> contains no <table>")]
    MissingAttributesTable,
    #[error("row {row}: expected 4 cells, found {found}")]
    RowShape { row: usize, found: usize },
    #[error("row {row}: attribute cell has no <code> property name")]
    MissingPropertyName { row: usize },
}

/// Two pages produced the same schema name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema {name} from {second_url} is already defined by {first_url}")]
pub struct NameCollision {
    pub name: SchemaName,
    pub first_url: String,
    pub second_url: String,
}
