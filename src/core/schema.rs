//! Schema data model emitted into `components.schemas`.
//!
//! - `PropertySchema`: one attribute's inferred shape
//! - `ObjectSchema`: one documented object (properties + required names)
//! - `SchemaName`: registry key derived from a page's group heading
//! - `SchemaRef`: `$ref` pointer to another component schema

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::utils::camel_case;

/// Suffix appended to every schema derived from an attributes table.
pub const ATTRIBUTES_SUFFIX: &str = ".Attributes";

/// Prefix of every component reference pointer.
pub const COMPONENTS_SCHEMAS_PREFIX: &str = "#/components/schemas/";

/// Primitive types a property can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Boolean,
    Number,
    Array,
}

/// `{"$ref": "#/components/schemas/<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref")]
    pub target: String,
}

impl SchemaRef {
    /// Pointer to the component schema called `name`.
    ///
    /// The target is not checked against the registry; forward references
    /// to schemas that are never produced are allowed.
    pub fn to(name: &str) -> Self {
        Self {
            target: format!("{}{}", COMPONENTS_SCHEMAS_PREFIX, name),
        }
    }
}

/// Inferred schema of one attribute row.
///
/// `kind` is always serialized; `null` marks a type expression that could
/// not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: Option<PropertyType>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Properties of an object in document row order.
///
/// Inserting a name that is already present replaces the earlier schema but
/// keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, PropertySchema)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, schema: PropertySchema) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = schema,
            None => self.entries.push((name, schema)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertySchema> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, schema)| schema)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.entries
            .iter()
            .map(|(name, schema)| (name.as_str(), schema))
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, schema) in self.iter() {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

/// Schema of one documented object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    kind: &'static str,
    pub properties: Properties,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// Every name in `required` must be a key of `properties`.
    pub fn new(properties: Properties, required: Vec<String>) -> Self {
        debug_assert!(required.iter().all(|name| properties.contains(name)));
        Self {
            kind: "object",
            properties,
            required,
        }
    }
}

/// Registry key of an object schema, e.g. `"InvoicePayment.Attributes"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SchemaName(String);

impl SchemaName {
    /// Derive the name from a page's group heading.
    ///
    /// ```
    /// use scrapi::core::SchemaName;
    ///
    /// assert_eq!(SchemaName::from_group("Invoice payments").as_str(), "InvoicePayments.Attributes");
    /// ```
    pub fn from_group(group: &str) -> Self {
        Self(format!("{}{}", camel_case(group), ATTRIBUTES_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
