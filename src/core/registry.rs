//! Registry aggregation.
//!
//! Merges per-page schemas into one name-keyed map that ends up as the
//! document's `components.schemas`.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::core::{
    NameCollision,
    page::PageSchema,
    schema::{ObjectSchema, SchemaName},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    schema: ObjectSchema,
    source_url: String,
}

/// All schemas of a run keyed by name. Serializes as the bare name → schema
/// map, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<SchemaName, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema, rejecting a name that is already taken.
    ///
    /// The registry is left unchanged on collision.
    pub fn insert(
        &mut self,
        name: SchemaName,
        schema: ObjectSchema,
        source_url: impl Into<String>,
    ) -> Result<(), NameCollision> {
        let source_url = source_url.into();
        if let Some(existing) = self.entries.get(&name) {
            return Err(NameCollision {
                name,
                first_url: existing.source_url.clone(),
                second_url: source_url,
            });
        }
        self.entries.insert(name, Entry { schema, source_url });
        Ok(())
    }

    pub fn merge(&mut self, page: PageSchema, source_url: &str) -> Result<(), NameCollision> {
        self.insert(page.name, page.schema, source_url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SchemaName, &ObjectSchema)> {
        self.entries.iter().map(|(name, entry)| (name, &entry.schema))
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
