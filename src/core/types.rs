//! Type-expression resolution.
//!
//! A type cell holds a short `<code>` span such as `Integer`, `DateTime` or
//! `Array[<a href="#lines">Object</a>]`. Its text nodes form the token
//! sequence classified here. Resolution never fails: unexpected markup
//! degrades to a fallback or an unresolved type that the caller reports.

use crate::core::{
    reference::reference_for,
    schema::{PropertyType, SchemaRef},
};

const ARRAY_OPEN: &str = "Array[";
const ARRAY_CLOSE: &str = "]";

/// Known scalar type names and the (type, format) pair each maps to.
pub const SIMPLE_TYPES: &[(&str, PropertyType, Option<&str>)] = &[
    ("String", PropertyType::String, None),
    ("Integer", PropertyType::Integer, None),
    ("Boolean", PropertyType::Boolean, None),
    ("DateTime", PropertyType::String, Some("date-time")),
    ("Datetime", PropertyType::String, Some("date-time")),
    ("Date", PropertyType::String, Some("date")),
    ("Decimal", PropertyType::Number, Some("decimal")),
];

/// One text node of a type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeToken {
    pub text: String,
    /// `href` of the anchor enclosing this text, if any.
    pub href: Option<String>,
}

impl TypeToken {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: Some(href.into()),
        }
    }
}

/// Token sequence extracted from a type cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeExpr {
    pub tokens: Vec<TypeToken>,
}

impl TypeExpr {
    pub fn new(tokens: Vec<TypeToken>) -> Self {
        Self { tokens }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Outcome of resolving one type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeResolution {
    /// A known scalar from [`SIMPLE_TYPES`].
    Simple {
        kind: PropertyType,
        format: Option<String>,
    },
    /// `Array[<link>]`: array whose items reference another schema.
    ArrayOf { items: SchemaRef },
    /// Single token missing from [`SIMPLE_TYPES`]; emitted as a string whose
    /// format is the lower-cased token.
    UnknownToken { token: String },
    /// Expression shape not recognized at all.
    Unresolved,
}

impl TypeResolution {
    pub fn kind(&self) -> Option<PropertyType> {
        match self {
            TypeResolution::Simple { kind, .. } => Some(*kind),
            TypeResolution::ArrayOf { .. } => Some(PropertyType::Array),
            TypeResolution::UnknownToken { .. } => Some(PropertyType::String),
            TypeResolution::Unresolved => None,
        }
    }

    pub fn format(&self) -> Option<String> {
        match self {
            TypeResolution::Simple { format, .. } => format.clone(),
            TypeResolution::UnknownToken { token } => Some(token.to_lowercase()),
            TypeResolution::ArrayOf { .. } | TypeResolution::Unresolved => None,
        }
    }

    pub fn items(&self) -> Option<SchemaRef> {
        match self {
            TypeResolution::ArrayOf { items } => Some(items.clone()),
            _ => None,
        }
    }
}

/// Look up a scalar type name.
pub fn simple_type(token: &str) -> Option<(PropertyType, Option<&'static str>)> {
    SIMPLE_TYPES
        .iter()
        .find(|(name, _, _)| *name == token)
        .map(|(_, kind, format)| (*kind, *format))
}

/// Classify a type expression. First matching rule wins:
///
/// 1. `["Array[", <linked token>, "]"]` → array of the linked schema
/// 2. a single token → known scalar, or string with the token as format
/// 3. anything else → unresolved
pub fn resolve_type(expr: &TypeExpr) -> TypeResolution {
    if let [open, inner, close] = expr.tokens.as_slice()
        && open.text == ARRAY_OPEN
        && close.text == ARRAY_CLOSE
        && let Some(href) = &inner.href
    {
        return TypeResolution::ArrayOf {
            items: reference_for(href),
        };
    }

    if let [token] = expr.tokens.as_slice() {
        return match simple_type(&token.text) {
            Some((kind, format)) => TypeResolution::Simple {
                kind,
                format: format.map(str::to_string),
            },
            None => TypeResolution::UnknownToken {
                token: token.text.clone(),
            },
        };
    }

    TypeResolution::Unresolved
}
