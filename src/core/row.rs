//! Attribute row parsing.
//!
//! A row has four cells: visibility marker, attribute name, type expression
//! and description. The row parser extracts each and delegates the type cell
//! to [`resolve_type`].

use scraper::ElementRef;

use crate::{
    core::{
        StructureError,
        layout::{code_span, element_children, marker_div, text_of},
        schema::PropertySchema,
        types::{TypeExpr, TypeResolution, TypeToken, resolve_type},
    },
    diagnostics::{
        Diagnostic, DiagnosticSink, RowContext, UnknownTypeDiagnostic, UnresolvedTypeDiagnostic,
    },
};

pub const READ_ONLY_TITLE: &str = "Read-only attribute";
pub const REQUIRED_TITLE: &str = "Required attribute";

/// Visibility marker of an attribute row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    ReadOnly,
    Required,
    /// No marker, or a marker title that is not recognized.
    Unmarked,
}

impl Visibility {
    pub fn from_title(title: Option<&str>) -> Self {
        match title {
            Some(READ_ONLY_TITLE) => Visibility::ReadOnly,
            Some(REQUIRED_TITLE) => Visibility::Required,
            _ => Visibility::Unmarked,
        }
    }
}

/// One parsed attribute row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub name: String,
    pub schema: PropertySchema,
    pub visibility: Visibility,
}

impl AttributeRow {
    pub fn is_required(&self) -> bool {
        self.visibility == Visibility::Required
    }
}

/// Parse one `<tr>` of an attributes table.
///
/// `row` is the 1-based position of the row, used in errors and diagnostics.
pub fn parse_row(
    tr: ElementRef<'_>,
    row: usize,
    page_url: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<AttributeRow, StructureError> {
    let cells = element_children(tr);
    let [vis_td, attribute_td, type_td, desc_td] = cells.as_slice() else {
        return Err(StructureError::RowShape {
            row,
            found: cells.len(),
        });
    };

    let name = code_span(*attribute_td)
        .map(text_of)
        .filter(|name| !name.is_empty())
        .ok_or(StructureError::MissingPropertyName { row })?;

    let visibility = Visibility::from_title(marker_div(*vis_td).and_then(|div| div.value().attr("title")));

    let expr = type_expr(*type_td);
    let resolution = resolve_type(&expr);
    report_resolution(&resolution, &expr, RowContext::new(page_url, row, &name), sink);

    let schema = PropertySchema {
        kind: resolution.kind(),
        description: text_of(*desc_td),
        items: resolution.items(),
        format: resolution.format(),
    };

    Ok(AttributeRow {
        name,
        schema,
        visibility,
    })
}

/// Text tokens of the type cell's `<code>` span.
///
/// Each non-blank text node is one token; tokens inside an `<a>` carry its
/// `href`. A cell without `<code>` yields no tokens.
pub fn type_expr(type_td: ElementRef<'_>) -> TypeExpr {
    let Some(code) = code_span(type_td) else {
        return TypeExpr::default();
    };

    let tokens = code
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?.trim();
            if text.is_empty() {
                return None;
            }
            let href = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != code.id())
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "a")
                .and_then(|a| a.value().attr("href"));
            Some(TypeToken {
                text: text.to_string(),
                href: href.map(str::to_string),
            })
        })
        .collect();

    TypeExpr::new(tokens)
}

fn report_resolution(
    resolution: &TypeResolution,
    expr: &TypeExpr,
    context: RowContext,
    sink: &mut dyn DiagnosticSink,
) {
    match resolution {
        TypeResolution::UnknownToken { token } => {
            sink.emit(Diagnostic::UnknownType(UnknownTypeDiagnostic {
                context,
                token: token.clone(),
            }));
        }
        TypeResolution::Unresolved => {
            sink.emit(Diagnostic::UnresolvedType(UnresolvedTypeDiagnostic {
                context,
                tokens: expr.texts().into_iter().map(str::to_string).collect(),
            }));
        }
        TypeResolution::Simple { .. } | TypeResolution::ArrayOf { .. } => {}
    }
}
