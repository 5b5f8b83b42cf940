//! Named accessors over the expected documentation markup.
//!
//! An object page looks like this:
//!
//! ```text
//! <section>
//!   <h1>Invoices</h1>                        group heading
//!   <div class="api-article">                article container
//!     <h2 id="attributes">Attributes</h2>
//!     <div><table>...</table></div>          attributes table
//!     <div>...notes...</div>
//!     <h3>Line</h3>                           sub-object sections
//!     <h2>Invoices Index</h2>                 request sections
//!   </div>
//! </section>
//! ```
//!
//! Every step that the page schema cannot do without returns a
//! [`StructureError`] instead of descending into a missing node.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::{core::StructureError, utils::normalize_ws};

static ARTICLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector(".api-article"));
static ATTRIBUTES_HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("#attributes"));
static GROUP_HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static BODY_ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("tbody > tr"));
static CODE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("code"));
static DIV_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("div"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// The located parts of one object page.
pub struct ArticleLayout<'a> {
    /// Whitespace-collapsed text of the group heading.
    pub group: String,
    /// `None` when the page documents no attributes.
    pub attributes: Option<AttributesSection<'a>>,
}

impl<'a> ArticleLayout<'a> {
    pub fn locate(document: &'a Html) -> Result<Self, StructureError> {
        let container = document
            .select(&ARTICLE_SELECTOR)
            .next()
            .ok_or(StructureError::MissingArticle)?;
        let group = group_heading(container)?;
        let attributes = AttributesSection::locate(container)?;

        Ok(Self { group, attributes })
    }
}

/// The table that follows the `#attributes` heading, and its wrapping `<div>`.
pub struct AttributesSection<'a> {
    div: ElementRef<'a>,
    table: ElementRef<'a>,
}

impl<'a> AttributesSection<'a> {
    fn locate(container: ElementRef<'a>) -> Result<Option<Self>, StructureError> {
        let Some(heading) = container.select(&ATTRIBUTES_HEADING_SELECTOR).next() else {
            return Ok(None);
        };
        let div = next_sibling_element(heading, "div").ok_or(StructureError::MissingAttributesDiv)?;
        let table = div
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or(StructureError::MissingAttributesTable)?;

        Ok(Some(Self { div, table }))
    }

    /// Body rows of the attributes table in document order.
    pub fn rows(&self) -> Vec<ElementRef<'a>> {
        table_rows(self.table)
    }

    /// Headings of the sections following the attributes table.
    ///
    /// Empty when the notes `<div>` after the table is absent.
    pub fn outline(&self) -> Outline {
        let Some(notes) = next_sibling_element(self.div, "div") else {
            return Outline::default();
        };

        let subobject = next_sibling_element(notes, "h3").map(text_of);
        let requests = following_siblings(notes)
            .filter(|el| el.value().name() == "h2")
            .map(text_of)
            .collect();

        Outline {
            subobject,
            requests,
        }
    }
}

/// Section headings found after the attributes table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    /// First sub-object (`<h3>`) heading.
    pub subobject: Option<String>,
    /// Request (`<h2>`) headings.
    pub requests: Vec<String>,
}

/// The group heading is the first `<h1>` within the container's parent.
fn group_heading(container: ElementRef<'_>) -> Result<String, StructureError> {
    let parent = container
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or(StructureError::MissingGroupHeading)?;
    parent
        .select(&GROUP_HEADING_SELECTOR)
        .next()
        .map(text_of)
        .ok_or(StructureError::MissingGroupHeading)
}

/// Body rows (`tbody > tr`) of a table.
fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table.select(&BODY_ROW_SELECTOR).collect()
}

/// Element children, skipping text and comment nodes.
pub fn element_children(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// Sibling elements after `element`, in document order.
pub fn following_siblings<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.next_siblings().filter_map(ElementRef::wrap)
}

/// First following sibling element with tag `tag`.
pub fn next_sibling_element<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    following_siblings(element).find(|el| el.value().name() == tag)
}

/// First `<code>` descendant.
pub fn code_span(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.select(&CODE_SELECTOR).next()
}

/// First `<div>` descendant.
pub fn marker_div(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.select(&DIV_SELECTOR).next()
}

/// Whitespace-collapsed text content.
pub fn text_of(element: ElementRef<'_>) -> String {
    normalize_ws(&element.text().collect::<String>())
}
