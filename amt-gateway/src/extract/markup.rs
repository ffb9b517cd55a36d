//! Tag-query capability over parsed HTML.
//!
//! The extractors only ever need two operations: find descendant elements by
//! tag name, and read an element's text. [`Markup`] captures exactly that, so
//! extraction logic can run against `scraper` documents in production and
//! against hand-built trees in tests.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// The HTML tags the upstream pages are queried by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<font>`, used upstream to style the stop name block
    Font,
    /// `<b>`, used for line headers and direction labels
    Bold,
    Table,
    /// `<tr>`
    Row,
    /// `<td>`
    Cell,
}

static FONT: LazyLock<Selector> = LazyLock::new(|| tag_selector(Tag::Font));
static BOLD: LazyLock<Selector> = LazyLock::new(|| tag_selector(Tag::Bold));
static TABLE: LazyLock<Selector> = LazyLock::new(|| tag_selector(Tag::Table));
static ROW: LazyLock<Selector> = LazyLock::new(|| tag_selector(Tag::Row));
static CELL: LazyLock<Selector> = LazyLock::new(|| tag_selector(Tag::Cell));

fn tag_selector(tag: Tag) -> Selector {
    Selector::parse(tag.name()).expect("bare tag names are valid CSS selectors")
}

impl Tag {
    /// Returns the lowercase HTML tag name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Font => "font",
            Tag::Bold => "b",
            Tag::Table => "table",
            Tag::Row => "tr",
            Tag::Cell => "td",
        }
    }

    fn selector(self) -> &'static Selector {
        match self {
            Tag::Font => &FONT,
            Tag::Bold => &BOLD,
            Tag::Table => &TABLE,
            Tag::Row => &ROW,
            Tag::Cell => &CELL,
        }
    }
}

/// An element in a queryable markup tree.
pub trait Markup: Sized {
    /// All descendant elements with the given tag, in document order.
    ///
    /// The element itself is never included.
    fn find_all(&self, tag: Tag) -> Vec<Self>;

    /// Concatenated text of the element's subtree, with surrounding
    /// whitespace trimmed.
    ///
    /// Text inside nested elements counts: `<font> <b>VIA</b> ROMA </font>`
    /// reads as `"VIA ROMA"`. Every prefix or emptiness check the extractors
    /// make runs on this trimmed value.
    fn text_content(&self) -> String;
}

impl Markup for ElementRef<'_> {
    fn find_all(&self, tag: Tag) -> Vec<Self> {
        self.select(tag.selector()).collect()
    }

    fn text_content(&self) -> String {
        let text: String = self.text().collect();
        text.trim().to_string()
    }
}

/// A parsed upstream page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a response body as an HTML document.
    ///
    /// Parsing never fails: malformed markup is repaired the way a browser
    /// would, and an empty body yields an empty `<html>` tree.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// The document's `<html>` element, the scope for every query.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}
