// src/core/html.rs
//! Generic HTML table reader.
//!
//! Turns every top-level `<table>` in a document into rows of [`Cell`]s, in
//! document order. Header rows (no `<td>`) are skipped. A table nested inside
//! a cell is not a table of its own; it only contributes to that cell's text.
//! Knows nothing about MDN.
//!
//! Cell text flattens inline markup (`<a>`, `<code>`, `<em>`, `<abbr>`, ...). Block-ish
//! children (`<p>`, `<li>`, `<br>`, status-icon `<abbr>`, ...) start a new
//! segment; segments are whitespace-normalized and joined with
//! [`PARAGRAPH_SEP`], which is how paragraph breaks survive into the
//! description column.

use std::sync::LazyLock;

use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector};

use super::sanitize::normalize_ws;
use crate::config::consts::PARAGRAPH_SEP;

static SEL_TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static SEL_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// `href` of the first anchor in the cell, verbatim.
    pub link: Option<String>,
}

impl Cell {
    pub fn new(text: &str, link: Option<&str>) -> Self {
        Self { text: s!(text), link: link.map(String::from) }
    }
}

pub type Row = Vec<Cell>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

pub fn parse_tables(doc: &str) -> Vec<Table> {
    let document = Html::parse_document(doc);
    document
        .select(&SEL_TABLE)
        .filter(|table| !is_nested(*table))
        .map(|table| Table { rows: read_rows(table) })
        .collect()
}

fn is_nested(table: ElementRef) -> bool {
    table
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == "table")
}

fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// The table's own `<tr>`s: direct children or inside its `thead`/`tbody`/`tfoot`.
fn own_rows(table: ElementRef) -> Vec<ElementRef> {
    let mut rows = Vec::new();
    for child in child_elements(table) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => {
                rows.extend(child_elements(child).filter(|r| r.value().name() == "tr"));
            }
            _ => {}
        }
    }
    rows
}

fn read_rows(table: ElementRef) -> Vec<Row> {
    let mut rows = Vec::new();
    for tr in own_rows(table) {
        let cells: Vec<ElementRef> = child_elements(tr)
            .filter(|c| matches!(c.value().name(), "td" | "th"))
            .collect();

        if !cells.iter().any(|c| c.value().name() == "td") {
            continue;
        }
        rows.push(cells.into_iter().map(read_cell).collect());
    }
    rows
}

fn read_cell(cell: ElementRef) -> Cell {
    let link = cell
        .select(&SEL_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(String::from);
    Cell { text: cell_text(cell), link }
}

/// Visible text of an element, block children separated by [`PARAGRAPH_SEP`].
pub fn cell_text(el: ElementRef) -> String {
    let mut segments = Vec::new();
    let mut current = s!();
    collect_segments(el, &mut segments, &mut current);
    flush(&mut segments, &mut current);
    segments.join(PARAGRAPH_SEP)
}

fn collect_segments(el: ElementRef, segments: &mut Vec<String>, current: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => current.push_str(text),
            Node::Element(e) => {
                let Some(child_el) = ElementRef::wrap(child) else { continue };
                if is_block(e) {
                    flush(segments, current);
                    collect_segments(child_el, segments, current);
                    flush(segments, current);
                } else {
                    collect_segments(child_el, segments, current);
                }
            }
            _ => {}
        }
    }
}

fn flush(segments: &mut Vec<String>, current: &mut String) {
    let seg = normalize_ws(current);
    if !seg.is_empty() {
        segments.push(seg);
    }
    current.clear();
}

/// Status icons are `<abbr class="icon …">`; any other `<abbr>` is inline text.
fn is_block(e: &Element) -> bool {
    match e.name() {
        "abbr" => e.classes().any(|c| c.eq_ignore_ascii_case("icon")),
        tag => matches!(
            tag,
            "p" | "div" | "br" | "ul" | "ol" | "li" | "dl" | "dt" | "dd" | "section" | "blockquote" | "table"
        ),
    }
}
