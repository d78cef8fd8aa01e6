// src/catalog.rs
//! Richer per-name records for elements and attributes.
//!
//! Meant to grow into cross-linked docs (which attributes an element takes and
//! the reverse). The association lists are not filled yet: the pages do not
//! expose them in a form we read, so they stay empty. Only elements are
//! collected; [`AttributeInfo`] is the record shape attributes will use.

use crate::compose::mdn_reference;
use crate::config::consts::MISSING_DOCUMENTATION;
use crate::normalize::{split_aliases, tag_name};
use crate::record::SourceRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementInfo {
    /// As on the page, brackets included (`<a>`).
    pub name: String,
    pub description: String,
    pub deprecated: bool,
    /// Formatted reference sentence, or a placeholder.
    pub mdn_link: String,
    pub rust_name: String,
    pub possible_attributes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeInfo {
    pub name: String,
    pub description: String,
    pub deprecated: bool,
    pub mdn_link: String,
    pub rust_name: String,
    pub possible_elements: Vec<String>,
}

/// Insertion-ordered; a name seen twice keeps its first position and the
/// last record's data.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub elements: Vec<ElementInfo>,
    pub attributes: Vec<AttributeInfo>,
}

fn link_or_placeholder(link: Option<&str>) -> String {
    match link {
        Some(l) if !l.is_empty() => mdn_reference(l),
        _ => s!(MISSING_DOCUMENTATION),
    }
}

fn upsert(list: &mut Vec<ElementInfo>, item: ElementInfo) {
    match list.iter_mut().find(|existing| existing.name == item.name) {
        Some(slot) => *slot = item,
        None => list.push(item),
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_elements(&mut self, records: &[SourceRecord]) {
        for record in records {
            for alias in split_aliases(&record.raw_name) {
                let info = ElementInfo {
                    name: s!(alias),
                    description: record.description.clone(),
                    deprecated: record.deprecated,
                    mdn_link: link_or_placeholder(record.link.as_deref()),
                    rust_name: tag_name(alias),
                    possible_attributes: Vec::new(),
                };
                upsert(&mut self.elements, info);
            }
        }
    }

    pub fn element(&self, name: &str) -> Option<&ElementInfo> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Element names, one per line.
    pub fn render_element_names(&self) -> String {
        let mut out = s!();
        for e in &self.elements {
            out.push_str(&e.name);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(raw: &str, link: Option<&str>, deprecated: bool) -> SourceRecord {
        SourceRecord {
            raw_name: s!(raw),
            link: link.map(String::from),
            description: s!("Desc."),
            applicability: None,
            deprecated,
        }
    }

    #[test]
    fn aliases_become_separate_elements() {
        let mut catalog = Catalog::new();
        catalog.add_elements(&[
            element("<h1>, <h2>", Some("/en-US/docs/Web/HTML/Element/Heading_Elements"), false),
            element("<acronym>", None, true),
        ]);
        assert_eq!(catalog.render_element_names(), "<h1>\n<h2>\n<acronym>\n");

        let h2 = catalog.element("<h2>").unwrap();
        assert_eq!(h2.rust_name, "h2");
        assert_eq!(
            h2.mdn_link,
            "[MDN documentation.](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)"
        );
        assert!(h2.possible_attributes.is_empty());

        let acronym = catalog.element("<acronym>").unwrap();
        assert!(acronym.deprecated);
        assert_eq!(acronym.mdn_link, MISSING_DOCUMENTATION);
    }

    #[test]
    fn duplicate_names_keep_first_position() {
        let mut catalog = Catalog::new();
        catalog.add_elements(&[element("<a>", None, false), element("<b>", None, false), element("<a>", Some("/a"), false)]);
        assert_eq!(catalog.render_element_names(), "<a>\n<b>\n");
        assert_ne!(catalog.element("<a>").unwrap().mdn_link, MISSING_DOCUMENTATION);
        assert!(catalog.attributes.is_empty());
    }
}
