// src/record.rs

/// Where an attribute may be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applicability {
    /// Any HTML element.
    Global,
    /// Element list exactly as the page spells it, e.g. `<form>, <input>`.
    Elements(String),
}

impl Applicability {
    pub fn from_cell(text: &str) -> Self {
        if text == crate::config::consts::GLOBAL_ATTRIBUTE {
            Applicability::Global
        } else {
            Applicability::Elements(s!(text))
        }
    }
}

/// One row of a reference table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRecord {
    pub raw_name: String,
    pub link: Option<String>,
    pub description: String,
    /// `None` for element rows.
    pub applicability: Option<Applicability>,
    pub deprecated: bool,
}

/// What one emitted macro line is made of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalEntry {
    pub identifier: String,
    pub literal: String,
    pub doc_lines: Vec<String>,
}
