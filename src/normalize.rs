// src/normalize.rs
//! Raw table names → code identifiers.
//!
//! Name cells carry more than the name: status words trail it after a
//! paragraph break (`align  Deprecated`), and the elements page packs several
//! tags into one cell (`<h1>, <h2>, …`). Identifiers come from the
//! [`RenameTable`] when it has an entry, otherwise from capitalizing the first
//! character.

use crate::compose;
use crate::config::consts::{ALIAS_SEP, QUALIFIER_SEP, WILDCARD_DATA_ATTRIBUTE};
use crate::config::{QualifierCasing, RenameTable};
use crate::core::sanitize::{capitalize_first, collapse_double_spaces};
use crate::record::{CanonicalEntry, SourceRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameParts {
    pub name: String,
    pub qualifiers: Vec<String>,
}

impl NameParts {
    /// `"Deprecated, experimental."`, or `None` without qualifiers.
    pub fn qualifiers_sentence(&self) -> Option<String> {
        if self.qualifiers.is_empty() {
            return None;
        }
        Some(join!(&self.qualifiers.join(QUALIFIER_SEP), "."))
    }
}

pub fn split_name(raw: &str, casing: QualifierCasing) -> NameParts {
    let collapsed = collapse_double_spaces(raw);
    let mut tokens = collapsed.split(' ').filter(|t| !t.is_empty());

    let name = tokens.next().map(String::from).unwrap_or_default();
    let qualifiers = tokens
        .enumerate()
        .map(|(i, word)| match (i, casing) {
            (0, QualifierCasing::AsSource) => s!(word),
            _ => word.to_lowercase(),
        })
        .collect();

    NameParts { name, qualifiers }
}

/// `data-*` names a family of attributes, not one we can emit.
pub fn is_wildcard(name: &str) -> bool {
    name == WILDCARD_DATA_ATTRIBUTE
}

pub fn derive_identifier(name: &str, renames: &RenameTable) -> String {
    match renames.get(name) {
        Some(ident) => s!(ident),
        None => capitalize_first(name),
    }
}

/// `<h1>` → `h1`.
pub fn tag_name(raw: &str) -> String {
    raw.replace(['<', '>'], "")
}

pub fn split_aliases(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(ALIAS_SEP).map(str::trim).filter(|s| !s.is_empty())
}

/// Turns source records into entries with a fixed rename table and casing.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer<'a> {
    renames: &'a RenameTable,
    casing: QualifierCasing,
}

impl<'a> Normalizer<'a> {
    pub fn new(renames: &'a RenameTable, casing: QualifierCasing) -> Self {
        Self { renames, casing }
    }

    /// `None` for the `data-*` wildcard row.
    pub fn attribute(&self, record: &SourceRecord) -> Option<CanonicalEntry> {
        let parts = split_name(&record.raw_name, self.casing);
        if is_wildcard(&parts.name) {
            logd!("dropping wildcard attribute {:?}", record.raw_name);
            return None;
        }

        Some(CanonicalEntry {
            identifier: derive_identifier(&parts.name, self.renames),
            doc_lines: compose::compose(record, parts.qualifiers_sentence().as_deref()),
            literal: parts.name,
        })
    }

    /// One entry per tag listed in the name cell. Tag names are already
    /// valid identifiers, so the rename table is not consulted.
    pub fn elements(&self, record: &SourceRecord) -> Vec<CanonicalEntry> {
        split_aliases(&record.raw_name)
            .map(|alias| {
                let parts = split_name(alias, self.casing);
                let tag = tag_name(&parts.name);
                CanonicalEntry {
                    identifier: tag.clone(),
                    literal: tag,
                    doc_lines: compose::compose(record, parts.qualifiers_sentence().as_deref()),
                }
            })
            .collect()
    }
}
