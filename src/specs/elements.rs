// src/specs/elements.rs
//! Spec for the element reference (`/Web/HTML/Element`).
//!
//! Every table is a category of elements with columns name (+ link) and
//! description. The last table lists obsolete and deprecated elements.
//! A name cell may hold several tags (`<h1>, <h2>, …`); splitting them is
//! left to the normalizer.

use super::{check_shape, require_tables};
use crate::config::consts::ELEMENT_COLUMNS;
use crate::core::Table;
use crate::error::{Result, ScrapeError};
use crate::record::SourceRecord;

pub fn extract(tables: &[Table], origin: &str) -> Result<Vec<SourceRecord>> {
    let tables = require_tables(tables, origin)?;
    let last = tables.len() - 1;
    let mut records = Vec::new();

    for (table_ix, table) in tables.iter().enumerate() {
        let deprecated = table_ix == last;
        for (row_ix, row) in table.rows.iter().enumerate() {
            check_shape(table_ix, row_ix, row, ELEMENT_COLUMNS)?;
            let (name, description) = (&row[0], &row[1]);
            if name.text.is_empty() {
                return Err(ScrapeError::EmptyName { table: table_ix, row: row_ix });
            }

            records.push(SourceRecord {
                raw_name: name.text.clone(),
                link: name.link.clone(),
                description: description.text.clone(),
                applicability: None,
                deprecated,
            });
        }
        logd!("elements: table {table_ix} has {} rows (deprecated: {deprecated})", table.rows.len());
    }
    Ok(records)
}
