// src/specs/attributes.rs
//! Spec for the attribute reference (`/Web/HTML/Attributes`).
//!
//! Only the first table is read. Columns:
//! 1. name (+ link), with status words after a paragraph break
//! 2. elements the attribute applies to, or `Global attribute`
//! 3. description

use super::{check_shape, require_tables};
use crate::config::consts::ATTRIBUTE_COLUMNS;
use crate::core::Table;
use crate::error::{Result, ScrapeError};
use crate::record::{Applicability, SourceRecord};

pub fn extract(tables: &[Table], origin: &str) -> Result<Vec<SourceRecord>> {
    let table = &require_tables(tables, origin)?[0];
    let mut records = Vec::with_capacity(table.rows.len());

    for (row_ix, row) in table.rows.iter().enumerate() {
        check_shape(0, row_ix, row, ATTRIBUTE_COLUMNS)?;
        let (name, elements, description) = (&row[0], &row[1], &row[2]);
        if name.text.is_empty() {
            return Err(ScrapeError::EmptyName { table: 0, row: row_ix });
        }

        records.push(SourceRecord {
            raw_name: name.text.clone(),
            link: name.link.clone(),
            description: description.text.clone(),
            applicability: Some(Applicability::from_cell(&elements.text)),
            deprecated: false,
        });
    }
    logd!("attributes: {} rows", records.len());
    Ok(records)
}
