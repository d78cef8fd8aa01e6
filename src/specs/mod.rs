// src/specs/mod.rs
//! # Page specs
//!
//! One module per MDN reference page. A spec knows **which tables** of the
//! page hold the data and **what each column means**, and turns parsed
//! [`Table`](crate::core::Table)s into [`SourceRecord`](crate::record::SourceRecord)s.
//!
//! ## What lives here
//! - Column layout per page (attributes: name, elements, description;
//!   elements: name, description).
//! - Which tables count (attributes: the first; elements: all, the last one
//!   being the deprecated section).
//! - Layout checks: a row with the wrong number of cells is a hard
//!   [`ScrapeError::Shape`](crate::error::ScrapeError::Shape), since a silent
//!   misread would produce plausible but wrong snippets.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`) and generic table parsing (`core::html`).
//! - Naming, doc text, output (`normalize`, `compose`, `emit`).
//!
//! Specs are pure functions over already-parsed tables and are tested offline.
pub mod attributes;
pub mod elements;

use crate::core::{Row, Table};
use crate::error::{Result, ScrapeError};

/// Fail unless `row` has exactly `expected` cells.
fn check_shape(table: usize, row_ix: usize, row: &Row, expected: usize) -> Result<()> {
    if row.len() != expected {
        return Err(ScrapeError::Shape { table, row: row_ix, expected, found: row.len() });
    }
    Ok(())
}

fn require_tables<'a>(tables: &'a [Table], origin: &str) -> Result<&'a [Table]> {
    if tables.is_empty() {
        return Err(ScrapeError::NoTables(s!(origin)));
    }
    Ok(tables)
}
