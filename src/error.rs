// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("reading {path} failed")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("writing output failed")]
    Output(#[from] std::io::Error),

    #[error("no tables found in {0}")]
    NoTables(String),

    /// The page layout changed under us.
    #[error("table {table}, row {row}: expected {expected} columns, found {found}")]
    Shape {
        table: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("table {table}, row {row}: empty name cell")]
    EmptyName { table: usize, row: usize },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
