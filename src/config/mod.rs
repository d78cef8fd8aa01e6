// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod renames;

pub use options::{GenerateOptions, PageKind, QualifierCasing, Source};
pub use renames::RenameTable;
