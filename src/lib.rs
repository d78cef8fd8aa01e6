// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod specs;

pub mod catalog;
pub mod cli;
pub mod compose;
pub mod emit;
pub mod normalize;
pub mod progress;
pub mod runner;

pub use error::{Result, ScrapeError};
