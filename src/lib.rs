pub mod attribution;
pub mod calculator;
pub mod cascade;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod graph;
pub mod source;
pub mod ui;
pub mod warnings;

pub use error::{ModverError, Result};
