// src/engine/mod.rs
pub mod columns;
mod engine;
pub mod types;

pub use engine::{extract, fetch_table};
pub use types::TableSpec;
