// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec focuses on a single page
//! and encodes *where the ground truth lives in the markup* and *how to
//! reshape it* into a `store::DataSet`.
//!
//! ## What lives here
//! - **Page parsing** for the tournament site: rosters and player pages,
//!   the round-1 ranking and results tables, the statistics leaderboards,
//!   the 2021 schedule and the per-match statistics pages.
//! - **Light shaping** that belongs to one page only (dropping an index
//!   column, fixed column renames, cleaning set-point cells).
//!
//! ## What does **not** live here
//! - Writing files (`file`), stage ordering (`runner`), HTTP (`core::net`).
//! - Generic table reading: that is `engine::extract`, driven by a `TableSpec`.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::<page>::fetch/collect → core::net::Fetch
//!                                      ↘ engine::extract / core::html
//!        → file::write_dataset
//! ```
//!
//! ## Conventions & invariants
//! - Every `parse_*`/`shape` function is pure over a parsed document or a
//!   `DataSet`, so it is testable offline against inline fixtures.
//! - A missing node is a `ScrapeError::Structure`, never a silent blank. The
//!   one exception is the efficiency placeholder in `match_detail`.
//! - Class names are external, unversioned contracts; they live as constants
//!   next to the code that uses them.
pub mod best_players;
pub mod match_detail;
pub mod players;
pub mod round_robin;
pub mod schedule;
pub mod team_rank;
