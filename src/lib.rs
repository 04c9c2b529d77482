//! # Worklog
//!
//! An interactive terminal tool for logging hours worked against named
//! projects and generating per-project time reports.
//!
//! ## Features
//!
//! - **Time Logging**: Dated time entries with description and hours
//! - **Project Buckets**: Named projects with enforced referential integrity
//! - **Reports**: Per-project totals with a chronological entry breakdown
//! - **Local Storage**: Single SQLite file in the platform data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! fn main() -> anyhow::Result<()> {
//!     worklog::ui::run()
//! }
//! ```

pub mod db;
pub mod libs;
pub mod ui;
pub mod workflow;
