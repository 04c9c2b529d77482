//! Database layer for worklog.
//!
//! A thin persistence layer over SQLite with application-enforced referential
//! integrity: a project cannot be deleted while time entries reference it,
//! and a time entry can only be created against an existing project. All SQL
//! is parameterized; every mutation commits individually.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Project storage operations.
pub mod projects;

/// Time entry storage, the listing join, and per-project aggregation.
pub mod times;
