//! Shared library modules: configuration, storage paths, validation,
//! reporting, table rendering, and the message catalog.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod report;
pub mod validator;
pub mod view;
