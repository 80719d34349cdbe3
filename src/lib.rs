//! Lesson table: a paginated, sortable, selectable list of a course's
//! lessons backed by a REST endpoint, with a terminal front end.
//!
//! The library exposes its modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod startup;
pub mod table;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
