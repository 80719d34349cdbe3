//! Concrete implementations of the traits in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`LessonsApi`] - lesson source over the courses REST API
//! - [`StatusLineNotifier`] - error notifier read by the terminal UI
//!
//! The [`mock`] submodule provides test doubles for all of them.

pub mod lessons_api;
pub mod mock;
pub mod reqwest_http;
pub mod status_line;

pub use lessons_api::LessonsApi;
pub use mock::{MockHttpClient, MockLessonSource, RecordingNotifier};
pub use reqwest_http::ReqwestHttpClient;
pub use status_line::StatusLineNotifier;
