//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET transport
//! - [`LessonSource`] - one page of lessons per query
//! - [`ErrorNotifier`] - user-facing error channel

pub mod http;
pub mod lesson_source;
pub mod notifier;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use lesson_source::LessonSource;
pub use notifier::ErrorNotifier;
