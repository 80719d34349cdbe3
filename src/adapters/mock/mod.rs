//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockLessonSource`] - scripted lesson pages
//! - [`RecordingNotifier`] - captures user-facing error messages

pub mod http;
pub mod lesson_source;
pub mod notifier;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use lesson_source::MockLessonSource;
pub use notifier::RecordingNotifier;
