//! Error types for the lesson table.
//!
//! The table has exactly one failure kind at its boundary, [`FetchError`].
//! It is caught by the fetch coordinator and never propagates into the
//! caller's control flow; the binary uses `color_eyre` for everything else.

mod fetch;

pub use fetch::{FetchError, LOAD_ERROR_MESSAGE};

/// Result of a single page fetch.
pub type FetchResult<T> = Result<T, FetchError>;
