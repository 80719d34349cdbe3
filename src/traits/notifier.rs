//! User-facing error channel.

/// Receives a human-readable message whenever a load fails.
///
/// Called synchronously from the event loop, once per failed request.
pub trait ErrorNotifier {
    fn notify(&self, message: &str);
}

