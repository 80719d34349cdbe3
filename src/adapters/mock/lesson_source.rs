//! Scriptable in-memory lesson source.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::models::{Lesson, QueryParameters};
use crate::traits::{HttpError, LessonSource};

type Responder = dyn Fn(&QueryParameters) -> Result<Vec<Lesson>, FetchError> + Send + Sync;

#[derive(Default)]
struct State {
    queued: VecDeque<Result<Vec<Lesson>, FetchError>>,
    responder: Option<Arc<Responder>>,
    calls: Vec<QueryParameters>,
}

/// Mock [`LessonSource`].
///
/// Queued results are returned first, in order; after that the responder
/// (if any) answers; with neither, the call fails with
/// a transport error. Every call is recorded.
#[derive(Clone, Default)]
pub struct MockLessonSource {
    state: Arc<Mutex<State>>,
}

impl MockLessonSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer with the same rows.
    pub fn with_rows(rows: Vec<Lesson>) -> Self {
        Self::from_fn(move |_| Ok(rows.clone()))
    }

    /// Answer by calling `responder` with the issued parameters.
    pub fn from_fn<F>(responder: F) -> Self
    where
        F: Fn(&QueryParameters) -> Result<Vec<Lesson>, FetchError> + Send + Sync + 'static,
    {
        let source = Self::new();
        source.state.lock().unwrap().responder = Some(Arc::new(responder));
        source
    }

    pub fn push_result(&self, result: Result<Vec<Lesson>, FetchError>) {
        self.state.lock().unwrap().queued.push_back(result);
    }

    pub fn calls(&self) -> Vec<QueryParameters> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn last_call(&self) -> Option<QueryParameters> {
        self.state.lock().unwrap().calls.last().cloned()
    }
}

#[async_trait]
impl LessonSource for MockLessonSource {
    async fn fetch_page(&self, params: &QueryParameters) -> Result<Vec<Lesson>, FetchError> {
        let (queued, responder) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(params.clone());
            (state.queued.pop_front(), state.responder.clone())
        };

        match (queued, responder) {
            (Some(result), _) => result,
            (None, Some(responder)) => responder(params),
            (None, None) => Err(FetchError::Transport(HttpError::Other(
                "no mock result configured".to_string(),
            ))),
        }
    }
}
