//! Fetch coordination: loading flag, row set and request tokens.
//!
//! ```text
//!            begin(params) -> token N
//!   idle ───────────────────────────────▶ loading (latest = N)
//!    ▲                                       │
//!    │  complete(N, Ok(rows))   replace rows, clear selection
//!    │  complete(N, Err(e))     keep rows, notify once
//!    └───────────────────────────────────────┘
//!
//!   complete(M < N, _)  -> Stale, nothing changes
//! ```

use std::collections::HashSet;
use std::fmt;
use tracing::{debug, error, info, warn};

use crate::error::FetchError;
use crate::models::{Lesson, QueryParameters};
use crate::traits::ErrorNotifier;

use super::selection::SelectionController;

/// Identifies one issued fetch. Tokens increase monotonically per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a completion did to the table.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Rows were replaced and the selection cleared.
    Applied { rows: usize },
    /// The latest request failed; rows were kept and the user notified.
    Failed(FetchError),
    /// A superseded request finished and was ignored.
    Stale,
}

impl FetchOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, FetchOutcome::Stale)
    }
}

#[derive(Debug, Default)]
pub struct FetchCoordinator {
    rows: Vec<Lesson>,
    loading: bool,
    issued: u64,
    in_flight: Option<QueryParameters>,
    last_applied: Option<QueryParameters>,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Lesson] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Parameters of the latest issued request while it is outstanding.
    pub fn in_flight(&self) -> Option<&QueryParameters> {
        self.in_flight.as_ref()
    }

    /// Parameters whose result is currently displayed.
    pub fn last_applied(&self) -> Option<&QueryParameters> {
        self.last_applied.as_ref()
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }

    /// Mark a new request as issued. Loading is set before the caller
    /// spawns the request, and the returned token supersedes every
    /// earlier one.
    pub fn begin(&mut self, params: QueryParameters) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        debug!(%token, %params, "fetch issued");
        if let Some(previous) = self.in_flight.replace(params) {
            debug!(%previous, "superseding outstanding fetch");
        }
        self.loading = true;
        token
    }

    /// Apply the result of the request identified by `token`.
    ///
    /// Only the latest token is applied. On success the rows are replaced
    /// (keeping the first row for each id) and `selection` is cleared in
    /// the same call; on failure the rows are
    /// kept and `notifier` receives the error once. Either way loading ends.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Lesson>, FetchError>,
        selection: &mut SelectionController,
        notifier: &dyn ErrorNotifier,
    ) -> FetchOutcome {
        if token.0 != self.issued {
            debug!(%token, latest = self.issued, ok = result.is_ok(), "discarding stale fetch result");
            return FetchOutcome::Stale;
        }

        let params = self.in_flight.take();
        let outcome = match result {
            Ok(mut rows) => {
                let received = rows.len();
                let mut seen = HashSet::with_capacity(received);
                rows.retain(|lesson| seen.insert(lesson.id));
                if rows.len() < received {
                    warn!(%token, dropped = received - rows.len(), "dropped lessons with duplicate ids");
                }
                let count = rows.len();
                self.rows = rows;
                selection.clear();
                info!(%token, rows = count, "lesson page loaded");
                self.last_applied = params;
                FetchOutcome::Applied { rows: count }
            }
            Err(err) => {
                error!(%token, code = err.error_code(), error = %err, "Error Loading Lessons.");
                notifier.notify(err.user_message());
                FetchOutcome::Failed(err)
            }
        };

        self.loading = false;
        outcome
    }
}
