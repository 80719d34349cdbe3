//! The remote data source seam.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::{Lesson, QueryParameters};

/// Produces one page of lessons for a given set of query parameters.
///
/// Implementations are treated as a pure function of `params`: calling
/// them must not touch table state, and the returned order is the display
/// order.
#[async_trait]
pub trait LessonSource: Send + Sync {
    async fn fetch_page(&self, params: &QueryParameters) -> FetchResult<Vec<Lesson>>;
}

