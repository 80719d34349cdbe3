//! HTTP implementation of [`LessonSource`] for the courses REST API.
//!
//! ```text
//! GET {base}/api/lessons?courseId=1&sortOrder=asc&pageNumber=0&pageSize=3&sortColumn=seqNo
//!     -> { "payload": [ Lesson, ... ] }
//! GET {base}/api/courses/1
//!     -> Course
//! ```

use async_trait::async_trait;
use tracing::debug;

use crate::error::FetchError;
use crate::models::{Course, CourseId, Lesson, LessonsPayload, QueryParameters};
use crate::traits::{Headers, HttpClient, LessonSource, Response};

use super::ReqwestHttpClient;

/// Lessons API client.
pub struct LessonsApi<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    client: C,
}

impl LessonsApi<ReqwestHttpClient> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> LessonsApi<C> {
    pub fn with_client(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the lessons page described by `params`.
    pub fn lessons_url(&self, params: &QueryParameters) -> String {
        format!(
            "{}/api/lessons?courseId={}&sortOrder={}&pageNumber={}&pageSize={}&sortColumn={}",
            self.base_url,
            urlencoding::encode(&params.course_id.to_string()),
            params.sort_direction.as_str(),
            params.page_index,
            params.page_size,
            urlencoding::encode(params.sort_field.as_str()),
        )
    }

    pub fn course_url(&self, course_id: CourseId) -> String {
        format!(
            "{}/api/courses/{}",
            self.base_url,
            urlencoding::encode(&course_id.to_string())
        )
    }

    /// Resolve a course before mounting its lesson table.
    pub async fn find_course(&self, course_id: CourseId) -> Result<Course, FetchError> {
        let response = self.get_ok(&self.course_url(course_id)).await?;
        Ok(response.json::<Course>()?)
    }

    async fn get_ok(&self, url: &str) -> Result<Response, FetchError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        debug!(url, "GET");
        let response = self.client.get(url, &headers).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                message: response.text_lossy(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl<C: HttpClient> LessonSource for LessonsApi<C> {
    async fn fetch_page(&self, params: &QueryParameters) -> Result<Vec<Lesson>, FetchError> {
        let response = self.get_ok(&self.lessons_url(params)).await?;
        let envelope: LessonsPayload = response.json()?;
        Ok(envelope.payload)
    }
}
