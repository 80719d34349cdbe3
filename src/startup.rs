//! Steps run before the terminal is taken over.
//!
//! Logging is installed first so warnings raised while reading the
//! environment and flags reach the log file.

use color_eyre::{eyre::WrapErr, Result};
use tracing::{error, info};

use crate::adapters::LessonsApi;
use crate::config::{default_log_file, Config};
use crate::logging;
use crate::models::{Course, CourseId};
use crate::traits::HttpClient;

/// Install file logging, then build the config from env and `args`.
pub fn configure<I, A>(args: I) -> Config
where
    I: IntoIterator<Item = A>,
    A: Into<String>,
{
    if let Err(e) = logging::init(default_log_file().as_deref()) {
        eprintln!("Warning: could not open log file: {}", e);
    }
    let config = Config::from_env().apply_args(args);
    info!(base_url = %config.base_url, course = %config.course_id, "starting");
    config
}

/// Look up the course to mount. The error is logged here and reported
/// once, by whoever handles the returned report.
pub async fn resolve_course<C: HttpClient>(
    api: &LessonsApi<C>,
    course_id: CourseId,
) -> Result<Course> {
    api.find_course(course_id)
        .await
        .inspect_err(|e| error!(course = %course_id, error = %e, "course lookup failed"))
        .wrap_err_with(|| format!("could not load course {}", course_id))
}
