//! Runtime configuration.
//!
//! Defaults are overridden by environment variables, then by command-line
//! flags.
//!
//! ```ignore
//! use lesson_table::config::Config;
//!
//! let config = Config::from_env().apply_args(std::env::args().skip(1));
//! ```

use std::path::PathBuf;
use tracing::warn;

use crate::models::{CourseId, DEFAULT_PAGE_SIZE};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Page sizes offered by the paginator.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [3, 5, 10];

pub const ENV_BASE_URL: &str = "LESSON_TABLE_BASE_URL";
pub const ENV_COURSE_ID: &str = "LESSON_TABLE_COURSE_ID";
pub const ENV_PAGE_SIZE: &str = "LESSON_TABLE_PAGE_SIZE";
/// `EnvFilter` directives for the log file
pub const ENV_LOG: &str = "LESSON_TABLE_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the courses REST API
    pub base_url: String,
    /// Course whose lessons are listed
    pub course_id: CourseId,
    /// Initial rows per page
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            course_id: CourseId(1),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_course_id(mut self, course_id: CourseId) -> Self {
        self.course_id = course_id;
        self
    }

    /// Zero is ignored.
    pub fn with_page_size(mut self, size: usize) -> Self {
        if size > 0 {
            self.page_size = size;
        }
        self
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Ok(raw) = std::env::var(ENV_COURSE_ID) {
            config.set_course_id(&raw, ENV_COURSE_ID);
        }
        if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
            config.set_page_size(&raw, ENV_PAGE_SIZE);
        }
        config
    }

    /// Apply `--base-url`, `--course` and `--page-size` flags, in either
    /// `--flag value` or `--flag=value` form. Unknown arguments are ignored.
    pub fn apply_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            if !matches!(flag.as_str(), "--base-url" | "--course" | "--page-size") {
                continue;
            }
            let Some(value) = inline.or_else(|| args.next()) else {
                warn!(flag = %flag, "missing value");
                continue;
            };
            match flag.as_str() {
                "--base-url" => self.base_url = value,
                "--course" => self.set_course_id(&value, "--course"),
                _ => self.set_page_size(&value, "--page-size"),
            }
        }
        self
    }

    /// Next larger option, wrapping to the smallest.
    pub fn next_page_size(&self, current: usize) -> usize {
        self.page_size_options
            .iter()
            .copied()
            .find(|&size| size > current)
            .or_else(|| self.page_size_options.iter().copied().min())
            .unwrap_or(current)
    }

    /// Next smaller option, wrapping to the largest.
    pub fn previous_page_size(&self, current: usize) -> usize {
        self.page_size_options
            .iter()
            .copied()
            .filter(|&size| size < current)
            .max()
            .or_else(|| self.page_size_options.iter().copied().max())
            .unwrap_or(current)
    }

    fn set_course_id(&mut self, raw: &str, source: &str) {
        match raw.parse::<CourseId>() {
            Ok(id) => self.course_id = id,
            Err(e) => warn!(source, value = raw, error = %e, "ignoring invalid course id"),
        }
    }

    fn set_page_size(&mut self, raw: &str, source: &str) {
        match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => self.page_size = size,
            _ => warn!(source, value = raw, "ignoring invalid page size"),
        }
    }
}

/// `~/.lesson-table/lesson-table.log`. Resolved without reading any
/// configuration so logging can be installed before config parsing warns.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lesson-table").join("lesson-table.log"))
}
