//! Query parameters sent to the lesson source.
//!
//! A [`QueryParameters`] value is an immutable snapshot of the view at the
//! moment a fetch is issued. Every sort or page change produces a new value;
//! the fetch never re-reads live view state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::course::CourseId;

/// Page size used until the caller configures another one.
pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(UnknownValue(s.to_string())),
        }
    }
}

/// Column the server sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "seqNo")]
    SeqNo,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "duration")]
    Duration,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::SeqNo, SortField::Description, SortField::Duration];

    /// Wire name used in the `sortColumn` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::SeqNo => "seqNo",
            SortField::Description => "description",
            SortField::Duration => "duration",
        }
    }

    /// Column header shown by the table.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::SeqNo => "#",
            SortField::Description => "Description",
            SortField::Duration => "Duration",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

/// Returned when a sort field or direction string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value '{0}'")]
pub struct UnknownValue(pub String);

/// Everything that determines which page is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParameters {
    pub course_id: CourseId,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page_index: usize,
    pub page_size: usize,
}

impl QueryParameters {
    /// Parameters before any user interaction: ascending by sequence
    /// number, first page, default page size.
    pub fn initial(course_id: CourseId) -> Self {
        Self {
            course_id,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Offset of the first row of this page in the full ordered list.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "course={} sort={}:{} page={} size={}",
            self.course_id, self.sort_field, self.sort_direction, self.page_index, self.page_size
        )
    }
}
