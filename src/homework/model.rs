//! Homework entity and record mapping.
//!
//! The listing endpoint returns loosely-typed JSON records. [`Homework`] is
//! the normalized, immutable view of one record: every field is optional
//! because the API omits keys freely, and callers must handle absence
//! explicitly rather than receive silent nulls.
//!
//! # Examples
//!
//! ```rust
//! use hwfetch::homework::Homework;
//! use serde_json::json;
//!
//! let record = json!({
//!     "status": 1,
//!     "name_spec": "Math",
//!     "theme": "HW1",
//!     "file_path": "https://files.example.com/hw1",
//! });
//!
//! let homework = Homework::from_record(&record);
//! assert_eq!(homework.subject_name.as_deref(), Some("Math"));
//! assert!(homework.teacher_name.is_none());
//! ```

use serde_json::Value;

// Wire keys used by the listing endpoint.
const STATUS_KEY: &str = "status";
const TEACHER_NAME_KEY: &str = "fio_teach";
const SUBJECT_NAME_KEY: &str = "name_spec";
const FILE_URL_PATH_KEY: &str = "file_path";
const COMMENT_KEY: &str = "comment";
const CREATION_TIME_KEY: &str = "creation_time";
const THEME_KEY: &str = "theme";

/// One normalized homework record.
///
/// Immutable value object produced by [`Homework::from_record`]; never
/// mutated after creation. `file_url_path`, when present, is a standalone
/// download link that needs no bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Homework {
    /// Status code of the record as returned by the API.
    pub status: Option<i64>,
    /// Full name of the teacher.
    pub teacher_name: Option<String>,
    /// Subject the homework belongs to; doubles as the archive folder name.
    pub subject_name: Option<String>,
    /// Pre-authorized URL of the attachment.
    pub file_url_path: Option<String>,
    /// Teacher's comment.
    pub comment: Option<String>,
    /// Creation timestamp, passed through as the API formats it.
    pub creation_time: Option<String>,
    /// Homework theme; doubles as the saved file's stem.
    pub theme: Option<String>,
}

impl Homework {
    /// Maps a raw listing record to a [`Homework`].
    ///
    /// Pure function: each known key is copied if present, else the field is
    /// `None`. No validation and no coercion beyond the natural JSON types.
    pub fn from_record(record: &Value) -> Self {
        Self {
            status: record.get(STATUS_KEY).and_then(Value::as_i64),
            teacher_name: string_field(record, TEACHER_NAME_KEY),
            subject_name: string_field(record, SUBJECT_NAME_KEY),
            file_url_path: string_field(record, FILE_URL_PATH_KEY),
            comment: string_field(record, COMMENT_KEY),
            creation_time: string_field(record, CREATION_TIME_KEY),
            theme: string_field(record, THEME_KEY),
        }
    }
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(String::from)
}

/// Lazily maps a page of raw records to [`Homework`] entities.
///
/// The iterator preserves the order of the input sequence and is consumed in
/// a single pass, one entity per record.
pub fn entities(records: &[Value]) -> impl Iterator<Item = Homework> + '_ {
    records.iter().map(Homework::from_record)
}

/// Homework status filter accepted by the listing endpoint.
///
/// The numeric codes are part of the API contract; `Practical` (0) is what
/// the journal uses for ungraded practical works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    /// Ungraded, likely a practical work.
    Practical,
    /// Completed homework.
    Completed,
    /// Handed in, awaiting review.
    UnderReview,
    /// Not handed in yet.
    Incomplete,
    /// Past its deadline.
    Expired,
}

impl HomeworkStatus {
    /// Numeric code used in the listing URL.
    pub fn code(self) -> u8 {
        match self {
            HomeworkStatus::Practical => 0,
            HomeworkStatus::Completed => 1,
            HomeworkStatus::UnderReview => 2,
            HomeworkStatus::Incomplete => 3,
            HomeworkStatus::Expired => 5,
        }
    }
}

impl TryFrom<u8> for HomeworkStatus {
    type Error = crate::error::Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HomeworkStatus::Practical),
            1 => Ok(HomeworkStatus::Completed),
            2 => Ok(HomeworkStatus::UnderReview),
            3 => Ok(HomeworkStatus::Incomplete),
            5 => Ok(HomeworkStatus::Expired),
            other => Err(crate::error::Error::Internal(format!(
                "Unknown homework status code: {other}"
            ))),
        }
    }
}
