//! Per-homework archive outcome.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum for
//! tracking what happened to each record of a page. One bad file never aborts
//! a page: the scraper converts per-item failures into summaries and moves on.
//!
//! # Examples
//!
//! ```rust
//! use hwfetch::homework::{Homework, Status, Summary};
//! use std::path::PathBuf;
//!
//! let homework = Homework::default();
//! let summary = Summary::new(homework).saved(PathBuf::from("homeworks/Math/HW1.docx"));
//!
//! match summary.status() {
//!     Status::Saved(path) => println!("archived at {}", path.display()),
//!     Status::Skipped(reason) => println!("skipped: {reason}"),
//!     Status::Fail(message) => println!("failed: {message}"),
//!     Status::NotStarted => {}
//! }
//! ```

use super::model::Homework;
use std::path::PathBuf;

/// Archive status of one homework record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Archiving failed with an error message.
    Fail(String),
    /// Archiving has not been attempted yet.
    NotStarted,
    /// The record was skipped with a reason, e.g. it has no attachment.
    Skipped(String),
    /// The attachment was written to the given path.
    Saved(PathBuf),
}

/// Represents the archive [`Summary`] of one [`Homework`].
#[derive(Debug, Clone)]
pub struct Summary {
    /// The record the outcome belongs to.
    homework: Homework,
    /// Outcome.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] for a record that has not been processed yet.
    pub fn new(homework: Homework) -> Self {
        Self {
            homework,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Mark the record as saved at `path`.
    pub fn saved(self, path: PathBuf) -> Self {
        self.with_status(Status::Saved(path))
    }

    /// Mark the record as skipped.
    pub fn skip(self, reason: impl Into<String>) -> Self {
        self.with_status(Status::Skipped(reason.into()))
    }

    /// Mark the record as failed.
    pub fn fail(self, message: impl std::fmt::Display) -> Self {
        self.with_status(Status::Fail(message.to_string()))
    }

    /// Get a reference to the summary's homework record.
    pub fn homework(&self) -> &Homework {
        &self.homework
    }

    /// Get the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }
}
