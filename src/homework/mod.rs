//! Homework module containing the record model and outcome reporting.
//!
//! This module provides the normalized [`Homework`] entity, the pure mapper
//! from raw listing records, the status filter codes the API accepts, and the
//! per-record [`Summary`] type the scraper reports with.
//!
//! # Overview
//!
//! The homework module is organized into two main components:
//!
//! - [`model`] - The `Homework` entity, record mapper, and status filter
//! - [`summary`] - Archive result tracking and status reporting
//!
//! # Examples
//!
//! ## Mapping a Page of Records
//!
//! ```rust
//! use hwfetch::homework;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name_spec": "Math", "theme": "HW1"}),
//!     json!({"name_spec": "Physics"}),
//! ];
//!
//! for entity in homework::entities(&records) {
//!     println!("{:?} / {:?}", entity.subject_name, entity.theme);
//! }
//! ```

pub mod model;
pub mod summary;

pub use model::{entities, Homework, HomeworkStatus};
pub use summary::{Status, Summary};
