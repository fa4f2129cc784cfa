//! hwfetch retrieves homework records and their attached files from the
//! school journal web API and archives them on disk, one folder per subject.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hwfetch::auth::Credentials;
//! use hwfetch::homework::HomeworkStatus;
//! use hwfetch::scraper::ScraperBuilder;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), hwfetch::Error> {
//! let credentials = Credentials::new("app-key", "null", "secret", "ivanov_i");
//! let scraper = ScraperBuilder::new()
//!     .directory(PathBuf::from("archive"))
//!     .build();
//!
//! let summaries = scraper
//!     .archive_page(&credentials, 0, HomeworkStatus::Completed, 53)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Files land under `<directory>/homeworks/<subject>/<theme>.<ext>`; a name
//! collision renames the new file to `<theme>_copy.<ext>` once.
//!
//! # Module Organization
//!
//! The hwfetch crate is organized into several modules:
//!
//! - [`auth`] - Credentials and the login/session flow
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`fetch`] - Attachment download and extension inference
//! - [`homework`] - The homework entity, record mapper, and outcome summaries
//! - [`http`] - HTTP client functionality and journal header sets
//! - [`list`] - Single-page homework listing
//! - [`scraper`] - The main `Scraper` and `ScraperBuilder` orchestrating a page
//! - [`storage`] - Archive folder layout and collision handling

pub mod auth;
pub mod error;
pub mod fetch;
pub mod homework;
pub mod http;
pub mod list;
pub mod scraper;
pub mod storage;

pub use auth::{Credentials, Session};
pub use error::{Error, Result};
pub use fetch::DownloadedFile;
pub use homework::{Homework, HomeworkStatus, Status, Summary};
pub use http::{create_http_client, HttpClientConfig};
pub use list::{list_homeworks, list_url};
pub use scraper::{Scraper, ScraperBuilder, API_BASE_URL};
pub use storage::{FolderManager, HOMEWORKS_DIR};
