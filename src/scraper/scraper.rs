//! Core scraper implementation with the page archiving logic.
//!
//! This module contains the main [`Scraper`] struct that drives one page of
//! homework records from login to files on disk: authenticate, list, map,
//! then download and save each record in turn.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hwfetch::auth::Credentials;
//! use hwfetch::homework::{HomeworkStatus, Status};
//! use hwfetch::scraper::ScraperBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("app-key", "null", "secret", "ivanov_i");
//! let scraper = ScraperBuilder::new().build();
//!
//! let summaries = scraper
//!     .archive_page(&credentials, 0, HomeworkStatus::Completed, 53)
//!     .await?;
//!
//! for summary in summaries {
//!     match summary.status() {
//!         Status::Saved(path) => println!("saved {}", path.display()),
//!         Status::Skipped(reason) => println!("skipped: {reason}"),
//!         Status::Fail(message) => eprintln!("failed: {message}"),
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use super::config::ScraperConfig;
use crate::auth::{Credentials, Session};
use crate::error::Result;
use crate::fetch;
use crate::homework::{self, Homework, HomeworkStatus, Summary};
use crate::http::{create_http_client, HttpClientConfig};
use crate::list::list_homeworks;
use crate::storage::FolderManager;

use reqwest_middleware::ClientWithMiddleware;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Represents the page archiving controller.
///
/// A scraper can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use hwfetch::scraper::ScraperBuilder;
///
/// let s = ScraperBuilder::new().build();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Scraper {
    config: ScraperConfig,
}

impl Scraper {
    /// Creates a new Scraper with the given configuration.
    pub(crate) fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Gets the base URL of the journal API.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the directory the archive root is created under.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the request timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Archives one page of homework records.
    ///
    /// Authenticates once for the whole page, lists the records matching
    /// `status` and `group_id`, then downloads and saves each attachment
    /// sequentially. Per-record failures are reported as [`Summary`] entries
    /// rather than aborting the page; only page-level failures (login,
    /// listing, archive root creation) return an `Err`.
    ///
    /// The records come back in server order, one summary per record.
    pub async fn archive_page(
        &self,
        credentials: &Credentials,
        page: u32,
        status: HomeworkStatus,
        group_id: u32,
    ) -> Result<Vec<Summary>> {
        let client = create_http_client(HttpClientConfig {
            timeout: self.config.timeout,
            proxy: self.config.proxy.clone(),
            headers: None,
        })?;

        // One session per page. The web client re-authenticates per file,
        // which costs a login round-trip for every attachment.
        let session = Session::authenticate(&client, &self.config.base_url, credentials).await?;

        let records = list_homeworks(
            &client,
            &self.config.base_url,
            &session,
            page,
            status,
            group_id,
        )
        .await?;

        let manager = FolderManager::new(&self.config.directory).await?;

        let mut summaries = Vec::with_capacity(records.len());
        for entity in homework::entities(&records) {
            summaries.push(self.archive_one(&client, &manager, entity).await);
        }

        Ok(summaries)
    }

    /// Downloads and saves a single record, reporting the outcome.
    async fn archive_one(
        &self,
        client: &ClientWithMiddleware,
        manager: &FolderManager,
        entity: Homework,
    ) -> Summary {
        let Some(url) = entity.file_url_path.clone() else {
            return Summary::new(entity).skip("record has no attachment URL");
        };
        let Some(subject) = entity.subject_name.clone() else {
            return Summary::new(entity).skip("record has no subject name");
        };
        let Some(theme) = entity.theme.clone() else {
            return Summary::new(entity).skip("record has no theme");
        };

        debug!("Archiving {subject}/{theme}");

        let file = match fetch::download(client, &url).await {
            Ok(file) => file,
            Err(e) => {
                warn!("Download of {url} failed: {e}");
                return Summary::new(entity).fail(e);
            }
        };

        match manager.save(&subject, &theme, &file).await {
            Ok(path) => Summary::new(entity).saved(path),
            Err(e) => {
                warn!("Saving {subject}/{theme} failed: {e}");
                Summary::new(entity).fail(e)
            }
        }
    }
}
