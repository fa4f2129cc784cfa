//! Scraper module containing the page archiving driver, builder pattern, and configuration.
//!
//! This module provides the main [`Scraper`] struct and its associated builder
//! for configuring and executing homework page archives. It ties the other
//! components together: one authenticated session per page, a single listing
//! request, then a sequential download-and-save pass over the records.
//!
//! # Overview
//!
//! The scraper module is organized into three main components:
//!
//! - `scraper` - Core Scraper struct with the page archiving logic
//! - `builder` - ScraperBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structure and API defaults
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use hwfetch::auth::Credentials;
//! use hwfetch::homework::HomeworkStatus;
//! use hwfetch::scraper::ScraperBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("app-key", "null", "secret", "ivanov_i");
//!
//! let scraper = ScraperBuilder::new()
//!     .directory(PathBuf::from("./archive"))
//!     .build();
//!
//! let summaries = scraper
//!     .archive_page(&credentials, 0, HomeworkStatus::Completed, 53)
//!     .await?;
//! println!("processed {} record(s)", summaries.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod scraper;

pub use builder::ScraperBuilder;
pub use config::{ScraperConfig, API_BASE_URL};
pub use scraper::Scraper;
