//! Example archiving one page of completed homeworks

use hwfetch::auth::Credentials;
use hwfetch::homework::{HomeworkStatus, Status};
use hwfetch::scraper::ScraperBuilder;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), hwfetch::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Fill these in from the journal login page.
    let credentials = Credentials::new(
        std::env::var("JOURNAL_APP_KEY").unwrap_or_default(),
        "null",
        std::env::var("JOURNAL_PASSWORD").unwrap_or_default(),
        std::env::var("JOURNAL_USERNAME").unwrap_or_default(),
    );

    let scraper = ScraperBuilder::new()
        .directory(PathBuf::from("archive"))
        .build();

    // One page of completed homeworks for group 53.
    let summaries = scraper
        .archive_page(&credentials, 0, HomeworkStatus::Completed, 53)
        .await?;

    for summary in &summaries {
        match summary.status() {
            Status::Saved(path) => println!("saved   {}", path.display()),
            Status::Skipped(reason) => println!("skipped {reason}"),
            Status::Fail(message) => println!("failed  {message}"),
            Status::NotStarted => {}
        }
    }

    println!("\nDone. Processed {} record(s).", summaries.len());

    Ok(())
}
