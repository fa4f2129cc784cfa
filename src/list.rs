//! Single-page homework listing.
//!
//! Fetches one page of raw homework records from the journal API. The page
//! number, status filter, and group id are caller-supplied; there is no
//! pagination loop here, and detecting the end of data (an empty array) is
//! the caller's job.

use crate::auth::Session;
use crate::error::{Error, Result};
use crate::homework::HomeworkStatus;
use crate::http::headers::authenticated_headers;

use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use tracing::debug;

/// Builds the listing URL for one page of homework records.
///
/// The `type=0` discriminator is fixed; the API uses other values for
/// operations this crate does not cover.
///
/// # Example
///
/// ```rust
/// use hwfetch::homework::HomeworkStatus;
/// use hwfetch::list::list_url;
///
/// let url = list_url("https://msapi.example.com/api/v2", 0, HomeworkStatus::Completed, 53);
/// assert_eq!(
///     url,
///     "https://msapi.example.com/api/v2/homework/operations/list?page=0&status=1&type=0&group_id=53"
/// );
/// ```
pub fn list_url(base_url: &str, page: u32, status: HomeworkStatus, group_id: u32) -> String {
    format!(
        "{base_url}/homework/operations/list?page={page}&status={status}&type=0&group_id={group_id}",
        status = status.code()
    )
}

/// Fetches one page of raw homework records.
///
/// Issues a bearer-authenticated GET and returns the parsed JSON array
/// verbatim, in server order. A status outside 200-299 fails with
/// [`Error::Request`].
pub async fn list_homeworks(
    client: &ClientWithMiddleware,
    base_url: &str,
    session: &Session,
    page: u32,
    status: HomeworkStatus,
    group_id: u32,
) -> Result<Vec<Value>> {
    let url = list_url(base_url, page, status, group_id);
    debug!("Listing homeworks from {url}");

    let response = client
        .get(&url)
        .headers(authenticated_headers(session.token())?)
        .send()
        .await?;

    let response_status = response.status();
    if !response_status.is_success() {
        return Err(Error::Request(response_status));
    }

    let records: Vec<Value> = response.json().await?;
    debug!("Received {} homework record(s)", records.len());
    Ok(records)
}
