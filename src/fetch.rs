//! Attachment download and extension inference.
//!
//! Attachment URLs issued by the listing endpoint are pre-authorized, so the
//! download itself is an unauthenticated GET. The file's extension is not in
//! the URL; it has to be read out of the `Content-Disposition` response
//! header, whose quoted filename is the only reliable source.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hwfetch::fetch;
//! use hwfetch::http::{create_http_client, HttpClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let file = fetch::download(&client, "https://files.example.com/hw1").await?;
//! println!("{} bytes of .{}", file.content.len(), file.extension);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::http::headers::download_headers;

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// A downloaded attachment.
///
/// Ephemeral: exists only to carry the bytes and the inferred extension from
/// the fetcher to the folder manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Extension inferred from the `Content-Disposition` header, without dot.
    pub extension: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

/// Downloads a homework attachment.
///
/// Issues an unauthenticated GET with the download header set; the API
/// pre-authorizes attachment URLs, so no bearer token is attached. A status
/// outside 200-299 fails with [`Error::Request`]; an absent or malformed
/// `Content-Disposition` header fails with [`Error::ExtensionParse`].
pub async fn download(client: &ClientWithMiddleware, url: &str) -> Result<DownloadedFile> {
    let url = Url::parse(url)
        .map_err(|e| Error::InvalidUrl(format!("The url \"{url}\" cannot be parsed: {e}")))?;
    debug!("Fetching attachment {url}");

    let response = client.get(url).headers(download_headers()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Request(status));
    }

    let extension = match response.headers().get(CONTENT_DISPOSITION) {
        Some(value) => {
            let value = value.to_str().map_err(|_| {
                Error::ExtensionParse("Content-Disposition is not valid ASCII".into())
            })?;
            parse_extension(value)?
        }
        None => {
            return Err(Error::ExtensionParse(
                "Content-Disposition header is missing".into(),
            ))
        }
    };

    let content = response.bytes().await?.to_vec();
    debug!("Downloaded {} byte(s), extension .{extension}", content.len());

    Ok(DownloadedFile { extension, content })
}

/// Infers a file extension from a `Content-Disposition` header value.
///
/// The header is expected to carry a quoted filename, e.g.
/// `attachment; filename="report.final.pdf"`. The extension is the segment
/// after the last dot of that filename, `pdf` here. A value without a quoted
/// filename, or a filename without a dot, fails with
/// [`Error::ExtensionParse`] instead of panicking on a missing segment.
pub fn parse_extension(content_disposition: &str) -> Result<String> {
    let filename = content_disposition.split('"').nth(1).ok_or_else(|| {
        Error::ExtensionParse(format!("No quoted filename in {content_disposition:?}"))
    })?;

    let (_, extension) = filename.rsplit_once('.').ok_or_else(|| {
        Error::ExtensionParse(format!("Filename {filename:?} has no extension"))
    })?;

    if extension.is_empty() {
        return Err(Error::ExtensionParse(format!(
            "Filename {filename:?} has an empty extension"
        )));
    }

    Ok(extension.to_string())
}
