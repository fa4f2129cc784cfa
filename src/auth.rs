//! Credentials and session handling for the journal API.
//!
//! Logging in exchanges a set of user credentials for a bearer token. A
//! [`Session`] is bound to one login and is never refreshed or persisted:
//! when it goes away, so does the token.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hwfetch::auth::{Credentials, Session};
//! use hwfetch::http::{create_http_client, HttpClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("app-key", "null", "secret", "ivanov_i");
//! let client = create_http_client(HttpClientConfig::default())?;
//!
//! let session = Session::authenticate(&client, hwfetch::API_BASE_URL, &credentials).await?;
//! println!("token present: {}", session.token().is_some());
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::http::headers::login_headers;

use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// User credentials for the journal API.
///
/// All four fields come from the journal login page. `city_id` is sometimes
/// the literal string `"null"`, which the API accepts; it is serialized under
/// the wire name `id_city`. The struct serializes directly into the login
/// request body and deserializes from raw credential mappings, so untyped
/// input only exists at the outermost boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Application key issued to the journal web client.
    pub application_key: String,
    /// City identifier, `"null"` for accounts without one.
    #[serde(rename = "id_city")]
    pub city_id: String,
    /// Account password.
    pub password: String,
    /// Account username.
    pub username: String,
}

impl Credentials {
    /// Creates a new set of [`Credentials`].
    pub fn new(
        application_key: impl Into<String>,
        city_id: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            application_key: application_key.into(),
            city_id: city_id.into(),
            password: password.into(),
            username: username.into(),
        }
    }
}

/// An authenticated journal session.
///
/// Holds the bearer token obtained at login. The token is read-only for the
/// lifetime of the session; a session is single-use and there is no refresh.
///
/// A successful login without an `access_token` field yields a session whose
/// token is `None`. That is not a local error: authenticated calls made with
/// it carry `Bearer null` and fail at the server, matching the behavior of
/// the web client.
#[derive(Debug, Clone)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Logs in to the journal API and returns the resulting [`Session`].
    ///
    /// Sends the credentials as a JSON POST to `{base_url}/auth/login` with
    /// the login header set. A response status outside 200-299 fails with
    /// [`Error::Authentication`] and nothing is retried.
    pub async fn authenticate(
        client: &ClientWithMiddleware,
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<Self> {
        let url = format!("{base_url}/auth/login");
        debug!("Logging in as {}", credentials.username);

        let response = client
            .post(&url)
            .headers(login_headers())
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Authentication(status));
        }

        let body: Value = response.json().await?;
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .map(String::from);

        if token.is_none() {
            // The server accepted the login but handed back no token;
            // subsequent calls will be rejected remotely.
            warn!("Login succeeded but the response carried no access_token");
        }

        Ok(Self { token })
    }

    /// Returns the session token, if the login response carried one.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Renders the authorization value for this session.
    ///
    /// A token-less session renders as `Bearer null`, the form the web
    /// client sends when unauthenticated.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token.as_deref().unwrap_or("null"))
    }

    #[cfg(test)]
    pub(crate) fn with_token(token: Option<String>) -> Self {
        Self { token }
    }
}
