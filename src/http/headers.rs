//! Header sets for the three kinds of journal requests.
//!
//! The journal API is fronted by the same gateway the browser client uses, so
//! each request carries a browser-shaped header set: one for the login POST,
//! one for authenticated API calls, and a minimal one for attachment
//! downloads. The user-agent is picked at random from a small pool of real
//! browser strings on every call.

use crate::error::Result;

use rand::seq::IndexedRandom;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, ORIGIN, REFERER,
    USER_AGENT,
};

/// Origin of the browser client the API expects to be called from.
pub const JOURNAL_ORIGIN: &str = "https://journal.top-academy.ru";

const ACCEPT_JSON: &str = "application/json, text/plain, */*";
const ACCEPT_LANG_RU: &str = "ru_RU, ru";

/// Pool of real browser user-agent strings to rotate through.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:126.0) Gecko/20100101 Firefox/126.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

/// Picks a random user-agent string from the pool.
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

/// Headers for the login POST request.
///
/// No token exists yet, so the authorization field carries the literal
/// `Bearer null` the browser client sends before logging in.
pub fn login_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG_RU));
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer null"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ORIGIN, HeaderValue::from_static(JOURNAL_ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(JOURNAL_ORIGIN));
    headers.insert(USER_AGENT, HeaderValue::from_static(random_user_agent()));
    headers
}

/// Headers for authenticated API requests.
///
/// `token` is the session token obtained at login; `None` renders as
/// `Bearer null`, leaving rejection to the server rather than the client.
pub fn authenticated_headers(token: Option<&str>) -> Result<HeaderMap> {
    let bearer = format!("Bearer {}", token.unwrap_or("null"));

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG_RU));
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
    headers.insert(ORIGIN, HeaderValue::from_static(JOURNAL_ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(JOURNAL_ORIGIN));
    headers.insert(USER_AGENT, HeaderValue::from_static(random_user_agent()));
    Ok(headers)
}

/// Headers for attachment downloads.
///
/// Attachment URLs are pre-authorized by the API, so only the user-agent is
/// needed here.
pub fn download_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(random_user_agent()));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_agent_comes_from_pool() {
        for _ in 0..32 {
            assert!(USER_AGENTS.contains(&random_user_agent()));
        }
    }

    #[test]
    fn test_login_headers_carry_null_bearer() {
        let headers = login_headers();
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer null"))
        );
        assert_eq!(
            headers.get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
    }

    #[test]
    fn test_authenticated_headers_with_token() {
        let headers = authenticated_headers(Some("abc123")).unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer abc123"))
        );
    }

    #[test]
    fn test_authenticated_headers_without_token() {
        let headers = authenticated_headers(None).unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer null"))
        );
    }

    #[test]
    fn test_download_headers_minimal() {
        let headers = download_headers();
        assert_eq!(headers.len(), 1);
        assert!(headers.get(USER_AGENT).is_some());
    }
}
