use hwfetch::auth::Credentials;
use hwfetch::http::{create_http_client, HttpClientConfig};
use reqwest_middleware::ClientWithMiddleware;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_TOKEN: &str = "test-access-token";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LIST_PATH: &str = "/homework/operations/list";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a set of test credentials
pub fn test_credentials() -> Credentials {
    Credentials::new("test-app-key", "null", "test-password", "test-user")
}

/// Creates an HTTP client with the default test configuration
pub fn test_client() -> ClientWithMiddleware {
    create_http_client(HttpClientConfig::default()).expect("Failed to create test client")
}

/// Creates a full raw homework record pointing its attachment at `file_url`
pub fn sample_record(subject: &str, theme: &str, file_url: &str) -> Value {
    json!({
        "status": 1,
        "fio_teach": "Petrova A. V.",
        "name_spec": subject,
        "file_path": file_url,
        "comment": "",
        "creation_time": "2024-01-01",
        "theme": theme,
    })
}

/// Mounts a login mock answering 200 with the test token
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": TEST_TOKEN })),
        )
        .mount(server)
        .await;
}

/// Mounts a listing mock answering 200 with the given records
pub async fn mount_list(server: &MockServer, records: &[Value]) {
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(server)
        .await;
}

/// Mounts an attachment mock with a quoted filename and the given bytes
pub async fn mount_attachment(server: &MockServer, url_path: &str, filename: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\"").as_str(),
                )
                .set_body_bytes(body),
        )
        .mount(server)
        .await;
}
