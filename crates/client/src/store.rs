//! Table store API client
//!
//! One client struct wrapping `reqwest`, authenticated with a bearer API
//! key. The table store owns transport and schema; this module only knows
//! the field names of the rows it reads and writes and the shape of the
//! response envelope.

use formdeck_core::{
    FormId, FormRecord, FormdeckError, FormdeckResult, NewForm, ProjectId, SessionInfo,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;

/// Environment variable holding the table store base URL
pub const ENV_API_URL: &str = "FORMDECK_API_URL";

/// Environment variable holding the table store API key
pub const ENV_API_KEY: &str = "FORMDECK_API_KEY";

const USER_AGENT: &str = concat!("formdeck/", env!("CARGO_PKG_VERSION"));

/// Collection the creation wizard writes into
const FORMS_COLLECTION: &str = "forms";

// ============================================================================
// Response Envelope
// ============================================================================

/// Wire envelope every table store response is wrapped in.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Convert a raw response into the caller's type.
///
/// Error precedence: a populated `error` field wins over the status code's
/// success class, and a non-2xx status is an error even when the body is
/// not a parseable envelope.
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> FormdeckResult<T> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .map(|error| match error.code {
                Some(code) => format!("{} ({code})", error.message),
                None => error.message,
            })
            .unwrap_or_else(|| truncate_body(body));
        return Err(FormdeckError::backend(status, message));
    }

    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if let Some(error) = envelope.error {
        return Err(FormdeckError::backend(status, error.message));
    }
    envelope
        .data
        .ok_or_else(|| FormdeckError::backend(status, "response envelope carried no data"))
}

fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let body = body.trim();
    if body.is_empty() {
        "empty response body".to_string()
    } else if body.chars().count() > MAX_CHARS {
        let head: String = body.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for the Formdeck table store API.
#[derive(Debug, Clone)]
pub struct TableStoreClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl TableStoreClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> FormdeckResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FormdeckError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a client from `FORMDECK_API_URL` / `FORMDECK_API_KEY`.
    ///
    /// An unset or empty URL means the app runs disconnected and yields
    /// `Ok(None)`; a URL without a key is a configuration error.
    pub fn from_env() -> FormdeckResult<Option<Self>> {
        let base_url = match env::var(ENV_API_URL) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => return Ok(None),
        };

        let api_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FormdeckError::MissingConfig(ENV_API_KEY.to_string()))?;

        Self::new(base_url, api_key).map(Some)
    }

    fn rows_url(&self) -> String {
        format!("{}/v1/tables/{FORMS_COLLECTION}/rows", self.base_url)
    }

    fn row_url(&self, id: FormId) -> String {
        format!("{}/{id}", self.rows_url())
    }

    fn session_url(&self) -> String {
        format!("{}/v1/session", self.base_url)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Insert one row into the `forms` collection and return the created row.
    pub async fn insert_form(&self, row: &NewForm) -> FormdeckResult<FormRecord> {
        tracing::debug!(slug = %row.slug, "inserting form row");
        let response = self
            .client
            .post(self.rows_url())
            .bearer_auth(&self.api_key)
            .json(row)
            .send()
            .await
            .map_err(|e| FormdeckError::transport(e.to_string()))?;

        self.decode(response).await
    }

    /// List the forms belonging to a project, newest first.
    pub async fn list_forms(&self, project_id: ProjectId) -> FormdeckResult<Vec<FormRecord>> {
        let response = self
            .client
            .get(self.rows_url())
            .bearer_auth(&self.api_key)
            .query(&[("project_id", project_id.to_string())])
            .send()
            .await
            .map_err(|e| FormdeckError::transport(e.to_string()))?;

        self.decode(response).await
    }

    /// Fetch a single form row by id.
    pub async fn fetch_form(&self, id: FormId) -> FormdeckResult<FormRecord> {
        let response = self
            .client
            .get(self.row_url(id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| FormdeckError::transport(e.to_string()))?;

        self.decode(response).await.map_err(|e| match e {
            FormdeckError::Backend { status: 404, .. } => {
                FormdeckError::FormNotFound(id.to_string())
            }
            other => other,
        })
    }

    /// Fetch the session context: active project and entitlement flags.
    pub async fn fetch_session(&self) -> FormdeckResult<SessionInfo> {
        let response = self
            .client
            .get(self.session_url())
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| FormdeckError::transport(e.to_string()))?;

        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> FormdeckResult<T> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FormdeckError::transport(e.to_string()))?;
        decode_envelope(status, &body)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_envelope_data() {
        let record: FormRecord = decode_envelope(
            201,
            r#"{
                "data": {
                    "id": "0a321b62-b1a8-4bb5-9d5d-3a8a2e1c9f10",
                    "project_id": "5f0c9a52-27f4-4d2f-9b61-0d7b1f1f2a3c",
                    "name": "My Leads",
                    "slug": "my-leads",
                    "description": null,
                    "form_type": "lead",
                    "is_active": false,
                    "version": 1
                },
                "error": null
            }"#,
        )
        .unwrap();

        assert_eq!(record.name, "My Leads");
        assert!(!record.is_active);
    }

    #[test]
    fn test_decode_envelope_error_field() {
        let result: FormdeckResult<FormRecord> = decode_envelope(
            200,
            r#"{ "data": null, "error": { "message": "duplicate slug", "code": "23505" } }"#,
        );

        match result {
            Err(FormdeckError::Backend { status, message }) => {
                assert_eq!(status, 200);
                assert_eq!(message, "duplicate slug");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_envelope_http_error_status() {
        let result: FormdeckResult<FormRecord> = decode_envelope(
            401,
            r#"{ "data": null, "error": { "message": "invalid api key", "code": null } }"#,
        );

        match result {
            Err(FormdeckError::Backend { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_envelope_unparseable_error_body() {
        let result: FormdeckResult<FormRecord> = decode_envelope(502, "<html>bad gateway</html>");
        match result {
            Err(FormdeckError::Backend { status, message }) => {
                assert_eq!(status, 502);
                assert!(message.contains("bad gateway"));
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_envelope_missing_data() {
        let result: FormdeckResult<FormRecord> = decode_envelope(200, r#"{ "data": null }"#);
        assert!(matches!(result, Err(FormdeckError::Backend { .. })));
    }

    #[test]
    fn test_url_construction() {
        let client = TableStoreClient::new("https://api.formdeck.io/", "key").unwrap();
        assert_eq!(
            client.rows_url(),
            "https://api.formdeck.io/v1/tables/forms/rows"
        );
        assert_eq!(client.session_url(), "https://api.formdeck.io/v1/session");

        let id: FormId = "0a321b62-b1a8-4bb5-9d5d-3a8a2e1c9f10".parse().unwrap();
        assert_eq!(
            client.row_url(id),
            "https://api.formdeck.io/v1/tables/forms/rows/0a321b62-b1a8-4bb5-9d5d-3a8a2e1c9f10"
        );
    }

    #[test]
    fn test_from_env() {
        // Single test for all env combinations so parallel tests never race
        // on the process environment.
        unsafe {
            env::remove_var(ENV_API_URL);
            env::remove_var(ENV_API_KEY);
        }
        assert!(TableStoreClient::from_env().unwrap().is_none());

        unsafe {
            env::set_var(ENV_API_URL, "https://api.formdeck.io");
        }
        assert!(matches!(
            TableStoreClient::from_env(),
            Err(FormdeckError::MissingConfig(_))
        ));

        unsafe {
            env::set_var(ENV_API_KEY, "secret");
        }
        assert!(TableStoreClient::from_env().unwrap().is_some());

        unsafe {
            env::remove_var(ENV_API_URL);
            env::remove_var(ENV_API_KEY);
        }
    }
}
