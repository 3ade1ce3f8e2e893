//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use reqwest::Client;

use crate::error::Result;
use crate::interface::{EnrollApi, HttpClient};
use crate::model::dtos::EnrollParams;
use crate::model::structs::{EnrollReply, EnrollmentResponse};

/// The course platform's dev server.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: String,
}

impl HttpClient for NoWasmClient {
    async fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl NoWasmClient {
    /// Point the client at a specific course platform instance.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_enroll_request(&self, params: &EnrollParams<'_>) -> Result<reqwest::Request> {
        let url = format!("{}/courses/enroll/{}/", self.base_url, params.course_id);

        let request = self
            .client
            .post(&url)
            .header("X-CSRFToken", params.csrf_token)
            .json(&serde_json::json!({}))
            .build()?;

        Ok(request)
    }
}

impl EnrollApi for NoWasmClient {
    async fn enroll(&self, params: EnrollParams<'_>) -> Result<EnrollReply> {
        let request = self.build_enroll_request(&params)?;
        let resp = self.client.execute(request).await?;

        let status = resp.status();
        // A body that cannot be read is treated like a body that cannot be
        // parsed: the reply degrades to its defaults.
        let text = resp.text().await.unwrap_or_default();

        Ok(EnrollReply {
            ok: status.is_success(),
            status: status.as_u16(),
            body: EnrollmentResponse::from_body(&text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NoWasmClient {
        NoWasmClient::with_base_url("http://platform.test/").unwrap()
    }

    #[test]
    fn base_url_loses_its_trailing_slash() {
        assert_eq!(client().base_url(), "http://platform.test");
    }

    #[test]
    fn enroll_request_hits_the_enrollment_endpoint() {
        let request = client()
            .build_enroll_request(&EnrollParams {
                course_id: "42",
                csrf_token: "tok",
            })
            .unwrap();

        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://platform.test/courses/enroll/42/"
        );
    }

    #[test]
    fn enroll_request_carries_csrf_and_json_headers() {
        let request = client()
            .build_enroll_request(&EnrollParams {
                course_id: "42",
                csrf_token: "secret-token",
            })
            .unwrap();

        assert_eq!(
            request.headers().get("X-CSRFToken").unwrap(),
            "secret-token"
        );
        assert_eq!(
            request.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn enroll_request_body_is_an_empty_object() {
        let request = client()
            .build_enroll_request(&EnrollParams {
                course_id: "42",
                csrf_token: "tok",
            })
            .unwrap();

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"{}");
    }
}
