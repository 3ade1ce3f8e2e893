//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's
//! fetch API. Requests are same-origin and relative, so the session cookie
//! travels with them.

use gloo_net::http::Request;

use crate::error::Result;
use crate::interface::{EnrollApi, HttpClient};
use crate::model::dtos::EnrollParams;
use crate::model::structs::{EnrollReply, EnrollmentResponse};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient;

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl EnrollApi for WasmClient {
    async fn enroll(&self, params: EnrollParams<'_>) -> Result<EnrollReply> {
        let url = format!("/courses/enroll/{}/", params.course_id);

        let resp = Request::post(&url)
            .header("X-CSRFToken", params.csrf_token)
            .json(&serde_json::json!({}))?
            .send()
            .await?;

        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        log::debug!("enroll {url} -> {status}");

        Ok(EnrollReply {
            ok,
            status,
            body: EnrollmentResponse::from_body(&text),
        })
    }
}
