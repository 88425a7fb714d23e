//! Thin client for the remote content API
//!
//! One network round trip per call: no retries, no timeout, no caching.
//! Any non-2xx status or transport failure comes back as [`Error`].

use crate::config::ApiConfig;
use crate::prelude::*;
use consultancy_core::content::{Envelope, ErrorBody};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Options for [`ContentClient::get`]
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub params: Vec<(String, String)>,
    /// Send and keep cookies for this request
    pub with_credentials: bool,
}

impl GetOptions {
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_credentials(mut self) -> Self {
        self.with_credentials = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    base_url: String,
    client: reqwest::Client,
    credentialed: reqwest::Client,
}

impl ContentClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;
        let credentialed = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            credentialed,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: GetOptions,
    ) -> Result<Envelope<T>, Error> {
        let client = if options.with_credentials {
            &self.credentialed
        } else {
            &self.client
        };

        let response = client
            .get(self.url(path))
            .query(&options.params)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode(response).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, Error> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| Error::Decode(e.to_string()))
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<Envelope<T>, Error> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(api_error(status, &text));
    }

    serde_json::from_str(&text).map_err(|e| Error::Decode(e.to_string()))
}

fn api_error(status: reqwest::StatusCode, body: &str) -> Error {
    let body: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    Error::Api {
        status: status.as_u16(),
        message: body.message,
    }
}
