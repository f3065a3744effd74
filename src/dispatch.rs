//! The single request routine shared by every gateway operation

use crate::config::ResolvedConfig;
use crate::types::Envelope;
use crate::{PayriffError, Result};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use reqwest::Client;
use serde::Serialize;

/// Sends one request and decodes the response envelope
#[derive(Clone)]
pub(crate) struct Dispatcher {
    client: Client,
    base_url: String,
    authorization: HeaderValue,
}

impl Dispatcher {
    /// Build a dispatcher with its own HTTP client
    pub(crate) fn new(config: &ResolvedConfig) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| PayriffError::config(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(config, client)
    }

    /// Build a dispatcher on top of a caller-provided HTTP client
    pub(crate) fn with_client(config: &ResolvedConfig, client: Client) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&config.secret_key)
            .map_err(|_| PayriffError::config("Secret key is not a valid header value"))?;
        authorization.set_sensitive(true);

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            authorization,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Envelope> {
        self.send::<()>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    /// Encode `body`, call `base_url + path`, decode the envelope.
    ///
    /// The HTTP status is not interpreted: the gateway reports failures
    /// through the envelope's result code.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let body = match body {
            Some(body) => serde_json::to_vec(body).map_err(PayriffError::Encode)?,
            None => Vec::new(),
        };

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending payriff request");

        let response = self
            .client
            .request(method, url.as_str())
            .header(AUTHORIZATION, self.authorization.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(%status, %url, bytes = bytes.len(), "received payriff response");

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(%status, %url, error = %e, "payriff response is not an envelope");
            PayriffError::Decode(e)
        })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("authorization", &"<redacted>")
            .finish()
    }
}
