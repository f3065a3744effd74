//! Payriff gateway client

use crate::config::{Config, ResolvedConfig};
use crate::dispatch::Dispatcher;
use crate::types::*;
use crate::Result;
use serde_json::Value;

/// Client for the Payriff payment gateway
///
/// Holds no per-call state; clone it freely or share it between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    config: ResolvedConfig,
    dispatcher: Dispatcher,
}

impl Client {
    /// Create a new client, resolving unset config fields to their defaults
    pub fn new(config: Config) -> Result<Self> {
        let config = config.resolve()?;
        let dispatcher = Dispatcher::new(&config)?;
        Ok(Self { config, dispatcher })
    }

    /// Create a new client on top of an existing `reqwest::Client`
    ///
    /// The config's timeout is ignored; configure it on `http_client` instead.
    pub fn with_http_client(config: Config, http_client: reqwest::Client) -> Result<Self> {
        let config = config.resolve()?;
        let dispatcher = Dispatcher::with_client(&config, http_client)?;
        Ok(Self { config, dispatcher })
    }

    /// Create a client configured from `PAYRIFF_SECRET_KEY` and `PAYRIFF_CALLBACK_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    /// The resolved configuration
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    /// Create a payment order and get the hosted payment page URL
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<ApiResponse<OrderPayload>> {
        let request = request.fill_defaults(&self.config);
        self.dispatcher
            .post("/orders", &request)
            .await?
            .decode_payload()
    }

    /// Fetch the current state of an order
    ///
    /// The identifier is not validated; an empty one requests `/orders/`.
    pub async fn get_order_info(&self, order_id: &str) -> Result<ApiResponse<OrderInfo>> {
        self.dispatcher
            .get(&format!("/orders/{}", order_id))
            .await?
            .decode_payload()
    }

    /// Refund an order fully or partially
    ///
    /// The refund payload is returned as-is.
    pub async fn refund(&self, request: RefundRequest) -> Result<ApiResponse<Value>> {
        self.dispatcher.post("/refund", &request).await
    }

    /// Capture a pre-authorized order
    ///
    /// Only transport and decoding failures are reported; check the order
    /// with [`Client::get_order_info`] to learn the gateway's verdict.
    pub async fn complete(&self, request: CompleteRequest) -> Result<()> {
        self.dispatcher.post("/complete", &request).await?;
        Ok(())
    }

    /// Charge a card saved by an earlier order
    pub async fn auto_pay(&self, request: AutoPayRequest) -> Result<ApiResponse<OrderInfo>> {
        let request = request.fill_defaults(&self.config);
        self.dispatcher
            .post("/autoPay", &request)
            .await?
            .decode_payload()
    }

    /// Check whether a result code reports success
    pub fn is_successful(&self, code: &ResultCode) -> bool {
        is_successful(code)
    }
}
