//! Digiflazz HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::integrations::{
    digiflazz::{
        errors::ProviderError,
        models::{
            PriceListRequest, ProviderFailure, RawProviderSku, TopUpPayload, TopUpRequest,
            TopUpResponse,
        },
    },
    md5_signature, request_budget,
};

/// Slug the `providers` table uses for Digiflazz.
pub const DIGIFLAZZ_SLUG: &str = "digiflazz";

pub const DEFAULT_DIGIFLAZZ_URL: &str = "https://api.digiflazz.com";

const PRICE_LIST_PATH: &str = "/v1/price-list";
const TRANSACTION_PATH: &str = "/v1/transaction";
const PRICE_LIST_SIGN_SUFFIX: &str = "pricelist";

/// Connection settings for the Digiflazz API.
#[derive(Debug, Clone)]
pub struct DigiflazzConfig {
    /// API base address, e.g. `"https://api.digiflazz.com"`.
    pub base_url: String,

    /// Account username.
    pub username: String,

    /// Shared API key used for request signatures.
    pub api_key: String,

    /// Upper bound for a single request.
    pub timeout: Duration,
}

/// A catalog source the sync pipeline can pull from.
#[automock]
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Slug matching the `providers` row this client feeds.
    fn slug(&self) -> &'static str;

    /// Fetch the full price list in one request. Never retries.
    async fn fetch_catalog(
        &self,
        deadline: Option<Instant>,
    ) -> Result<Vec<RawProviderSku>, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct DigiflazzClient {
    config: DigiflazzConfig,
    http: Client,
}

impl DigiflazzClient {
    #[must_use]
    pub fn new(config: DigiflazzConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Signature for the price-list call.
    #[must_use]
    pub fn price_list_signature(&self) -> String {
        md5_signature(&[
            &self.config.username,
            &self.config.api_key,
            PRICE_LIST_SIGN_SUFFIX,
        ])
    }

    /// Signature for a transactional call identified by `ref_id`.
    #[must_use]
    pub fn transaction_signature(&self, ref_id: &str) -> String {
        md5_signature(&[&self.config.username, &self.config.api_key, ref_id])
    }

    /// Place a top-up order with the provider.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a rejected order or an
    /// undecodable response.
    pub async fn top_up(
        &self,
        request: &TopUpRequest,
        deadline: Option<Instant>,
    ) -> Result<TopUpResponse, ProviderError> {
        let payload = TopUpPayload {
            username: &self.config.username,
            buyer_sku_code: &request.sku_code,
            customer_no: &request.customer_no,
            ref_id: &request.ref_id,
            sign: self.transaction_signature(&request.ref_id),
            callback_url: request.callback_url.as_deref(),
        };

        info!(sku = %request.sku_code, ref_id = %request.ref_id, "placing digiflazz top-up");

        let body = self.post(TRANSACTION_PATH, &payload, deadline).await?;

        decode_top_up(&body)
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        payload: &T,
        deadline: Option<Instant>,
    ) -> Result<Vec<u8>, ProviderError> {
        let budget =
            request_budget(self.config.timeout, deadline).ok_or(ProviderError::DeadlineExceeded)?;

        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .timeout(budget)
            .json(payload)
            .send()
            .await
            .map_err(|error| deadline_or_http(error, deadline))?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|error| deadline_or_http(error, deadline))?;

        debug!(path, bytes = bytes.len(), "digiflazz response received");

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ProviderClient for DigiflazzClient {
    fn slug(&self) -> &'static str {
        DIGIFLAZZ_SLUG
    }

    #[tracing::instrument(name = "digiflazz.price_list", skip(self), err)]
    async fn fetch_catalog(
        &self,
        deadline: Option<Instant>,
    ) -> Result<Vec<RawProviderSku>, ProviderError> {
        let payload = PriceListRequest {
            cmd: "prepaid",
            username: &self.config.username,
            sign: self.price_list_signature(),
        };

        let body = self.post(PRICE_LIST_PATH, &payload, deadline).await?;
        let skus = decode_price_list(&body)?;

        info!(count = skus.len(), "fetched digiflazz price list");

        Ok(skus)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Value,
}

/// Decode a price-list body: `{"data": [..]}` on success, `{"data": {"rc", "message"}}`
/// when the provider refuses the call.
pub fn decode_price_list(body: &[u8]) -> Result<Vec<RawProviderSku>, ProviderError> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if envelope.data.is_array() {
        return Ok(serde_json::from_value(envelope.data)?);
    }

    Err(rejection(envelope.data)?)
}

/// Decode a top-up body. Bodies without a `status` are error envelopes.
pub fn decode_top_up(body: &[u8]) -> Result<TopUpResponse, ProviderError> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if envelope.data.get("status").is_some() {
        return Ok(serde_json::from_value(envelope.data)?);
    }

    Err(rejection(envelope.data)?)
}

fn rejection(data: Value) -> Result<ProviderError, serde_json::Error> {
    let failure: ProviderFailure = serde_json::from_value(data)?;

    Ok(ProviderError::Rejected {
        rc: failure.rc,
        message: failure.message,
    })
}

fn deadline_or_http(error: reqwest::Error, deadline: Option<Instant>) -> ProviderError {
    let deadline_passed = deadline.is_some_and(|deadline| Instant::now() >= deadline);

    if error.is_timeout() && deadline_passed {
        return ProviderError::DeadlineExceeded;
    }

    ProviderError::Http(error)
}
