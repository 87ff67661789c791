//! Duitku HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use tracing::info;

use crate::integrations::{
    duitku::{
        errors::PaymentError,
        models::{CreatePayment, InquiryRequest, InquiryResponse, PaymentReference},
    },
    md5_signature,
};

pub const DEFAULT_DUITKU_URL: &str = "https://sandbox.duitku.com";

const INQUIRY_PATH: &str = "/webapi/api/merchant/v2/inquiry";
const SUCCESS_CODE: &str = "00";

#[derive(Debug, Clone)]
pub struct DuitkuConfig {
    pub base_url: String,
    pub merchant_code: String,
    pub api_key: String,
    pub callback_url: Option<String>,
    pub timeout: Duration,
}

/// Opens payments with an aggregator.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_transaction(
        &self,
        payment: CreatePayment,
    ) -> Result<PaymentReference, PaymentError>;
}

#[derive(Debug, Clone)]
pub struct DuitkuClient {
    config: DuitkuConfig,
    http: Client,
}

impl DuitkuClient {
    #[must_use]
    pub fn new(config: DuitkuConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Signature for an inquiry: `md5(merchant_code + order_id + amount + api_key)`.
    #[must_use]
    pub fn inquiry_signature(&self, order_id: &str, amount: i64) -> String {
        md5_signature(&[
            &self.config.merchant_code,
            order_id,
            &amount.to_string(),
            &self.config.api_key,
        ])
    }

    /// Check a callback signature: `md5(merchant_code + amount + order_id + api_key)`.
    #[must_use]
    pub fn verify_callback_signature(&self, amount: i64, order_id: &str, signature: &str) -> bool {
        let expected = md5_signature(&[
            &self.config.merchant_code,
            &amount.to_string(),
            order_id,
            &self.config.api_key,
        ]);

        expected.eq_ignore_ascii_case(signature)
    }
}

#[async_trait]
impl PaymentGateway for DuitkuClient {
    #[tracing::instrument(name = "duitku.inquiry", skip(self, payment), fields(order_id = %payment.order_id), err)]
    async fn create_transaction(
        &self,
        payment: CreatePayment,
    ) -> Result<PaymentReference, PaymentError> {
        let request = InquiryRequest {
            merchant_code: &self.config.merchant_code,
            payment_amount: payment.amount,
            merchant_order_id: &payment.order_id,
            product_details: &payment.product_details,
            payment_method: &payment.method,
            signature: self.inquiry_signature(&payment.order_id, payment.amount),
            callback_url: self.config.callback_url.as_deref(),
        };

        let url = format!("{}{INQUIRY_PATH}", self.config.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(PaymentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let reference = decode_inquiry(&body)?;

        info!(reference = %reference.reference, "opened duitku payment");

        Ok(reference)
    }
}

/// Decode an inquiry response body.
pub fn decode_inquiry(body: &[u8]) -> Result<PaymentReference, PaymentError> {
    let response: InquiryResponse = serde_json::from_slice(body)?;

    if response.status_code != SUCCESS_CODE {
        return Err(PaymentError::Rejected {
            code: response.status_code,
            message: response.status_message,
        });
    }

    Ok(PaymentReference {
        reference: response.reference,
        payment_url: non_empty(response.payment_url),
        va_number: non_empty(response.va_number),
        qr_string: non_empty(response.qr_string),
    })
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn client() -> DuitkuClient {
        DuitkuClient::new(DuitkuConfig {
            base_url: DEFAULT_DUITKU_URL.to_string(),
            merchant_code: "D0001".to_string(),
            api_key: "key".to_string(),
            callback_url: None,
            timeout: Duration::from_secs(1),
        })
    }

    #[test]
    fn inquiry_signature_orders_order_id_before_amount() {
        assert_eq!(
            client().inquiry_signature("TRX1", 50_000),
            md5_signature(&["D0001TRX150000key"])
        );
    }

    #[test]
    fn callback_signature_orders_amount_before_order_id() {
        let client = client();
        let signature = md5_signature(&["D000150000TRX1key"]);

        assert!(client.verify_callback_signature(50_000, "TRX1", &signature));
        assert!(client.verify_callback_signature(50_000, "TRX1", &signature.to_uppercase()));
        assert!(!client.verify_callback_signature(50_001, "TRX1", &signature));
    }

    #[test]
    fn decodes_successful_inquiry() -> TestResult {
        let body = json!({
            "merchantCode": "D0001",
            "reference": "D0001ABC",
            "paymentUrl": "https://pay.example/D0001ABC",
            "vaNumber": "7007014001234",
            "amount": "50000",
            "statusCode": "00",
            "statusMessage": "SUCCESS"
        });

        let reference = decode_inquiry(&serde_json::to_vec(&body)?)?;

        assert_eq!(reference.reference, "D0001ABC");
        assert_eq!(reference.va_number.as_deref(), Some("7007014001234"));
        assert_eq!(reference.qr_string, None);

        Ok(())
    }

    #[test]
    fn non_success_status_code_is_rejected() -> TestResult {
        let body = json!({ "statusCode": "01", "statusMessage": "Payment channel not available" });

        let result = decode_inquiry(&serde_json::to_vec(&body)?);

        assert!(
            matches!(&result, Err(PaymentError::Rejected { code, .. }) if code == "01"),
            "expected rejection, got {result:?}"
        );

        Ok(())
    }
}
