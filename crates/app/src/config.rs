//! Settings shared by the CLI and the JSON API.

use std::{num::NonZeroUsize, time::Duration};

use clap::Args;

use crate::{
    domain::sync::{mapper::PricingPolicy, models::SyncOptions},
    ids::DEPOSIT_ORDER_ID_PREFIX,
    integrations::{
        digiflazz::{DEFAULT_DIGIFLAZZ_URL, DigiflazzConfig},
        duitku::{DEFAULT_DUITKU_URL, DuitkuConfig},
    },
};

#[derive(Debug, Clone, Args)]
pub struct DigiflazzArgs {
    /// Digiflazz API base URL
    #[arg(
        id = "digiflazz_url",
        long = "digiflazz-url",
        env = "DIGIFLAZZ_URL",
        default_value = DEFAULT_DIGIFLAZZ_URL
    )]
    pub url: String,

    /// Digiflazz account username
    #[arg(id = "digiflazz_username", long = "digiflazz-username", env = "DIGIFLAZZ_USERNAME")]
    pub username: String,

    /// Digiflazz API key
    #[arg(
        id = "digiflazz_api_key",
        long = "digiflazz-api-key",
        env = "DIGIFLAZZ_API_KEY",
        hide_env_values = true
    )]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[arg(
        id = "digiflazz_timeout_seconds",
        long = "digiflazz-timeout-seconds",
        env = "DIGIFLAZZ_TIMEOUT_SECONDS",
        default_value_t = 30
    )]
    pub timeout_seconds: u64,
}

impl DigiflazzArgs {
    #[must_use]
    pub fn to_config(&self) -> DigiflazzConfig {
        DigiflazzConfig {
            base_url: self.url.clone(),
            username: self.username.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct DuitkuArgs {
    /// Duitku API base URL
    #[arg(
        id = "duitku_url",
        long = "duitku-url",
        env = "DUITKU_URL",
        default_value = DEFAULT_DUITKU_URL
    )]
    pub url: String,

    /// Duitku merchant code
    #[arg(id = "duitku_merchant_code", long = "duitku-merchant-code", env = "DUITKU_MERCHANT_CODE")]
    pub merchant_code: String,

    /// Duitku API key
    #[arg(
        id = "duitku_api_key",
        long = "duitku-api-key",
        env = "DUITKU_API_KEY",
        hide_env_values = true
    )]
    pub api_key: String,

    /// URL Duitku notifies when a payment settles
    #[arg(id = "duitku_callback_url", long = "duitku-callback-url", env = "DUITKU_CALLBACK_URL")]
    pub callback_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        id = "duitku_timeout_seconds",
        long = "duitku-timeout-seconds",
        env = "DUITKU_TIMEOUT_SECONDS",
        default_value_t = 30
    )]
    pub timeout_seconds: u64,
}

impl DuitkuArgs {
    #[must_use]
    pub fn to_config(&self) -> DuitkuConfig {
        DuitkuConfig {
            base_url: self.url.clone(),
            merchant_code: self.merchant_code.clone(),
            api_key: self.api_key.clone(),
            callback_url: self.callback_url.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PricingArgs {
    /// Markup over provider cost, in basis points
    #[arg(long, env = "PRICE_MARKUP_BASIS_POINTS", default_value_t = 1_500)]
    pub markup_basis_points: u32,

    /// Prefix for generated deposit order ids
    #[arg(
        long,
        env = "DEPOSIT_ORDER_ID_PREFIX",
        default_value = DEPOSIT_ORDER_ID_PREFIX
    )]
    pub deposit_order_id_prefix: String,
}

impl PricingArgs {
    #[must_use]
    pub fn policy(&self) -> PricingPolicy {
        PricingPolicy {
            markup_basis_points: self.markup_basis_points,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// SKUs resolved and reconciled at once
    #[arg(
        id = "sync_concurrency",
        long = "sync-concurrency",
        env = "SYNC_CONCURRENCY",
        default_value_t = NonZeroUsize::MIN
    )]
    pub concurrency: NonZeroUsize,

    /// Bound on one sync run in seconds; 0 disables it
    #[arg(
        id = "sync_timeout_seconds",
        long = "sync-timeout-seconds",
        env = "SYNC_TIMEOUT_SECONDS",
        default_value_t = 300
    )]
    pub timeout_seconds: u64,
}

impl SyncArgs {
    #[must_use]
    pub fn options(&self) -> SyncOptions {
        SyncOptions {
            concurrency: self.concurrency,
            timeout: (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds)),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        pricing: PricingArgs,

        #[command(flatten)]
        sync: SyncArgs,
    }

    #[test]
    fn defaults_match_documented_values() {
        let cli = TestCli::parse_from(["test"]);

        assert_eq!(cli.pricing.policy(), PricingPolicy::default());
        assert_eq!(cli.pricing.deposit_order_id_prefix, "DEP");
        assert_eq!(cli.sync.options().concurrency.get(), 1);
        assert_eq!(cli.sync.options().timeout, Some(Duration::from_secs(300)));
    }

    #[test]
    fn zero_timeout_disables_the_bound() {
        let cli = TestCli::parse_from(["test", "--sync-timeout-seconds", "0"]);

        assert_eq!(cli.sync.options().timeout, None);
    }

    #[test]
    fn zero_concurrency_is_refused() {
        let result = TestCli::try_parse_from(["test", "--sync-concurrency", "0"]);

        assert!(result.is_err(), "concurrency must be at least one");
    }
}
