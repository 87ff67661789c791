//! Sync Repositories

pub(crate) mod products;
pub(crate) mod provider_products;
