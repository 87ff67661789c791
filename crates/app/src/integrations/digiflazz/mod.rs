//! Digiflazz distributor client.

mod client;
mod errors;
mod models;

pub use client::*;
pub use errors::ProviderError;
pub use models::*;
