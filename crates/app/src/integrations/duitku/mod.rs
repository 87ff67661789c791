//! Duitku payment aggregator.

mod client;
mod errors;
mod models;

pub use client::*;
pub use errors::PaymentError;
pub use models::*;
