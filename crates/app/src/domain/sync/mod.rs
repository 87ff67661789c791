//! Catalog synchronization: fetch a provider's price list, map each SKU to a
//! priced candidate, resolve its category and reconcile it into storage.

pub mod catalog;
mod deadline;
pub mod errors;
pub mod mapper;
pub mod models;
pub mod reconcile;
pub mod records;
mod repositories;
pub mod service;

pub use errors::{SyncError, SyncItemError};
pub use service::*;
