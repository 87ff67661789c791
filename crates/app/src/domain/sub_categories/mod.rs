//! Sub-categories

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::SubCategoriesServiceError;
pub use service::*;
