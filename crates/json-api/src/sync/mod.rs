//! Catalog sync endpoint

mod errors;
mod handlers;

pub(crate) use handlers::*;
