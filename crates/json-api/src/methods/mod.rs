//! Payment methods

mod errors;
mod handlers;

pub(crate) use handlers::*;
