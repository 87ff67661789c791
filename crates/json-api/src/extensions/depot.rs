//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_state_is_an_internal_error() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>().map_err(|error| error.code);

        assert_eq!(result, Err(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn injected_state_is_returned() {
        let mut depot = Depot::new();

        depot.inject(String::from("otomax"));

        assert!(matches!(depot.obtain_or_500::<String>(), Ok(value) if value == "otomax"));
    }
}
