//! Upstream integrations: the Digiflazz distributor and the Duitku payment
//! aggregator.

use std::time::Duration;

use md5::{Digest, Md5};
use tokio::time::Instant;

pub mod digiflazz;
pub mod duitku;

/// Lowercase hex MD5 over the concatenation of `parts`.
///
/// Both upstreams sign requests this way.
pub(crate) fn md5_signature(parts: &[&str]) -> String {
    let mut hasher = Md5::new();

    for part in parts {
        hasher.update(part.as_bytes());
    }

    format!("{:x}", hasher.finalize())
}

/// Time budget for one upstream call: the client timeout, shortened to what is
/// left before `deadline`. `None` once the deadline has passed.
pub(crate) fn request_budget(timeout: Duration, deadline: Option<Instant>) -> Option<Duration> {
    let Some(deadline) = deadline else {
        return Some(timeout);
    };

    let remaining = deadline.checked_duration_since(Instant::now())?;

    if remaining.is_zero() {
        return None;
    }

    Some(remaining.min(timeout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_signature_matches_known_digest() {
        assert_eq!(md5_signature(&[]), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            md5_signature(&["user", "key", "pricelist"]),
            md5_signature(&["userkeypricelist"]),
        );
    }

    #[test]
    fn request_budget_without_deadline_is_the_timeout() {
        let budget = request_budget(Duration::from_secs(30), None);

        assert_eq!(budget, Some(Duration::from_secs(30)));
    }

    #[test]
    fn request_budget_is_capped_by_deadline() {
        let deadline = Instant::now() + Duration::from_secs(5);

        let budget = request_budget(Duration::from_secs(30), Some(deadline));

        assert!(budget.is_some_and(|budget| budget <= Duration::from_secs(5)));
    }

    #[test]
    fn request_budget_is_none_after_deadline() {
        let deadline = Instant::now()
            .checked_sub(Duration::from_millis(1))
            .unwrap_or_else(Instant::now);

        assert_eq!(request_budget(Duration::from_secs(30), Some(deadline)), None);
    }
}
