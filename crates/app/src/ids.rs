//! Order Identifiers

use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;

/// Prefix used when none is configured.
pub const DEFAULT_ORDER_ID_PREFIX: &str = "TRX";

/// Prefix for deposit order ids.
pub const DEPOSIT_ORDER_ID_PREFIX: &str = "DEP";

/// Generates merchant order ids of the form `{prefix}{ticks}`.
///
/// `ticks` starts from the wall clock in nanoseconds and is bumped past the
/// last issued value whenever the clock has not advanced, so ids are strictly
/// increasing for the lifetime of the generator even across clock steps.
#[derive(Debug)]
pub struct OrderIdGenerator {
    prefix: String,
    last: AtomicU64,
}

impl OrderIdGenerator {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();

        Self {
            prefix: if prefix.is_empty() {
                DEFAULT_ORDER_ID_PREFIX.to_string()
            } else {
                prefix
            },
            last: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Issue the next order id.
    pub fn next_id(&self) -> String {
        format!("{}{}", self.prefix, self.next_tick(clock_nanos()))
    }

    fn next_tick(&self, now: u64) -> u64 {
        let mut previous = self.last.load(Ordering::Relaxed);

        loop {
            let candidate = now.max(previous.saturating_add(1));

            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_ID_PREFIX)
    }
}

fn clock_nanos() -> u64 {
    u64::try_from(Timestamp::now().as_nanosecond()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use super::*;

    #[test]
    fn ids_carry_the_configured_prefix() {
        let ids = OrderIdGenerator::new("DEP");

        assert!(ids.next_id().starts_with("DEP"));
    }

    #[test]
    fn empty_prefix_falls_back_to_default() {
        let ids = OrderIdGenerator::new("");

        assert_eq!(ids.prefix(), DEFAULT_ORDER_ID_PREFIX);
        assert!(ids.next_id().starts_with(DEFAULT_ORDER_ID_PREFIX));
    }

    #[test]
    fn stalled_clock_still_yields_increasing_ticks() {
        let ids = OrderIdGenerator::default();

        let first = ids.next_tick(1_000);
        let second = ids.next_tick(1_000);
        let third = ids.next_tick(999);

        assert_eq!(first, 1_000);
        assert_eq!(second, 1_001);
        assert_eq!(third, 1_002, "clock stepping backwards must not repeat ids");
    }

    #[test]
    fn concurrent_callers_never_share_an_id() {
        let ids = Arc::new(OrderIdGenerator::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);

                thread::spawn(move || (0..500).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();

        for handle in handles {
            for id in handle.join().unwrap_or_default() {
                assert!(seen.insert(id), "duplicate order id issued");
            }
        }

        assert_eq!(seen.len(), 8 * 500);
    }
}
