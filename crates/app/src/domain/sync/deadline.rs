//! Run deadlines.

use std::future::Future;

use tokio::time::{Instant, timeout_at};

/// Whether the deadline, if any, has been reached.
pub(crate) fn passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

/// Drive `future` until it completes or the deadline is reached, whichever
/// comes first. `None` means the future was dropped unfinished.
pub(crate) async fn within<F: Future>(deadline: Option<Instant>, future: F) -> Option<F::Output> {
    match deadline {
        Some(deadline) => timeout_at(deadline, future).await.ok(),
        None => Some(future.await),
    }
}
