//! Cancellable delayed work

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::AbortHandle;

/// Handle to work scheduled with [`schedule`].
///
/// The work and the handle race for a single claim: once the work has
/// claimed, `cancel` is a no-op; once `cancel` has claimed, the work never runs.
#[derive(Debug)]
pub struct CancelHandle {
    claimed: Arc<AtomicBool>,
    task: AbortHandle,
}

impl CancelHandle {
    /// Cancel the work if it has not started.
    ///
    /// Returns `true` if this call prevented the work from running.
    /// Idempotent, and safe to call after the work has fired.
    pub fn cancel(&self) -> bool {
        if claim(&self.claimed) {
            self.task.abort();
            true
        } else {
            false
        }
    }

    /// Whether the work has started or been cancelled
    pub fn is_settled(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}

/// Run `work` on the runtime after `delay`, unless cancelled first
pub fn schedule<F>(delay: Duration, work: F) -> CancelHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    let claimed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&claimed);

    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if claim(&flag) {
            work.await;
        }
    });

    CancelHandle {
        claimed,
        task: task.abort_handle(),
    }
}

fn claim(flag: &AtomicBool) -> bool {
    flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}
