//! Single-fire delayed callbacks
//!
//! A scheduled callback runs once on the tokio runtime after its delay.
//! The returned [`TimerHandle`] cancels it; dropping the handle does not.

use std::time::Duration;
use tokio::task::AbortHandle;

/// Handle for cancelling a scheduled callback; clones refer to the same timer
#[derive(Debug, Clone)]
pub struct TimerHandle {
	handle: AbortHandle,
}

impl TimerHandle {
	/// Cancel the callback if it has not run yet.
	///
	/// Cancelling a timer that already fired is a no-op.
	pub fn cancel(&self) {
		self.handle.abort();
	}

	/// Whether the callback ran or was cancelled
	pub fn is_finished(&self) -> bool {
		self.handle.is_finished()
	}
}

/// Run `callback` once after `delay`.
///
/// Must be called from within a tokio runtime.
///
/// # Examples
///
/// ```
/// use folio_pages::timer;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// let handle = timer::schedule(Duration::from_millis(10), move || {
///     flag.store(true, Ordering::SeqCst);
/// });
///
/// handle.cancel();
/// tokio::time::sleep(Duration::from_millis(20)).await;
/// assert!(!fired.load(Ordering::SeqCst));
/// # }
/// ```
pub fn schedule<F>(delay: Duration, callback: F) -> TimerHandle
where
	F: FnOnce() + Send + 'static,
{
	let handle = tokio::spawn(async move {
		tokio::time::sleep(delay).await;
		callback();
	})
	.abort_handle();

	TimerHandle { handle }
}
