//! Single-timer debouncer
//!
//! Holds at most one armed timer. Arming a new one aborts the previous
//! timer; an action whose timer already fired is detached and runs to
//! completion.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::error;

#[derive(Debug)]
struct Pending {
  handle: JoinHandle<()>,
  fired: Arc<AtomicBool>,
}

#[derive(Debug)]
pub struct Debouncer {
  delay: Duration,
  pending: Option<Pending>,
}

impl Debouncer {
  pub fn new(delay: Duration) -> Self {
    Self { delay, pending: None }
  }

  /// Run `action` once `delay` has passed without another call to `schedule` or `cancel`
  ///
  /// Must be called from within a Tokio runtime.
  pub fn schedule<F>(&mut self, action: F)
  where
    F: Future<Output = ()> + Send + 'static,
  {
    self.cancel();

    let delay = self.delay;
    let fired = Arc::new(AtomicBool::new(false));
    let timer_fired = Arc::clone(&fired);

    // Aborting the timer after it fired only drops the join handle of the
    // spawned action, which leaves the action running
    let handle = tokio::spawn(async move {
      sleep(delay).await;
      timer_fired.store(true, Ordering::SeqCst);
      if let Err(e) = tokio::spawn(action).await {
        if e.is_panic() {
          error!(error = %e, "debounced action panicked");
        }
      }
    });

    self.pending = Some(Pending { handle, fired });
  }

  /// Disarm the pending timer, if any
  pub fn cancel(&mut self) {
    if let Some(pending) = self.pending.take() {
      pending.handle.abort();
    }
  }

  /// Whether a timer is armed and has not fired yet
  pub fn is_armed(&self) -> bool {
    self
      .pending
      .as_ref()
      .is_some_and(|p| !p.fired.load(Ordering::SeqCst) && !p.handle.is_finished())
  }

  /// Wait for the pending timer to fire and its action to finish
  pub async fn wait(&mut self) {
    if let Some(pending) = self.pending.take() {
      let _ = pending.handle.await;
    }
  }
}

impl Drop for Debouncer {
  fn drop(&mut self) {
    self.cancel();
  }
}
