use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::AbortHandle;

#[derive(Debug, Default)]
struct TimerState {
    generation: u64,
    pending: Option<AbortHandle>,
}

/// A single cancellable delayed callback.
///
/// Scheduling replaces any pending callback, so at most one is ever armed.
/// Every schedule or cancel bumps a generation; a callback only runs while
/// its generation is current, checked under the same lock.
#[derive(Debug, Default)]
pub struct NoticeTimer {
    state: Arc<Mutex<TimerState>>,
}

impl NoticeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `callback` after `delay` on the current tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = lock(&self.state);
        state.generation += 1;
        let generation = state.generation;

        let shared = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire_if_current(&shared, generation, callback);
        });

        if let Some(previous) = state.pending.replace(handle.abort_handle()) {
            previous.abort();
        }
    }

    pub fn cancel(&self) {
        let mut state = lock(&self.state);
        state.generation += 1;
        if let Some(previous) = state.pending.take() {
            previous.abort();
            tracing::debug!("Pending notice clear cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.state)
            .pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

fn lock(state: &Mutex<TimerState>) -> MutexGuard<'_, TimerState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `callback` unless a later schedule or cancel superseded
/// `generation`. Returns whether it ran.
fn fire_if_current<F: FnOnce()>(state: &Mutex<TimerState>, generation: u64, callback: F) -> bool {
    let mut state = lock(state);
    if state.generation != generation {
        tracing::debug!("Stale notice clear skipped");
        return false;
    }
    state.pending = None;
    callback();
    true
}

impl Drop for NoticeTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
