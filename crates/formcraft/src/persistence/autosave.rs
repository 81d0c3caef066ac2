//! Debounced autosave
//!
//! [`Autosave::schedule`] arms a timer; when the quiet window passes without
//! another call, the flush runs. A new call before that cancels the armed
//! timer, so a burst of changes produces a single write. At most one timer is
//! armed at a time. A flush that already started is never interrupted.

use std::future::Future;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

const ARMED: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

struct PendingSave {
    handle: JoinHandle<()>,
    state: Arc<AtomicU8>,
}

enum Disarmed {
    Cancelled,
    /// The timer went off first; the save may still be running
    Fired(JoinHandle<()>),
}

impl PendingSave {
    /// Cancel unless the timer already fired
    fn disarm(self) -> Disarmed {
        let cancelled = self
            .state
            .compare_exchange(ARMED, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if cancelled {
            self.handle.abort();
            Disarmed::Cancelled
        } else {
            Disarmed::Fired(self.handle)
        }
    }

    fn is_armed(&self) -> bool {
        self.state.load(Ordering::Acquire) == ARMED
    }
}

#[derive(Default)]
struct Timers {
    armed: Option<PendingSave>,
    /// Timers that fired and may not have finished saving
    fired: Vec<JoinHandle<()>>,
}

/// Cancellable, re-armable delayed save
pub struct Autosave {
    quiet_window: Duration,
    timers: Mutex<Timers>,
}

impl Autosave {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            timers: Mutex::new(Timers::default()),
        }
    }

    pub fn quiet_window(&self) -> Duration {
        self.quiet_window
    }

    /// Arm the timer, replacing any timer that has not fired yet.
    ///
    /// `flush` is only built once the timer fires, so it should read whatever
    /// state it saves at that point rather than capture it now.
    pub async fn schedule<F, Fut>(&self, flush: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut timers = self.timers.lock().await;
        timers.fired.retain(|handle| !handle.is_finished());

        if let Some(previous) = timers.armed.take() {
            match previous.disarm() {
                Disarmed::Cancelled => tracing::trace!("Autosave timer re-armed"),
                Disarmed::Fired(handle) => timers.fired.push(handle),
            }
        }

        let state = Arc::new(AtomicU8::new(ARMED));
        let task_state = Arc::clone(&state);
        let quiet_window = self.quiet_window;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_window).await;
            if task_state
                .compare_exchange(ARMED, FIRED, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                flush().await;
            }
        });

        timers.armed = Some(PendingSave { handle, state });
    }

    /// Disarm the timer and wait for any save that already started.
    ///
    /// Returns `true` if a save was waiting, in which case it never ran.
    pub async fn cancel(&self) -> bool {
        let (cancelled, running) = {
            let mut timers = self.timers.lock().await;
            let mut running = std::mem::take(&mut timers.fired);
            let cancelled = match timers.armed.take().map(PendingSave::disarm) {
                Some(Disarmed::Cancelled) => true,
                Some(Disarmed::Fired(handle)) => {
                    running.push(handle);
                    false
                }
                None => false,
            };
            (cancelled, running)
        };

        for handle in running {
            if let Err(e) = handle.await {
                tracing::warn!("Autosave task failed: {}", e);
            }
        }

        cancelled
    }

    /// Whether a save is armed and has not fired yet
    pub async fn is_pending(&self) -> bool {
        self.timers
            .lock()
            .await
            .armed
            .as_ref()
            .map_or(false, PendingSave::is_armed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter_flush(counter: &Arc<AtomicUsize>) -> impl FnOnce() -> std::future::Ready<()> + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_quiet_window() {
        let autosave = Autosave::new(Duration::from_secs(1));
        let counter = Arc::new(AtomicUsize::new(0));

        autosave.schedule(counter_flush(&counter)).await;
        assert!(autosave.is_pending().await);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!autosave.is_pending().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_one_flush() {
        let autosave = Autosave::new(Duration::from_secs(1));
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            autosave.schedule(counter_flush(&counter)).await;
            tokio::time::sleep(Duration::from_millis(400)).await;
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let autosave = Autosave::new(Duration::from_secs(1));
        let counter = Arc::new(AtomicUsize::new(0));

        autosave.schedule(counter_flush(&counter)).await;
        assert!(autosave.cancel().await);
        assert!(!autosave.cancel().await);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_waits_for_running_save() {
        let autosave = Autosave::new(Duration::from_secs(1));
        let counter = Arc::new(AtomicUsize::new(0));

        let task_counter = Arc::clone(&counter);
        autosave
            .schedule(move || async move {
                tokio::time::sleep(Duration::from_millis(500)).await;
                task_counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        // fired at 1s, still writing until 1.5s
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(!autosave.is_pending().await);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        assert!(!autosave.cancel().await);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_keeps_running_save_joinable() {
        let autosave = Autosave::new(Duration::from_secs(1));
        let counter = Arc::new(AtomicUsize::new(0));

        let task_counter = Arc::clone(&counter);
        autosave
            .schedule(move || async move {
                tokio::time::sleep(Duration::from_millis(500)).await;
                task_counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        tokio::time::sleep(Duration::from_millis(1100)).await;

        autosave.schedule(counter_flush(&counter)).await;
        assert!(autosave.cancel().await);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
