use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use shared::protocol::BouquetSignal;
use tokio::{runtime::Handle, sync::broadcast, task::JoinHandle};
use tracing::{debug, warn};

/// Single-slot transient notice with cancel-and-replace timing.
///
/// At most one hide task is pending. Re-triggering aborts it and restarts the
/// window, and a hide task only acts if no newer trigger happened meanwhile.
pub struct NoticeTimer {
    duration: Duration,
    pending: Option<JoinHandle<()>>,
    generation: Arc<AtomicU64>,
    visible: Arc<AtomicBool>,
    events: broadcast::Sender<BouquetSignal>,
}

impl NoticeTimer {
    pub fn new(duration: Duration, events: broadcast::Sender<BouquetSignal>) -> Self {
        Self {
            duration,
            pending: None,
            generation: Arc::new(AtomicU64::new(0)),
            visible: Arc::new(AtomicBool::new(false)),
            events,
        }
    }

    /// Shows the notice and (re)starts its hide timer.
    ///
    /// Outside a Tokio runtime the notice is still shown but stays up until
    /// the next trigger, since no hide task can be scheduled.
    pub fn trigger(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let restarted = self.visible.swap(true, Ordering::SeqCst);
        debug!(generation, restarted, "notice shown");
        let _ = self.events.send(BouquetSignal::NoticeShown {
            duration_ms: u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
        });

        let Ok(runtime) = Handle::try_current() else {
            warn!(generation, "no Tokio runtime, notice will not auto-hide");
            return;
        };

        let duration = self.duration;
        let current = Arc::clone(&self.generation);
        let visible = Arc::clone(&self.visible);
        let events = self.events.clone();
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }
            visible.store(false, Ordering::SeqCst);
            debug!(generation, "notice hidden");
            let _ = events.send(BouquetSignal::NoticeHidden);
        }));
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl Drop for NoticeTimer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/notice_tests.rs"]
mod tests;
