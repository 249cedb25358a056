//! Debounced flushing for write-heavy stores.
//!
//! A burst of toggles should coalesce into a single durable write. The
//! debouncer owns its timer explicitly: `schedule` arms (or re-arms) a
//! one-shot flush, `flush_now` runs it immediately, and `cancel` aborts a
//! pending flush. Cleanup is explicit; dropping the debouncer cancels any
//! pending timer.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Default debounce window for practice-log flushes.
pub const DEFAULT_FLUSH_DELAY: Duration = Duration::from_millis(150);

/// One-shot, re-armable flush timer.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given flush delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Arms the flush timer, replacing any pending flush.
    ///
    /// The flush closure runs on a blocking worker once the delay elapses
    /// without another `schedule` call.
    pub fn schedule<F>(&mut self, flush: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tokio::task::spawn_blocking(flush).await;
        }));
    }

    /// Cancels any pending flush and runs the given flush immediately.
    pub fn flush_now<F>(&mut self, flush: F)
    where
        F: FnOnce(),
    {
        self.cancel();
        flush();
    }

    /// Aborts a pending flush, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_FLUSH_DELAY)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn scheduled_flush_fires_once_after_delay() {
        let flushes = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(20));

        let counter = Arc::clone(&flushes);
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(flushes.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(flushes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rescheduling_coalesces_bursts() {
        let flushes = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(30));

        for _ in 0..5 {
            let counter = Arc::clone(&flushes);
            debouncer.schedule(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(flushes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancel_prevents_the_flush() {
        let flushes = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(20));

        let counter = Arc::clone(&flushes);
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(flushes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn flush_now_preempts_pending_timer() {
        let flushes = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(20));

        let counter = Arc::clone(&flushes);
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let counter = Arc::clone(&flushes);
        debouncer.flush_now(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(flushes.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(flushes.load(Ordering::SeqCst), 1);
    }
}
