//! Midnight and day-rollover detection.
//!
//! A one-shot timer is armed for the next local midnight; when it fires
//! (or whenever the app returns to the foreground, to catch a midnight
//! missed while suspended) the stored last-reset day key is compared to
//! today's and, on a change, the reset callback is invoked and the timer
//! re-armed. The timer is explicit and cancellable; the comparison logic
//! is separated from the timer so it can be tested directly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::{Timestamp, Zoned};
use log::debug;
use tokio::task::JoinHandle;

use crate::weeks;

/// Never sleep less than this, to avoid zero or negative timer delays
/// right at the midnight boundary.
const MIN_DELAY_MS: u64 = 1000;

/// Trigger state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Armed (or idle), waiting for midnight or a foreground transition
    Waiting,
    /// Currently invoking the reset callback
    Triggering,
}

/// Milliseconds until the next local midnight, clamped to at least one
/// second.
pub fn millis_until_next_midnight(now: &Zoned) -> u64 {
    let next_midnight = now
        .date()
        .tomorrow()
        .ok()
        .and_then(|date| date.to_zoned(now.time_zone().clone()).ok());

    let Some(next) = next_midnight else {
        return MIN_DELAY_MS;
    };
    let delta = next.timestamp().as_millisecond() - now.timestamp().as_millisecond();
    delta.max(MIN_DELAY_MS as i64) as u64
}

struct TriggerInner {
    state: TriggerState,
    last_reset_day: Option<String>,
    timer: Option<JoinHandle<()>>,
}

/// Watches for calendar-day transitions and invokes a reset callback.
#[derive(Clone)]
pub struct MidnightTrigger {
    inner: Arc<Mutex<TriggerInner>>,
    on_reset: Arc<dyn Fn(&str) + Send + Sync>,
}

impl MidnightTrigger {
    /// Creates a trigger with the persisted last-reset day key, if any.
    pub fn new(
        last_reset_day: Option<String>,
        on_reset: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TriggerInner {
                state: TriggerState::Waiting,
                last_reset_day,
                timer: None,
            })),
            on_reset: Arc::new(on_reset),
        }
    }

    /// Locks the inner state, recovering from a poisoned lock.
    ///
    /// Every lock scope leaves the plain-data inner state consistent (the
    /// reset callback runs outside the lock), so a panic on another thread
    /// never invalidates it and a missed reset self-heals on the next
    /// check.
    fn lock_inner(&self) -> MutexGuard<'_, TriggerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Arms a one-shot timer for the next local midnight, replacing any
    /// pending timer.
    pub fn schedule(&self) {
        let delay_ms = millis_until_next_midnight(&Zoned::now());
        debug!("midnight trigger armed, firing in {delay_ms} ms");

        let trigger = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            trigger.fire(Timestamp::now());
            trigger.schedule();
        });

        let mut inner = self.lock_inner();
        if let Some(previous) = inner.timer.replace(handle) {
            previous.abort();
        }
    }

    /// Runs the day-change check for an app foreground transition.
    pub fn on_foreground(&self) {
        self.fire(Timestamp::now());
    }

    /// Cancels the pending timer, if any.
    pub fn cancel(&self) {
        let mut inner = self.lock_inner();
        if let Some(handle) = inner.timer.take() {
            handle.abort();
        }
    }

    /// The day-change check itself, at an explicit instant.
    ///
    /// Compares the stored last-reset day key against the instant's day
    /// key; on a difference the reset callback runs and the key advances.
    /// Returns whether a reset happened.
    pub fn fire(&self, now: Timestamp) -> bool {
        let today = weeks::day_key(now);

        {
            let mut inner = self.lock_inner();
            if inner.last_reset_day.as_deref() == Some(today.as_str()) {
                return false;
            }
            inner.state = TriggerState::Triggering;
        }

        // Callback runs outside the lock; it may call back into storage.
        (self.on_reset)(&today);

        let mut inner = self.lock_inner();
        inner.last_reset_day = Some(today);
        inner.state = TriggerState::Waiting;
        true
    }

    /// The trigger's current state.
    pub fn state(&self) -> TriggerState {
        self.lock_inner().state
    }

    /// The most recent day key a reset ran for.
    pub fn last_reset_day(&self) -> Option<String> {
        self.lock_inner().last_reset_day.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use jiff::tz::TimeZone;

    use super::*;

    fn zoned(s: &str) -> Zoned {
        s.parse::<Timestamp>()
            .expect("valid timestamp")
            .to_zoned(TimeZone::UTC)
    }

    #[test]
    fn full_day_until_midnight_from_midnight() {
        let now = zoned("2024-05-10T00:00:00Z");
        assert_eq!(millis_until_next_midnight(&now), 24 * 60 * 60 * 1000);
    }

    #[test]
    fn delay_is_clamped_near_midnight() {
        let now = zoned("2024-05-10T23:59:59.900Z");
        assert_eq!(millis_until_next_midnight(&now), 1000);
    }

    #[test]
    fn fire_resets_only_on_day_change() {
        let resets = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&resets);
        let trigger = MidnightTrigger::new(Some("2024-05-09".to_string()), move |day| {
            assert_eq!(day, "2024-05-10");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let now: Timestamp = "2024-05-10T00:00:01Z".parse().unwrap();
        assert!(trigger.fire(now));
        assert_eq!(resets.load(Ordering::SeqCst), 1);
        assert_eq!(trigger.last_reset_day().as_deref(), Some("2024-05-10"));
        assert_eq!(trigger.state(), TriggerState::Waiting);

        // Same day again: no reset.
        assert!(!trigger.fire(now));
        assert_eq!(resets.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn first_run_counts_as_a_day_change() {
        let resets = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&resets);
        let trigger = MidnightTrigger::new(None, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(trigger.fire("2024-05-10T08:00:00Z".parse().unwrap()));
        assert_eq!(resets.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn fire_survives_a_poisoned_lock() {
        let resets = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&resets);
        let trigger = MidnightTrigger::new(Some("2024-05-09".to_string()), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Panic on another thread while holding the lock.
        let inner = Arc::clone(&trigger.inner);
        std::thread::spawn(move || {
            let _guard = inner.lock().unwrap();
            panic!("poisoning the trigger lock");
        })
        .join()
        .unwrap_err();

        assert!(trigger.fire("2024-05-10T00:00:01Z".parse().unwrap()));
        assert_eq!(resets.load(Ordering::SeqCst), 1);
        assert_eq!(trigger.last_reset_day().as_deref(), Some("2024-05-10"));
    }

    #[tokio::test]
    async fn cancel_aborts_a_pending_timer() {
        let trigger = MidnightTrigger::new(None, |_| {});
        trigger.schedule();
        trigger.cancel();
        // Nothing to assert beyond not panicking; the timer task is gone.
    }
}
