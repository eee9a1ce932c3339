//! Transient notice board: at most one success and one error message,
//! each with its own auto-clear timer.
//!
//! Setting a new message of a kind cancels that kind's pending timer
//! task and schedules a fresh one, so a replaced message can never
//! clear its successor early. Cancellation is belt-and-braces: the
//! prior task is aborted *and* each task re-checks an epoch counter
//! before clearing, closing the window where an aborted task had
//! already passed its sleep.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a success message stays visible.
pub const SUCCESS_TTL: Duration = Duration::from_secs(3);
/// How long an error message stays visible.
pub const ERROR_TTL: Duration = Duration::from_secs(5);

/// Which of the two message slots an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Success,
    Error,
}

#[derive(Default)]
struct Slot {
    message: Option<String>,
    /// Bumped on every set; the expiry task only clears when its
    /// captured epoch still matches.
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Inner {
    success: Slot,
    error: Slot,
}

/// Shared handle to the notice board. Cheap to clone.
///
/// Must be used inside a tokio runtime: setting a message spawns the
/// auto-clear task.
#[derive(Clone, Default)]
pub struct NoticeBoard {
    inner: Arc<Mutex<Inner>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success message for [`SUCCESS_TTL`], replacing any
    /// currently visible success message and restarting its timer.
    pub fn set_success(&self, message: impl Into<String>) {
        self.set(Kind::Success, message.into(), SUCCESS_TTL);
    }

    /// Show an error message for [`ERROR_TTL`], replacing any currently
    /// visible error message and restarting its timer.
    pub fn set_error(&self, message: impl Into<String>) {
        self.set(Kind::Error, message.into(), ERROR_TTL);
    }

    /// Currently visible success message, if any.
    pub fn success(&self) -> Option<String> {
        self.inner.lock().unwrap().success.message.clone()
    }

    /// Currently visible error message, if any.
    pub fn error(&self) -> Option<String> {
        self.inner.lock().unwrap().error.message.clone()
    }

    fn set(&self, kind: Kind, message: String, ttl: Duration) {
        let mut inner = self.inner.lock().unwrap();
        let slot = match kind {
            Kind::Success => &mut inner.success,
            Kind::Error => &mut inner.error,
        };

        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.message = Some(message);
        slot.epoch += 1;

        let epoch = slot.epoch;
        let board = Arc::clone(&self.inner);
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut inner = board.lock().unwrap();
            let slot = match kind {
                Kind::Success => &mut inner.success,
                Kind::Error => &mut inner.error,
            };
            if slot.epoch == epoch {
                slot.message = None;
                slot.timer = None;
            }
        }));
    }
}
