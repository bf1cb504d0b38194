//! Run controls shared between the UI thread and the playback worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Cooperative cancellation flag.
///
/// Clones share the same flag. The driver checks it before every pull and
/// while sleeping between frames.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// The step delay, published to running playbacks.
///
/// Receivers read the latest value on every step, so changes made while a
/// run is animating take effect on the next frame.
#[derive(Debug)]
pub struct SpeedControl {
    sender: watch::Sender<Duration>,
}

impl SpeedControl {
    pub fn new(delay: Duration) -> Self {
        let (sender, _) = watch::channel(delay);
        Self { sender }
    }

    /// Current step delay.
    pub fn get(&self) -> Duration {
        *self.sender.borrow()
    }

    /// Replace the step delay. Works whether or not a run is listening.
    pub fn set(&self, delay: Duration) {
        self.sender.send_replace(delay);
    }

    /// A receiver for a new playback.
    pub fn subscribe(&self) -> watch::Receiver<Duration> {
        self.sender.subscribe()
    }
}
