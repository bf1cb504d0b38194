//! Background playback and the handle the UI keeps for it.

use std::any::Any;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::sync::watch;
use tracing::{info, warn};

use super::{drive, CancelToken};
use crate::data::RunOutcome;
use crate::sort::{Algorithm, Snapshot};

/// Frames the worker may run ahead of the UI.
///
/// Kept at one so every frame is drawn before the next is computed.
const FRAME_BUFFER: usize = 1;

/// What the UI thread receives from a running playback, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent<T> {
    /// Draw this snapshot.
    Frame(Snapshot<T>),
    /// The run ended; no further events follow.
    Done(RunOutcome),
}

/// Starts playbacks on their own worker thread.
pub struct Playback;

impl Playback {
    /// Sort `data` with `algorithm` on a new thread, pacing frames by `speed`.
    ///
    /// Frames are pushed over a bounded channel, so the worker blocks until
    /// the UI has taken the previous one.
    pub fn spawn<T>(
        algorithm: Algorithm,
        data: Vec<T>,
        speed: watch::Receiver<Duration>,
    ) -> Result<RunHandle<T>>
    where
        T: Ord + Clone + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(FRAME_BUFFER);
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let len = data.len();

        let thread = thread::Builder::new()
            .name(format!("playback-{:?}", algorithm).to_lowercase())
            .spawn(move || {
                let sequencer = algorithm.sequence(data);
                let outcome = drive(
                    algorithm,
                    sequencer,
                    |snapshot| tx.blocking_send(PlaybackEvent::Frame(snapshot)).is_ok(),
                    &speed,
                    &token,
                );
                // The receiver may already be gone if the UI cancelled
                let _ = tx.blocking_send(PlaybackEvent::Done(outcome));
            })?;

        info!(%algorithm, len, "playback started");

        Ok(RunHandle {
            algorithm,
            events: Some(rx),
            cancel,
            thread: Some(thread),
        })
    }
}

/// Ownership of one running playback.
///
/// Dropping the handle cancels the run and waits for the worker to exit.
#[derive(Debug)]
pub struct RunHandle<T> {
    algorithm: Algorithm,
    events: Option<mpsc::Receiver<PlaybackEvent<T>>>,
    cancel: CancelToken,
    thread: Option<JoinHandle<()>>,
}

impl<T> RunHandle<T> {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Take the next pending event without blocking.
    ///
    /// If the worker died without reporting, the panic is turned into a
    /// [`RunOutcome::Failed`] event. Returns `None` once the run is over.
    pub fn poll(&mut self) -> Option<PlaybackEvent<T>> {
        let events = self.events.as_mut()?;
        match events.try_recv() {
            Ok(PlaybackEvent::Done(outcome)) => {
                self.events = None;
                Some(PlaybackEvent::Done(outcome))
            }
            Ok(frame) => Some(frame),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.events = None;
                let message = match self.thread.take().map(JoinHandle::join) {
                    Some(Err(payload)) => panic_message(payload.as_ref()),
                    _ => "playback worker exited without reporting".to_string(),
                };
                warn!(algorithm = %self.algorithm, %message, "playback failed");
                Some(PlaybackEvent::Done(RunOutcome::Failed(message)))
            }
        }
    }

    /// Whether the run can still produce events.
    pub fn is_active(&self) -> bool {
        self.events.is_some()
    }

    /// Stop the run and wait for the worker to acknowledge by exiting.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.cancel.cancel();
        // Unblocks a worker waiting on a full channel
        self.events = None;
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!(algorithm = %self.algorithm, "playback worker panicked during shutdown");
            }
        }
    }
}

impl<T> Drop for RunHandle<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "playback worker panicked".to_string()
    }
}
