//! Paced consumption of snapshot sequences.
//!
//! The driver pulls one snapshot at a time, hands it to a consumer and
//! sleeps for the configured step delay before pulling the next.
//!
//! ```text
//!  UI thread                               worker thread
//! ┌──────────────┐   Playback::spawn   ┌─────────────────────────┐
//! │ App          │────────────────────▶│ drive()                  │
//! │  RunHandle   │                     │  pull ─▶ send ─▶ sleep   │
//! │   poll() ◀───┼──── mpsc (bounded) ─┤                          │
//! │  SpeedControl├──── watch ─────────▶│  (speed read each step)  │
//! │   cancel() ──┼──── CancelToken ───▶│  (checked before pull)   │
//! └──────────────┘                     └─────────────────────────┘
//! ```
//!
//! [`drive`] is synchronous and usable on its own (the headless mode calls
//! it directly); [`Playback::spawn`] wraps it in a worker thread and returns
//! a [`RunHandle`] that owns the channel, the cancel token and the join
//! handle.

mod control;
mod driver;
mod handle;

pub use control::{CancelToken, SpeedControl};
pub use driver::drive;
pub use handle::{Playback, PlaybackEvent, RunHandle};
