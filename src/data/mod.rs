//! Data models shared by the control surface and the playback driver.
//!
//! ## Submodules
//!
//! - [`duration`]: parsing speed strings (e.g., "100ms", "0.25") and
//!   formatting elapsed times
//! - [`generate`]: random input arrays for a run
//! - [`run`]: the [`RunResult`] reported when a playback completes

pub mod duration;
pub mod generate;
pub mod run;

pub use generate::{DataGenerator, ValueRange};
pub use run::{RunOutcome, RunResult};
