//! Results reported by the playback driver.

use std::time::Duration;

use serde::Serialize;

use super::duration::format_elapsed;
use crate::sort::Algorithm;

/// Summary of a playback that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub algorithm: Algorithm,
    /// Wall-clock time from the first pull to exhaustion, sleeps included.
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Number of snapshots delivered.
    pub frames: usize,
}

impl RunResult {
    /// The readout text, e.g. "Execution Time: 1.234 sec".
    pub fn readout(&self) -> String {
        format!("Execution Time: {} sec", format_elapsed(self.elapsed))
    }
}

/// How a playback ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every snapshot was delivered.
    Finished(RunResult),
    /// Cancelled before the sequence was exhausted.
    Cancelled { frames: usize },
    /// The worker died; the message is the panic payload if it had one.
    Failed(String),
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
