//! Non-interactive runs and snapshot traces.
//!
//! A headless run drives one sequencer on the calling thread, optionally
//! writing every snapshot to a trace as newline-delimited JSON:
//!
//! ```text
//! {"values":[3,5,1],"tags":["active","active","neutral"]}
//! {"values":[3,1,5],"tags":["neutral","active","active"]}
//! ```

use std::io::{self, BufRead, BufWriter, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::data::RunOutcome;
use crate::playback::{drive, CancelToken, SpeedControl};
use crate::sort::{Algorithm, Snapshot};

/// Writes snapshots as JSON lines.
pub struct TraceWriter<W: Write> {
    writer: BufWriter<W>,
    lines: usize,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            lines: 0,
        }
    }

    /// Append one snapshot.
    pub fn write(&mut self, snapshot: &Snapshot<u32>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and return the number of snapshots written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.lines)
    }
}

/// Read a trace back, one snapshot per non-empty line.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<Snapshot<u32>>> {
    let mut snapshots = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let snapshot = serde_json::from_str(&line)
            .with_context(|| format!("invalid snapshot on line {}", number + 1))?;
        snapshots.push(snapshot);
    }
    Ok(snapshots)
}

/// Sort `data` with `algorithm` on this thread, pausing `speed` per step.
///
/// Every snapshot goes to `trace` when one is given. A trace write error
/// stops the run and is returned.
pub fn run<W: Write>(
    algorithm: Algorithm,
    data: Vec<u32>,
    speed: Duration,
    mut trace: Option<&mut TraceWriter<W>>,
) -> Result<RunOutcome> {
    let speed = SpeedControl::new(speed);
    let cancel = CancelToken::new();
    let mut write_error: Option<anyhow::Error> = None;

    info!(%algorithm, len = data.len(), "headless run started");
    let outcome = drive(
        algorithm,
        algorithm.sequence(data),
        |snapshot| match trace.as_deref_mut() {
            Some(writer) => match writer.write(&snapshot) {
                Ok(()) => true,
                Err(e) => {
                    write_error = Some(e);
                    false
                }
            },
            None => true,
        },
        &speed.subscribe(),
        &cancel,
    );

    match write_error {
        Some(e) => Err(e.context("failed to write trace")),
        None => Ok(outcome),
    }
}

/// A writer that discards everything, for runs without a trace.
pub fn no_trace() -> Option<&'static mut TraceWriter<io::Sink>> {
    None
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::sort::Highlight;

    #[test]
    fn test_trace_round_trips_bubble_walkthrough() {
        let mut buffer = Vec::new();
        let mut writer = TraceWriter::new(&mut buffer);
        let outcome = run(Algorithm::Bubble, vec![5, 3, 1], Duration::ZERO, Some(&mut writer)).unwrap();
        assert_eq!(writer.finish().unwrap(), 3);

        let snapshots = read_trace(Cursor::new(buffer)).unwrap();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[1].values, vec![3, 1, 5]);
        assert_eq!(
            snapshots[1].tags,
            vec![Highlight::Neutral, Highlight::Active, Highlight::Active]
        );
        match outcome {
            RunOutcome::Finished(result) => assert_eq!(result.frames, 3),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_run_without_trace() {
        let outcome = run(Algorithm::Quick, vec![4, 4, 1], Duration::ZERO, no_trace()).unwrap();
        assert!(matches!(outcome, RunOutcome::Finished(_)));
    }

    #[test]
    fn test_read_trace_reports_bad_line() {
        let input = "{\"values\":[1],\"tags\":[\"neutral\"]}\nnot json\n";
        let err = read_trace(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    /// Fails every write.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_trace_error_stops_run() {
        // Big enough to overflow the BufWriter's buffer
        let data: Vec<u32> = (0..3000).rev().collect();
        let mut writer = TraceWriter::new(Broken);
        let result = run(Algorithm::Insertion, data, Duration::ZERO, Some(&mut writer));
        assert!(result.is_err());
    }
}
