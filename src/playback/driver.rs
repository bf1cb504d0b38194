//! The pacing loop.

use std::thread;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::debug;

use super::CancelToken;
use crate::data::{RunOutcome, RunResult};
use crate::sort::{Algorithm, Snapshot};

/// Longest uninterrupted sleep, so cancellation is noticed mid-delay.
const SLEEP_SLICE: Duration = Duration::from_millis(20);

/// Consume `sequencer` to exhaustion, handing each snapshot to `deliver`.
///
/// Per step: check `cancel`, pull, deliver, then sleep for the current value
/// of `speed`. `deliver` returns `false` when its consumer has gone away,
/// which ends the run as cancelled. The elapsed time covers the whole loop,
/// sleeps and delivery backpressure included.
pub fn drive<T, I, F>(
    algorithm: Algorithm,
    sequencer: I,
    mut deliver: F,
    speed: &watch::Receiver<Duration>,
    cancel: &CancelToken,
) -> RunOutcome
where
    I: IntoIterator<Item = Snapshot<T>>,
    F: FnMut(Snapshot<T>) -> bool,
{
    let started = Instant::now();
    let mut sequencer = sequencer.into_iter();
    let mut frames = 0;

    loop {
        if cancel.is_cancelled() {
            debug!(frames, "playback cancelled");
            return RunOutcome::Cancelled { frames };
        }
        let Some(snapshot) = sequencer.next() else {
            break;
        };
        if !deliver(snapshot) {
            debug!(frames, "frame consumer disconnected");
            return RunOutcome::Cancelled { frames };
        }
        frames += 1;

        let delay = *speed.borrow();
        pause(delay, cancel);
    }

    RunOutcome::Finished(RunResult {
        algorithm,
        elapsed: started.elapsed(),
        frames,
    })
}

/// Sleep for `delay`, waking early if `cancel` fires.
fn pause(delay: Duration, cancel: &CancelToken) {
    let deadline = Instant::now() + delay;
    loop {
        let now = Instant::now();
        if now >= deadline || cancel.is_cancelled() {
            return;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::SpeedControl;

    #[test]
    fn test_delivers_every_frame_in_order() {
        let speed = SpeedControl::new(Duration::ZERO);
        let expected: Vec<_> = Algorithm::Quick.sequence(vec![9u32, 4, 7, 1, 8]).collect();

        let mut seen = Vec::new();
        let outcome = drive(
            Algorithm::Quick,
            Algorithm::Quick.sequence(vec![9u32, 4, 7, 1, 8]),
            |s| {
                seen.push(s);
                true
            },
            &speed.subscribe(),
            &CancelToken::new(),
        );

        assert_eq!(seen, expected);
        match outcome {
            RunOutcome::Finished(result) => {
                assert_eq!(result.frames, expected.len());
                assert_eq!(result.algorithm, Algorithm::Quick);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_empty_sequence_finishes_immediately() {
        let speed = SpeedControl::new(Duration::from_secs(5));
        let outcome = drive(
            Algorithm::Merge,
            Algorithm::Merge.sequence(vec![7u32]),
            |_| true,
            &speed.subscribe(),
            &CancelToken::new(),
        );
        match outcome {
            RunOutcome::Finished(result) => {
                assert_eq!(result.frames, 0);
                assert!(result.elapsed < Duration::from_secs(1));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_cancel_checked_before_each_pull() {
        let speed = SpeedControl::new(Duration::ZERO);
        let cancel = CancelToken::new();
        let mut delivered = 0;

        let outcome = drive(
            Algorithm::Bubble,
            Algorithm::Bubble.sequence(vec![5u32, 4, 3, 2, 1]),
            |_| {
                delivered += 1;
                if delivered == 2 {
                    cancel.cancel();
                }
                true
            },
            &speed.subscribe(),
            &cancel,
        );

        assert_eq!(outcome, RunOutcome::Cancelled { frames: 2 });
        assert_eq!(delivered, 2);
    }

    #[test]
    fn test_disconnected_consumer_stops_run() {
        let speed = SpeedControl::new(Duration::ZERO);
        let outcome = drive(
            Algorithm::Insertion,
            Algorithm::Insertion.sequence(vec![3u32, 2, 1]),
            |_| false,
            &speed.subscribe(),
            &CancelToken::new(),
        );
        assert_eq!(outcome, RunOutcome::Cancelled { frames: 0 });
    }

    #[test]
    fn test_speed_read_live() {
        let speed = SpeedControl::new(Duration::from_secs(10));
        let rx = speed.subscribe();
        let started = Instant::now();

        // The first delivery drops the delay, so the 10s sleep never happens
        let outcome = drive(
            Algorithm::Bubble,
            Algorithm::Bubble.sequence(vec![2u32, 1, 3]),
            |_| {
                speed.set(Duration::ZERO);
                true
            },
            &rx,
            &CancelToken::new(),
        );

        assert!(matches!(outcome, RunOutcome::Finished(_)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
