use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortscope::{
    Algorithm, DataGenerator, Highlight, Playback, PlaybackEvent, RunOutcome, Snapshot,
    SpeedControl, ValueRange,
};

fn inputs() -> Vec<(&'static str, Vec<u32>)> {
    let mut rng = StdRng::seed_from_u64(42);
    let random: Vec<u32> = (0..40).map(|_| rng.gen_range(0..25)).collect();
    vec![
        ("empty", vec![]),
        ("single", vec![7]),
        ("pair", vec![2, 1]),
        ("duplicates", vec![4, 1, 4, 2, 1, 4]),
        ("sorted", (1..=12).collect()),
        ("reversed", (1..=12).rev().collect()),
        ("all equal", vec![3; 9]),
        ("random", random),
    ]
}

fn sorted(data: &[u32]) -> Vec<u32> {
    let mut expected = data.to_vec();
    expected.sort();
    expected
}

#[test]
fn test_every_algorithm_ends_sorted() {
    for algorithm in Algorithm::ALL {
        for (name, data) in inputs() {
            let frames: Vec<Snapshot<u32>> = algorithm.sequence(data.clone()).collect();
            let expected = sorted(&data);
            match frames.last() {
                Some(last) => assert_eq!(last.values, expected, "{} on {}", algorithm, name),
                // Nothing to show only when there is nothing to sort
                None => assert!(data.len() < 2, "{} on {} yielded no frames", algorithm, name),
            }
        }
    }
}

#[test]
fn test_frames_are_permutations() {
    for algorithm in Algorithm::ALL {
        for (name, data) in inputs() {
            let expected = sorted(&data);
            for frame in algorithm.sequence(data.clone()) {
                assert_eq!(frame.tags.len(), frame.values.len(), "{} on {}", algorithm, name);
                // Insertion holds its key out of the array while shifting
                let mid_shift = algorithm == Algorithm::Insertion
                    && !frame.tags.contains(&Highlight::Committed);
                if !mid_shift {
                    assert_eq!(sorted(&frame.values), expected, "{} on {}", algorithm, name);
                }
            }
        }
    }
}

#[test]
fn test_trivial_inputs_yield_nothing() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.sequence(Vec::<u32>::new()).count(), 0, "{}", algorithm);
        assert_eq!(algorithm.sequence(vec![7u32]).count(), 0, "{}", algorithm);
    }
}

#[test]
fn test_sequences_are_deterministic() {
    let data: Vec<u32> = DataGenerator::seeded(30, ValueRange::default(), 11).generate();
    for algorithm in Algorithm::ALL {
        let first: Vec<_> = algorithm.sequence(data.clone()).collect();
        let second: Vec<_> = algorithm.sequence(data.clone()).collect();
        assert_eq!(first, second, "{}", algorithm);
    }
}

#[test]
fn test_all_equal_input_terminates() {
    for algorithm in Algorithm::ALL {
        let frames: Vec<_> = algorithm.sequence(vec![9u32; 50]).collect();
        assert!(!frames.is_empty(), "{}", algorithm);
        assert!(frames.iter().all(|f| f.values == vec![9; 50]), "{}", algorithm);
    }
}

#[test]
fn test_bubble_walkthrough() {
    let frames: Vec<_> = Algorithm::Bubble.sequence(vec![5u32, 3, 1]).collect();
    let values: Vec<_> = frames.iter().map(|f| f.values.clone()).collect();
    assert_eq!(values, vec![vec![3, 5, 1], vec![3, 1, 5], vec![1, 3, 5]]);

    use Highlight::{Active, Neutral};
    assert_eq!(frames[0].tags, vec![Active, Active, Neutral]);
    assert_eq!(frames[1].tags, vec![Neutral, Active, Active]);
    assert_eq!(frames[2].tags, vec![Active, Active, Neutral]);
}

#[test]
fn test_generated_data_is_fresh_and_in_range() {
    let mut generator = DataGenerator::new(60, ValueRange::default());
    let first = generator.generate();
    let second = generator.generate();
    assert_eq!(first.len(), 60);
    assert_eq!(second.len(), 60);
    assert!(first.iter().chain(&second).all(|v| (5..=100).contains(v)));
    // Two independent 60-value draws from 96 values colliding is vanishingly rare
    assert_ne!(first, second);
}

/// Poll a run to completion, collecting every frame.
fn collect_run(algorithm: Algorithm, data: Vec<u32>) -> (Vec<Snapshot<u32>>, RunOutcome) {
    let speed = SpeedControl::new(Duration::ZERO);
    let mut run = Playback::spawn(algorithm, data, speed.subscribe()).unwrap();
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut frames = Vec::new();
    loop {
        assert!(Instant::now() < deadline, "playback did not finish");
        match run.poll() {
            Some(PlaybackEvent::Frame(frame)) => frames.push(frame),
            Some(PlaybackEvent::Done(outcome)) => return (frames, outcome),
            None => thread::sleep(Duration::from_millis(1)),
        }
    }
}

#[test]
fn test_zero_speed_playback_delivers_every_frame_in_order() {
    let data: Vec<u32> = DataGenerator::seeded(25, ValueRange::default(), 3).generate();
    for algorithm in Algorithm::ALL {
        let expected: Vec<_> = algorithm.sequence(data.clone()).collect();
        let (frames, outcome) = collect_run(algorithm, data.clone());
        assert_eq!(frames, expected, "{}", algorithm);
        match outcome {
            RunOutcome::Finished(result) => {
                assert_eq!(result.algorithm, algorithm);
                assert_eq!(result.frames, expected.len());
                assert!(result.readout().starts_with("Execution Time: "));
            }
            other => panic!("{}: unexpected outcome {:?}", algorithm, other),
        }
    }
}

#[test]
fn test_playback_of_empty_array_finishes_without_frames() {
    let (frames, outcome) = collect_run(Algorithm::Merge, vec![]);
    assert!(frames.is_empty());
    match outcome {
        RunOutcome::Finished(result) => assert_eq!(result.frames, 0),
        other => panic!("unexpected outcome {:?}", other),
    }
}
