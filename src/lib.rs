//! # sortscope
//!
//! A terminal visualizer that animates comparison sorts one step at a time.
//!
//! Each algorithm is a sequencer: an iterator that sorts its own copy of the
//! input and yields a [`Snapshot`] of the whole array, with a highlight tag per
//! position, after every comparison, swap, shift or placement. A playback
//! worker paces those snapshots onto the UI thread, which redraws the bar
//! chart from each one in turn.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│ playback │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (worker) │    │(rendering)   │         │ │
//! │  └────┬────┘    └────┬─────┘    └─────────┘    └─────────┘ │
//! │       │              │                                      │
//! │       ▼              ▼                                      │
//! │  ┌─────────┐    ┌──────────┐                                │
//! │  │  data   │    │   sort   │◀── Bubble | Insertion |        │
//! │  │(arrays) │    │(sequencers)    Merge | Quick              │
//! │  └─────────┘    └──────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`sort`]**: the four sequencers, [`Snapshot`] and [`Highlight`]
//! - **[`playback`]**: the pacing loop and its worker thread handle
//! - **[`data`]**: random array generation, run results, duration parsing
//! - **[`app`]**: UI state and the serialization of control actions
//! - **[`ui`]**: ratatui rendering of the chart, header, tabs and help
//! - **[`headless`]**: runs without a terminal and JSON-lines traces
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Interactive
//! sortscope --algorithm merge --speed 0.02
//!
//! # One run without the TUI, writing every snapshot
//! sortscope --headless --algorithm quick --seed 7 --trace quick.jsonl
//! ```
//!
//! ### As a library
//!
//! ```
//! use sortscope::{Algorithm, Highlight};
//!
//! let frames: Vec<_> = Algorithm::Bubble.sequence(vec![5, 3, 1]).collect();
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames[2].values, vec![1, 3, 5]);
//! assert_eq!(frames[2].tags[0], Highlight::Active);
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod headless;
pub mod logging;
pub mod playback;
pub mod settings;
pub mod sort;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, StatusKind};
pub use data::{DataGenerator, RunOutcome, RunResult, ValueRange};
pub use playback::{CancelToken, Playback, PlaybackEvent, RunHandle, SpeedControl};
pub use settings::Settings;
pub use sort::{Algorithm, Highlight, Sequencer, Snapshot};
