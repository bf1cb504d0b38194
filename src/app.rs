//! Application state and the control surface logic.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::data::{DataGenerator, RunOutcome, RunResult};
use crate::playback::{Playback, PlaybackEvent, RunHandle, SpeedControl};
use crate::settings::Settings;
use crate::sort::{Algorithm, Snapshot};
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// How a status message is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Main application state.
///
/// The app never holds the array a run is mutating: it keeps the pristine
/// generated data and the last snapshot it was handed, and each run sorts its
/// own clone on a worker thread.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub settings: Settings,

    // Run configuration
    pub algorithm: Algorithm,
    speed: SpeedControl,

    // Data
    generator: DataGenerator,
    /// Array from the last "Generate Data", untouched by runs.
    pub data: Option<Vec<u32>>,
    /// What the chart currently shows.
    pub frame: Option<Snapshot<u32>>,

    // Playback
    run: Option<RunHandle<u32>>,
    pub last_result: Option<RunResult>,
    pub last_failure: Option<String>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, StatusKind, Instant)>,
}

impl App {
    /// Create a new App from validated settings.
    pub fn new(settings: Settings, generator: DataGenerator, theme: Theme) -> Self {
        let speed = SpeedControl::new(settings.speed());
        Self {
            running: true,
            show_help: false,
            algorithm: settings.algorithm,
            settings,
            speed,
            generator,
            data: None,
            frame: None,
            run: None,
            last_result: None,
            last_failure: None,
            theme,
            status_message: None,
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, StatusKind::Info, Instant::now()));
    }

    /// Like [`App::set_status_message`], shown in the error color.
    pub fn set_error_message(&mut self, message: String) {
        self.status_message = Some((message, StatusKind::Error, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<(&str, StatusKind)> {
        if let Some((msg, kind, time)) = &self.status_message {
            if time.elapsed() < STATUS_TTL {
                return Some((msg, *kind));
            }
        }
        None
    }

    /// Whether a playback is currently animating.
    pub fn is_sorting(&self) -> bool {
        self.run.is_some()
    }

    /// Replace the array with a fresh random draw and show it unsorted.
    ///
    /// A run in progress is cancelled and joined first so it cannot draw over
    /// the new data.
    pub fn generate_data(&mut self) {
        if let Some(run) = self.run.take() {
            info!(algorithm = %run.algorithm(), "cancelling run for new data");
            run.cancel();
        }

        let data = self.generator.generate();
        debug!(len = data.len(), "generated data");
        self.frame = Some(Snapshot::neutral(data.clone()));
        self.data = Some(data);
    }

    /// Start sorting a copy of the current data with the selected algorithm.
    ///
    /// Does nothing without data. While another run is animating the request
    /// is ignored. Returns whether a run was started.
    pub fn start_sorting(&mut self) -> bool {
        let Some(data) = self.data.clone() else {
            debug!("start ignored: no data");
            return false;
        };
        if self.is_sorting() {
            self.set_status_message("Already sorting (x to cancel)".to_string());
            return false;
        }

        match Playback::spawn(self.algorithm, data.clone(), self.speed.subscribe()) {
            Ok(handle) => {
                self.frame = Some(Snapshot::neutral(data));
                self.last_failure = None;
                self.run = Some(handle);
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to start playback");
                self.fail(format!("could not start worker: {}", e));
                false
            }
        }
    }

    /// Cancel the active run, waiting for its worker to exit.
    pub fn cancel_sorting(&mut self) {
        if let Some(run) = self.run.take() {
            run.cancel();
            info!("run cancelled by user");
            self.set_status_message("Sort cancelled".to_string());
        }
    }

    /// Pull at most one event from the active run.
    ///
    /// Called once per UI loop iteration so every frame gets drawn, in order.
    pub fn tick(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        match run.poll() {
            Some(PlaybackEvent::Frame(snapshot)) => self.frame = Some(snapshot),
            Some(PlaybackEvent::Done(outcome)) => self.finish(outcome),
            None => {}
        }
    }

    fn finish(&mut self, outcome: RunOutcome) {
        self.run = None;
        match outcome {
            RunOutcome::Finished(result) => {
                info!(
                    algorithm = %result.algorithm,
                    frames = result.frames,
                    elapsed = result.elapsed.as_secs_f64(),
                    "run finished"
                );
                self.last_result = Some(result);
            }
            RunOutcome::Cancelled { frames } => {
                info!(frames, "run cancelled");
                self.set_status_message("Sort cancelled".to_string());
            }
            RunOutcome::Failed(message) => {
                warn!(%message, "run failed");
                self.fail(message);
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.set_error_message(format!("Sort failed: {}", message));
        self.last_failure = Some(message);
    }

    /// The elapsed-time readout.
    pub fn readout(&self) -> String {
        match self.last_result {
            Some(ref result) => result.readout(),
            None => "Execution Time: 0.000 sec".to_string(),
        }
    }

    /// Current step delay.
    pub fn speed(&self) -> Duration {
        self.speed.get()
    }

    /// Lengthen (`steps > 0`) or shorten the step delay by whole steps.
    ///
    /// Applies to a running playback from its next frame.
    pub fn adjust_speed(&mut self, steps: i32) {
        let current = self.speed.get().as_secs_f64();
        let requested = current + f64::from(steps) * self.settings.speed_step;
        let secs = self.settings.clamp_speed(requested);
        match Duration::try_from_secs_f64(secs) {
            Ok(delay) => self.speed.set(delay),
            Err(e) => warn!(secs, error = %e, "ignoring unrepresentable speed"),
        }
    }

    /// Select an algorithm for the next run.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn next_algorithm(&mut self) {
        self.algorithm = self.algorithm.next();
    }

    pub fn prev_algorithm(&mut self) {
        self.algorithm = self.algorithm.prev();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit, stopping any run.
    pub fn quit(&mut self) {
        if let Some(run) = self.run.take() {
            run.cancel();
        }
        self.running = false;
    }

    /// Export the current chart state and last result to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };

        let export = serde_json::json!({
            "algorithm": self.algorithm,
            "speed": self.speed().as_secs_f64(),
            "sorting": self.is_sorting(),
            "data": data,
            "frame": self.frame,
            "last_result": self.last_result,
            "last_failure": self.last_failure,
        });

        let json = serde_json::to_string_pretty(&export)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}
