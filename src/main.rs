use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use sortscope::data::duration::{format_elapsed, parse_speed};
use sortscope::headless::{self, TraceWriter};
use sortscope::logging::{self, LogTarget};
use sortscope::{events, ui, Algorithm, App, DataGenerator, RunOutcome, Settings};

/// Event poll timeout while a run is streaming frames.
const ACTIVE_POLL: Duration = Duration::from_millis(1);
/// Event poll timeout when idle.
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "sortscope")]
#[command(about = "Terminal visualizer that animates comparison sorts step by step")]
struct Args {
    /// Settings file (TOML); SORTSCOPE_* environment variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial algorithm
    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Delay after each step (e.g. "0.05", "20ms", "0")
    #[arg(short, long, value_parser = parse_speed)]
    speed: Option<Duration>,

    /// Number of values to generate
    #[arg(short = 'n', long)]
    len: Option<usize>,

    /// Seed the generator for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Run one sort without the TUI and print the elapsed time
    #[arg(long)]
    headless: bool,

    /// Write every snapshot as a JSON line (headless only)
    #[arg(long, requires = "headless")]
    trace: Option<PathBuf>,

    /// Write log output to a file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(LogTarget::select(args.log.as_deref(), args.headless))?;

    let mut settings = Settings::load(args.config.as_deref())?;
    apply_overrides(&mut settings, &args)?;

    let generator = match args.seed {
        Some(seed) => DataGenerator::seeded(settings.array_len, settings.value_range(), seed),
        None => DataGenerator::new(settings.array_len, settings.value_range()),
    };

    // Handle headless mode (non-interactive)
    if args.headless {
        return run_headless(&settings, generator, args.trace.as_deref());
    }

    run_tui(settings, generator)
}

/// Layer command-line flags over the loaded settings.
fn apply_overrides(settings: &mut Settings, args: &Args) -> Result<()> {
    if let Some(algorithm) = args.algorithm {
        settings.algorithm = algorithm;
    }
    if let Some(len) = args.len {
        settings.array_len = len;
    }
    if let Some(speed) = args.speed {
        let secs = speed.as_secs_f64();
        // An explicit speed widens the adjustable range rather than failing
        settings.min_speed = settings.min_speed.min(secs);
        settings.max_speed = settings.max_speed.max(secs);
        settings.speed = secs;
    }
    settings.validate().context("invalid settings after command-line overrides")
}

/// Sort one generated array on this thread and report the result.
fn run_headless(settings: &Settings, mut generator: DataGenerator, trace: Option<&Path>) -> Result<()> {
    let data = generator.generate();
    let algorithm = settings.algorithm;

    let outcome = match trace {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create trace file {}", path.display()))?;
            let mut writer = TraceWriter::new(file);
            let outcome = headless::run(algorithm, data, settings.speed(), Some(&mut writer))?;
            let lines = writer.finish()?;
            info!(lines, path = %path.display(), "trace written");
            outcome
        }
        None => headless::run(algorithm, data, settings.speed(), headless::no_trace())?,
    };

    match outcome {
        RunOutcome::Finished(result) => {
            println!("{}: {}", result.algorithm, result.readout());
            println!("Frames: {}", result.frames);
            Ok(())
        }
        RunOutcome::Cancelled { frames } => {
            anyhow::bail!("run stopped after {} frames", frames)
        }
        RunOutcome::Failed(message) => anyhow::bail!("run failed: {}", message),
    }
}

/// Run the TUI until the user quits
fn run_tui(settings: Settings, generator: DataGenerator) -> Result<()> {
    // Query the terminal before raw mode takes over
    let theme = ui::Theme::auto_detect();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(settings, generator, theme);
    info!(algorithm = %app.algorithm, "tui started");

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Stop any run still streaming before the terminal goes away
    app.quit();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Take at most one frame from the playback, then draw it
        app.tick();
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = if app.is_sorting() { ACTIVE_POLL } else { IDLE_POLL };
        if let Some(event) = events::poll_event(timeout)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    if let Some(ref result) = app.last_result {
        info!(elapsed = %format_elapsed(result.elapsed), "last run");
    }
    Ok(())
}
