use std::time::Duration;

use anyhow::{bail, Result};

/// Suffix to nanoseconds multiplier (order matters: longer suffixes first)
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("µs", 1_000.0),
    ("us", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
];

/// Parse a step delay like "0.1", "100ms", "0.25s" or "500us".
///
/// A bare number is taken as seconds.
pub fn parse_speed(s: &str) -> Result<Duration> {
    let s = s.trim();

    let (number, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, multiplier)| s.strip_suffix(suffix).map(|v| (v, *multiplier)))
        .unwrap_or((s, 1_000_000_000.0));

    let val: f64 = match number.trim().parse() {
        Ok(val) => val,
        Err(_) => bail!("Unknown duration format: {}", s),
    };
    if !val.is_finite() || val < 0.0 {
        bail!("Speed must be a non-negative number of seconds: {}", s);
    }
    Ok(Duration::from_nanos((val * multiplier).round() as u64))
}

/// Format an elapsed run time the way the readout shows it ("1.234").
pub fn format_elapsed(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64())
}

/// Format a step delay for display
pub fn format_speed(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        "0s".to_string()
    } else if nanos < 1_000_000 {
        format!("{:.0}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.0}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
