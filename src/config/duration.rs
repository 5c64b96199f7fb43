//! Duration parsing for command-line overrides.

use anyhow::Context;
use std::time::Duration;

const UNITS: [(char, u64); 4] = [('d', 86_400), ('h', 3_600), ('m', 60), ('s', 1)];

/// Parse a duration string like "1h", "30m", "300s", "300" into a [`Duration`].
///
/// Plain numbers are seconds. Supported suffixes are `d`, `h`, `m` and `s`.
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    for (suffix, multiplier) in UNITS {
        if let Some(num_str) = s.strip_suffix(suffix) {
            let value: u64 = num_str
                .parse()
                .with_context(|| format!("Invalid duration value: {s}"))?;
            let secs = value
                .checked_mul(multiplier)
                .with_context(|| format!("Duration out of range: {s}"))?;
            return Ok(Duration::from_secs(secs));
        }
    }

    let secs: u64 = s
        .parse()
        .with_context(|| format!("Invalid duration value: {s}"))?;
    Ok(Duration::from_secs(secs))
}

/// Parse a duration that must be longer than zero, e.g. a logging interval.
pub fn parse_interval(s: &str) -> anyhow::Result<Duration> {
    let interval = parse_duration(s)?;
    if interval.is_zero() {
        anyhow::bail!("Interval must be greater than zero: {s}");
    }
    Ok(interval)
}
