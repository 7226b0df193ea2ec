/// Compound-unit duration text such as `2h30m15s`, `1.5s` or `500ms`
use std::time::Duration;

use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;
// Largest value a signed 64-bit nanosecond count can hold
const MAX_NANOS: u64 = i64::MAX as u64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("negative duration {0:?}")]
    Negative(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        // U+00B5 micro sign and U+03BC greek mu
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Nanoseconds for one `<whole>.<fraction>` number scaled by `scale`.
/// Returns `None` on overflow.
fn component_nanos(whole: &str, fraction: &str, scale: u64) -> Option<u64> {
    let whole = if whole.is_empty() { 0 } else { whole.parse::<u64>().ok()? };
    let mut nanos = whole.checked_mul(scale)?;

    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for digit in fraction.bytes() {
        // digits past 10^19 cannot change the result at nanosecond resolution
        if denominator >= 10u128.pow(19) {
            break;
        }
        numerator = numerator * 10 + u128::from(digit - b'0');
        denominator *= 10;
    }
    let fractional = numerator * u128::from(scale) / denominator;
    nanos = nanos.checked_add(u64::try_from(fractional).ok()?)?;
    Some(nanos)
}

/// Parse a duration such as `90s`, `5m`, `2h30m15s`, `1.5h` or `300ms`.
///
/// A bare `0` is accepted without a unit. Negative values other than zero
/// are rejected, as are totals beyond `i64::MAX` nanoseconds.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let mut rest = input;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        rest = after;
        let mut fraction = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after) = split_digits(after_dot);
            fraction = digits;
            rest = after;
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after) = rest.split_at(unit_end);
        rest = after;
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let component = component_nanos(whole, fraction, scale).ok_or_else(invalid)?;
        total = total
            .checked_add(component)
            .filter(|&nanos| nanos <= MAX_NANOS)
            .ok_or_else(invalid)?;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(input.to_string()));
    }
    Ok(Duration::from_nanos(total))
}

fn fraction_text(value: u128, digits: usize) -> String {
    if value == 0 {
        return String::new();
    }
    let padded = format!("{value:0digits$}");
    format!(".{}", padded.trim_end_matches('0'))
}

/// Render a duration as `25m0s`, `1h0m0s`, `1.5s`, `500ms`, `0s`.
///
/// Below one second the largest unit that keeps the leading digit non-zero is
/// used. From one second up, hours are shown when non-zero and minutes are
/// shown whenever the value reaches a minute.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        let (scale, digits, unit) = if nanos < 1_000 {
            (1, 0, "ns")
        } else if nanos < 1_000_000 {
            (1_000, 3, "\u{b5}s")
        } else {
            (1_000_000, 6, "ms")
        };
        return format!("{}{}{}", nanos / scale, fraction_text(nanos % scale, digits), unit);
    }

    let secs = nanos / NANOS_PER_SEC;
    let hours = secs / 3600;
    let minutes = secs / 60 % 60;
    let seconds = secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if secs >= 60 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&format!(
        "{seconds}{}s",
        fraction_text(nanos % NANOS_PER_SEC, 9)
    ));
    out
}
