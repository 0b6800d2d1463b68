use once_cell::sync::Lazy;
use regex::Regex;

// Same digit class the passed-count pattern matches with
static DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("valid digit pattern"));

fn is_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a decimal digit from any script.
///
/// Unicode lays decimal digits out in contiguous runs of ten, zero first,
/// so the offset from the start of the run gives the value.
pub(crate) fn digit_value(c: char) -> Option<u64> {
    if let Some(d) = c.to_digit(10) {
        return Some(u64::from(d));
    }
    if !is_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some(u64::from((c as u32 - start) % 10))
}

/// Value of a run of decimal digits, saturating at `u64::MAX`.
///
/// Returns `None` for empty input or anything that is not a digit.
pub(crate) fn decimal_value(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    let mut overflowed = false;
    for c in digits.chars() {
        let d = digit_value(c)?;
        match value.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(next) => value = next,
            None => overflowed = true,
        }
    }

    Some(if overflowed { u64::MAX } else { value })
}

/// Parses a manual grade the way a lenient integer reader would: surrounding
/// whitespace, a leading sign, `_` between digits and non-ASCII digits are
/// all accepted. Values outside `i64` saturate; callers clamp afterwards.
pub fn parse_grade(text: &str) -> Result<i64, String> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if body.split('_').any(str::is_empty) {
        return Err(format!("invalid grade: '{}'", text));
    }
    let magnitude = decimal_value(&body.replace('_', ""))
        .ok_or_else(|| format!("invalid grade: '{}'", text))?;

    let value = if negative {
        0i64.checked_sub_unsigned(magnitude).unwrap_or(i64::MIN)
    } else {
        i64::try_from(magnitude).unwrap_or(i64::MAX)
    };
    Ok(value)
}
