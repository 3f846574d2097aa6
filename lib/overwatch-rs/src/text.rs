//! Helpers for turning the text of the career page into keys and numbers.

/// Millisecond weights of the fields of a `D:H:MM:SS` duration, read right to left.
const COLON_WEIGHTS: [i64; 4] = [1_000, 60_000, 3_600_000, 86_400_000];

/// Duration unit suffixes and their millisecond factors.
const UNIT_FACTORS: [(&str, i64); 4] = [
    ("second", 1_000),
    ("minute", 60_000),
    ("hour", 3_600_000),
    ("day", 86_400_000),
];

/// A value read from a stat cell.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A whole number, like `1,234` or `45%`
    Integer(i64),

    /// A decimal number, like `12.5`
    Float(f64),

    /// A duration in milliseconds
    Duration(i64),

    /// The text was not a number.
    ///
    /// Serialized as `null`.
    Invalid,
}

impl StatValue {
    /// Get this value as a float, `NaN` if invalid.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) | Self::Duration(n) => n as f64,
            Self::Float(n) => n,
            Self::Invalid => f64::NAN,
        }
    }

    /// Get this value as an integer, if it is not a float or invalid.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Integer(n) | Self::Duration(n) => Some(n),
            Self::Float(_) | Self::Invalid => None,
        }
    }

    /// Check if this is the not-a-number sentinel
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) | Self::Duration(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Invalid => f.write_str("NaN"),
        }
    }
}

/// Turn a label into a snake case key.
///
/// `"Games Won"` becomes `"games_won"` and `"Damage - Most in Game"` becomes `"damage_most_in_game"`.
pub fn sanitize(label: &str) -> String {
    label
        .trim()
        .replace(" - ", "_")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Cast the text of a stat into a number or duration.
pub fn cast(value: &str) -> StatValue {
    let value = value.trim();

    if value.find('.').map_or(false, |i| i > 0) {
        return parse_leading_float(value).map_or(StatValue::Invalid, StatValue::Float);
    }

    if value.find(':').map_or(false, |i| i > 0) || value.split(' ').count() > 1 {
        return to_timestamp(value);
    }

    parse_leading_int(&value.replace(',', "")).map_or(StatValue::Invalid, StatValue::Integer)
}

/// Decode a duration, either `H:MM:SS` or `<n> <unit>`.
///
/// Unknown units keep the leading number and drop the unit.
pub fn to_timestamp(value: &str) -> StatValue {
    let value = value.trim();

    if value.find(':').map_or(false, |i| i > 0) {
        let mut total: i64 = 0;
        for (field, weight) in value.rsplit(':').zip(COLON_WEIGHTS) {
            match field.trim().parse::<i64>() {
                Ok(n) => total = total.saturating_add(n.saturating_mul(weight)),
                Err(_) => return StatValue::Invalid,
            }
        }
        return StatValue::Duration(total);
    }

    let value = value.strip_suffix('s').unwrap_or(value);
    let count = match parse_leading_int(value) {
        Some(count) => count,
        None => return StatValue::Invalid,
    };

    UNIT_FACTORS
        .iter()
        .find(|(unit, _)| value.ends_with(unit))
        .map_or(StatValue::Integer(count), |(_, factor)| {
            StatValue::Duration(count.saturating_mul(*factor))
        })
}

/// Parse the integer at the start of a str, ignoring whatever follows it.
pub(crate) fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let end = leading_number_len(value, false);
    value[..end].parse().ok()
}

/// Parse the decimal number at the start of a str, ignoring whatever follows it.
fn parse_leading_float(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let end = leading_number_len(value, true);
    value[..end].parse().ok()
}

/// Get the byte len of the numeric prefix of a str.
fn leading_number_len(value: &str, allow_point: bool) -> usize {
    let mut seen_point = false;
    let mut len = 0;
    for (i, c) in value.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            '.' if allow_point && !seen_point => seen_point = true,
            _ => break,
        }
        len = i + c.len_utf8();
    }

    len
}
