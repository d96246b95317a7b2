//! Selected-year validation and clamping.
//!
//! The timeline covers a fixed historical range. Callers that accept a year
//! from arbitrary input (sliders, text fields, the address bar) normalize it
//! here before using it.

/// Earliest selectable year.
pub const MIN_YEAR: i32 = -2000;

/// Latest selectable year.
pub const MAX_YEAR: i32 = 2000;

/// Year used when the input is not a finite number.
pub const DEFAULT_YEAR: i32 = 1000;

/// Rounds to the nearest integer, ties towards positive infinity.
///
/// `f64::round` rounds ties away from zero, which disagrees for negative
/// halves (`-2.5` must become `-2`).
fn round_half_up(input: f64) -> f64 {
    let floor = input.floor();
    if input - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Normalizes any numeric input to a year within `[MIN_YEAR, MAX_YEAR]`.
///
/// Non-finite input yields [`DEFAULT_YEAR`]. Never panics.
pub fn clamp_year(input: f64) -> i32 {
    if !input.is_finite() {
        return DEFAULT_YEAR;
    }

    round_half_up(input).clamp(MIN_YEAR as f64, MAX_YEAR as f64) as i32
}

/// True iff `input` is finite and already within `[MIN_YEAR, MAX_YEAR]`.
///
/// No rounding is applied: `2000.4` is not valid even though it clamps to
/// `2000`.
pub fn is_valid_year(input: f64) -> bool {
    input.is_finite() && input >= MIN_YEAR as f64 && input <= MAX_YEAR as f64
}

/// Renders a year as a plain base-10 integer (`-500`, `0`, `1492`).
///
/// The value is rounded like [`clamp_year`] but not clamped. Non-finite
/// input renders as [`DEFAULT_YEAR`].
pub fn format_year_for_display(input: f64) -> String {
    if !input.is_finite() {
        return DEFAULT_YEAR.to_string();
    }

    // `as` saturates for magnitudes beyond i64.
    format!("{}", round_half_up(input) as i64)
}
