//! Travel time formatting

/// Format a duration in whole minutes as `"Hh Mm"`, or `"Mm"` under an hour
#[must_use]
pub fn format_travel_time(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

/// Convert a fractional minute count to whole minutes for display
///
/// Rounds to the nearest minute. Negative and NaN inputs become 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn minutes_from_f64(minutes: f64) -> u32 {
    if minutes.is_nan() || minutes <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX
    minutes.round() as u32
}
