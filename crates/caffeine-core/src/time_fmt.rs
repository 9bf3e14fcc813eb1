//! Labels for positions on the total-hours axis.

/// Split total hours into a 1-based day, hour of day, and minute.
pub fn day_hour_minute(total_hours: f64) -> (i64, u32, u32) {
    let day = (total_hours / 24.0).floor() as i64 + 1;
    let hour = total_hours.rem_euclid(24.0).floor() as u32;
    let minute = (total_hours * 60.0).rem_euclid(60.0).floor() as u32;
    (day, hour, minute)
}

/// `"Day D HH:MM"` label for chart ticks and the selected time.
pub fn format_total_hours(total_hours: f64) -> String {
    let (day, hour, minute) = day_hour_minute(total_hours);
    format!("Day {day} {hour:02}:{minute:02}")
}

/// `"HH:MM"` for a dose's own time-of-day field.
///
/// Minutes are rounded rather than floored so values stored as
/// `hour + minute / 60` come back exactly.
pub fn format_time_of_day(time_of_day: f64) -> String {
    let hour = time_of_day.trunc() as u32;
    let minute = ((time_of_day - time_of_day.trunc()) * 60.0).round_ties_even() as u32;
    format!("{hour:02}:{minute:02}")
}
