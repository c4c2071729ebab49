//! Duration formatting for notification text.

/// Format a duration the way it appears in alert messages: only the units
/// that carry information, largest first, with singular/plural agreement.
///
/// # Examples
///
/// ```
/// use vedetta_common::fmt::format_duration_long;
///
/// assert_eq!(format_duration_long(125), "2 minuti, 5 secondi");
/// assert_eq!(format_duration_long(1), "1 secondo");
/// ```
pub fn format_duration_long(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut result = String::new();
    if days > 0 {
        result.push_str(&format!(
            "{days} {}, ",
            if days != 1 { "giorni" } else { "giorno" }
        ));
    }
    if hours > 0 || days > 0 {
        result.push_str(&format!(
            "{hours} {}, ",
            if hours != 1 { "ore" } else { "ora" }
        ));
    }
    if minutes > 0 || hours > 0 || days > 0 {
        result.push_str(&format!(
            "{minutes} {}, ",
            if minutes != 1 { "minuti" } else { "minuto" }
        ));
    }
    result.push_str(&format!(
        "{seconds} {}",
        if seconds != 1 { "secondi" } else { "secondo" }
    ));

    result
}

/// Compact `1h 2m 5s` form used in recovery durations.
pub fn format_duration_short(total_secs: u64) -> String {
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut result = String::new();
    if hours > 0 {
        result.push_str(&format!("{hours}h "));
    }
    if minutes > 0 || hours > 0 {
        result.push_str(&format!("{minutes}m "));
    }
    result.push_str(&format!("{seconds}s"));

    result
}
