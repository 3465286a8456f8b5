/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 (to the minute) → reset
pub fn color_for_balance(hours: f64) -> &'static str {
    let mins = (hours * 60.0).round() as i64;
    if mins > 0 {
        GREEN
    } else if mins < 0 {
        RED
    } else {
        RESET
    }
}

/// Color for a day classification label.
pub fn color_for_reason(label: &str) -> &'static str {
    if label.starts_with("holiday") {
        MAGENTA
    } else if label == "Saturday" || label == "Sunday" {
        CYAN
    } else if label == "manual override" {
        YELLOW
    } else {
        RESET
    }
}

/// Grey out an empty value (`--:--`, `00:00`, blank).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00:00" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
