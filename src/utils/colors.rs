/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

pub const EMPTY_STAMP: &str = "--:--";

/// Check-in stamps in green, check-out stamps in red, missing ones in grey.
pub fn colorize_in_out(value: Option<&str>, is_in: bool) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => {
            if is_in {
                format!("{GREEN}{v}{RESET}")
            } else {
                format!("{RED}{v}{RESET}")
            }
        }
        _ => format!("{GREY}{EMPTY_STAMP}{RESET}"),
    }
}

/// Score color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn colorize_score(value: i64) -> String {
    let color = if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        GREY
    };
    format!("{color}{value}{RESET}")
}

pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format!("{YELLOW}{v}{RESET}"),
        _ => format!("{GREY}-{RESET}"),
    }
}
