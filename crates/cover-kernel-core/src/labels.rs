//! Display labels for risk and status codes.

/// Label returned for any code outside the known tables.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Map a risk code to its display label.
pub fn risk_label(code: i64) -> &'static str {
    match code {
        1 => "Drought",
        2 => "Flood",
        3 => "Storm",
        _ => UNKNOWN_LABEL,
    }
}

/// Map a status code to its display label.
pub fn status_label(code: i64) -> &'static str {
    match code {
        1 => "Active",
        2 => "Expired",
        3 => "Claimed",
        _ => UNKNOWN_LABEL,
    }
}
