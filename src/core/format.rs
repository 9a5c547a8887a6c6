//! Display formatting shared by the pages.
//!
//! Money is shown in compact form (`₱4.5M`, `₱450K`) with a configurable
//! currency symbol. Charts from the original design are rendered as text bars.

use chrono::NaiveDate;

/// Formats an amount in millions: `millions(4_500_000, "₱", 1)` -> `"₱4.5M"`.
#[must_use]
pub fn millions(amount: u64, symbol: &str, decimals: usize) -> String {
    // Cast safety: amounts are far below 2^52, display precision is two decimals at most.
    #[allow(clippy::cast_precision_loss)]
    let value = amount as f64 / 1_000_000.0;
    format!("{symbol}{value:.decimals$}M")
}

/// Formats an amount in whole thousands: `thousands(450_000, "₱")` -> `"₱450K"`.
#[must_use]
pub fn thousands(amount: u64, symbol: &str) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = amount as f64 / 1_000.0;
    format!("{symbol}{value:.0}K")
}

/// Short month-day label used for deadlines: `2025-03-20` -> `"Mar 20"`.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Calculates `part` as a percentage of `whole`, 0 when `whole` is 0.
#[must_use]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = part as f64 / whole as f64;
    ratio * 100.0
}

/// Generates a text bar for chart rows and progress cells.
///
/// Creates a bar like: `[████████░░] 80.0%`
///
/// # Arguments
/// * `progress_percent` - Progress percentage (clamped to 0-100 for the bar)
/// * `bar_length` - Length of the bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    // Result is mathematically in [0, length], truncation/sign loss intentional for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}
