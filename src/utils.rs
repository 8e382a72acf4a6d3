//! Shared formatting helpers.

/// Compact display form of a domain count, using K/M suffixes above a
/// thousand entries.
///
/// # Examples
/// ```
/// use listforge::utils::format_count;
/// assert_eq!(format_count(42), "42");
/// assert_eq!(format_count(87_310), "87.3K");
/// assert_eq!(format_count(2_100_000), "2.1M");
/// ```
pub fn format_count(count: usize) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
