//! Adaptive-width integer columns for report lines.
//!
//! Every column of a report line is a run of integers sharing one width. The
//! width is the digit count of a reference value when one is given, otherwise
//! the digit count of the run's total. Zero entries print as blanks so sparse
//! vectors (distributions, patterns) stay readable.

/// Format a run of integers as one space-separated column group.
///
/// # Example
/// ```
/// # use palette_core::format::format_entry;
/// assert_eq!(format_entry([8, 13, 15], None), " 8 13 15");
/// assert_eq!(format_entry([2, 0, 1], None), "2   1");
/// assert_eq!(format_entry([7], Some(100)), "  7");
/// ```
pub fn format_entry<I>(values: I, reference: Option<i64>) -> String
where
    I: IntoIterator<Item = i64>,
{
    let values: Vec<i64> = values.into_iter().collect();

    let width = match reference {
        Some(reference) if reference > 0 => digits(reference),
        _ => {
            let total: i64 = values.iter().sum();
            if total > 0 { digits(total) } else { 1 }
        }
    };

    values
        .iter()
        .map(|&value| {
            if value == 0 {
                " ".repeat(width)
            } else {
                format!("{value:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a single integer; shorthand for a one-element [`format_entry`].
pub fn format_value(value: i64, reference: Option<i64>) -> String {
    format_entry([value], reference)
}

fn digits(value: i64) -> usize {
    value.to_string().len()
}
