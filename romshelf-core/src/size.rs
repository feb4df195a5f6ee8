//! Size label normalization.
//!
//! Listings publish sizes as free text ("1.2 GiB", "700 MiB"). Sorting needs
//! a number, so labels are normalized to mebibytes. Anything unreadable is 0,
//! which sorts as the smallest size.

const GIB_MARKER: &str = "GiB";
const MIB_MARKER: &str = "MiB";

/// Normalize a size label to mebibytes.
///
/// ```
/// use romshelf_core::size::to_comparable_mb;
///
/// assert_eq!(to_comparable_mb(Some("2 GiB")), 2048.0);
/// assert_eq!(to_comparable_mb(Some("500 MiB")), 500.0);
/// assert_eq!(to_comparable_mb(Some("")), 0.0);
/// assert_eq!(to_comparable_mb(None), 0.0);
/// ```
pub fn to_comparable_mb(label: Option<&str>) -> f64 {
    let Some(label) = label else {
        return 0.0;
    };
    let Some(value) = leading_number(label) else {
        return 0.0;
    };

    let mb = if label.contains(GIB_MARKER) {
        value * 1024.0
    } else if label.contains(MIB_MARKER) {
        value
    } else {
        return 0.0;
    };

    // -0 compares equal to 0 in size sorts.
    if mb.is_finite() && mb != 0.0 { mb } else { 0.0 }
}

/// Render a mebibyte count compactly (e.g. "512.0 MiB", "3.4 GiB").
pub fn format_mb(mb: f64) -> String {
    if mb >= 1024.0 {
        format!("{:.1} GiB", mb / 1024.0)
    } else {
        format!("{mb:.1} MiB")
    }
}

/// Parse the longest floating point prefix after leading whitespace.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// exponent only when digits follow it. Returns `None` without any mantissa
/// digits.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut digits = 0;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
