//! Locale-formatted count parsing.

/// Thousands separators stripped before parsing.
const SEPARATORS: &[char] = &[','];

/// Parse a locale-formatted count such as `"1,234"` into a non-negative integer.
///
/// The longest run of leading digits wins (`"12 abc"` reads as 12, `"1.5"`
/// as 1). Empty or non-numeric input yields 0, negative values clamp to 0 and
/// values beyond `u64::MAX` saturate. Never fails.
#[must_use]
pub fn sanitize_count(raw: &str) -> u64 {
    let cleaned: String = raw.chars().filter(|c| !SEPARATORS.contains(c)).collect();
    let s = cleaned.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(u64::from(b - b'0'));
    }

    if negative || !seen_digit { 0 } else { value }
}
