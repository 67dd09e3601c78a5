//! Field formatting for card display
//!
//! Purely textual reshaping; no calendar or check-digit validation is
//! performed here.

/// Format a raw CPF as `XXX.XXX.XXX-XX`.
///
/// Strips every non-digit character first. Input that does not reduce to
/// exactly 11 digits is returned unchanged rather than corrupted.
pub fn format_cpf(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}

/// Reshape a date string into `DD/MM/YYYY`.
///
/// `DD/MM/YYYY` input passes through unchanged. `YYYY-MM-DD` input,
/// optionally followed by a `T...` time suffix, is reordered. Anything
/// else passes through unchanged.
pub fn format_date(raw: &str) -> String {
    if is_display_date(raw) {
        return raw.to_string();
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    if let Some((year, month, day)) = split_iso_date(date_part) {
        return format!("{}/{}/{}", day, month, year);
    }
    raw.to_string()
}

/// Exactly `DD/MM/YYYY`
fn is_display_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit())
}

/// Exactly `YYYY-MM-DD`, split into (year, month, day)
fn split_iso_date(s: &str) -> Option<(&str, &str, &str)> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if shaped {
        Some((&s[..4], &s[5..7], &s[8..10]))
    } else {
        None
    }
}
