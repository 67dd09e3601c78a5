//! Influencer number derivation
//!
//! Mints the card's display "influencer number" from the holder's CPF and
//! the current wall-clock time. The value is a display decoration only:
//! it is neither cryptographic nor collision-resistant, and no uniqueness
//! is guaranteed across cards.

/// Derive the influencer number, formatted `XXXX-XX`.
///
/// Deterministic for a fixed `(cpf, now_millis)` pair; the clock is an
/// explicit parameter (`carteira_common::time::now_millis` in production)
/// so the derivation stays testable.
pub fn generate_influencer_id(cpf: &str, now_millis: i64) -> String {
    // Digits only, left-padded to the standard CPF length.
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    let padded = format!("{:0>11}", digits);

    // The middle six CPF digits and the last six decimal digits of the
    // clock seed the mix.
    let cpf_seed: i64 = padded[3..9].parse().unwrap_or(0);
    let time_seed: i64 = now_millis.rem_euclid(1_000_000);

    let combined = (cpf_seed + time_seed) * 31;

    // Constrain to six digits, 100000..=999999.
    let six_digit = combined % 900_000 + 100_000;

    let s = six_digit.to_string();
    format!("{}-{}", &s[..4], &s[4..6])
}
