// src/domain/price.rs

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel for a listing that explicitly says "off market".
pub const OFF_MARKET: f64 = -1.0;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([-+] ?)?[0-9]+(,[0-9]+)?$").unwrap());

/// Turn a free-text price ("  $1,250,000 ", "Off Market", "—") into a number.
///
/// Returns [`OFF_MARKET`] for the off-market marker and `0.0` for anything that
/// doesn't look like a plain amount. Callers test `> 0.0` rather than `!= 0.0`.
pub fn normalize_price(text: &str) -> f64 {
    let cleaned = text.trim().trim_start_matches('$').replace(',', "");

    if cleaned.eq_ignore_ascii_case("off market") {
        return OFF_MARKET;
    }

    if !NUMBER_RE.is_match(&cleaned) {
        return 0.0;
    }

    // "- 5" is allowed by the pattern but not by f64::from_str.
    cleaned.replace(' ', "").parse().unwrap_or(0.0)
}
