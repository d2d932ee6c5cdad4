// src/domain/appreciation.rs

use regex::Regex;
use std::sync::LazyLock;

// " rose 3.2%" -> ("rose", "3.2")
static TREND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([a-zA-Z]+)\s(\d*\.?\d+)%").unwrap());

const RISING: &[&str] = &["increased", "increase", "rise", "rose", "risen"];
const FALLING: &[&str] = &["fall", "fell", "fallen", "decrease", "decreased"];

/// Read a neighborhood blurb such as "Home values have fallen 2.1% over the
/// past year" and return the signed yearly rate (`-2.1`).
///
/// Only the first "<word> <number>%" phrase is considered. An unknown verb, or
/// no phrase at all, yields `0.0`.
pub fn interpret_appreciation(neighborhood_text: &str) -> f64 {
    let Some(caps) = TREND_RE.captures(neighborhood_text) else {
        return 0.0;
    };

    let direction = caps[1].to_ascii_lowercase();
    let magnitude: f64 = caps[2].parse().unwrap_or(0.0);

    if RISING.contains(&direction.as_str()) {
        magnitude
    } else if FALLING.contains(&direction.as_str()) {
        -magnitude
    } else {
        0.0
    }
}
