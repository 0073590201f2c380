//! # Field Normalizer
//!
//! Cleans free-text recipe fields into canonical forms used for keyword
//! matching. Every function here is total: bad input maps to an empty string
//! or zero rather than an error.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex =
        Regex::new(r"[^a-z0-9\s]").expect("Non-alphanumeric pattern should be valid");
    static ref ARTICLES: Regex =
        Regex::new(r"\b(?:a|an|the)\b").expect("Article pattern should be valid");
    static ref FIRST_NUMBER: Regex =
        Regex::new(r"[0-9]+").expect("Number pattern should be valid");
}

/// Markers that turn the parsed number into hours
const HOUR_MARKERS: [&str; 2] = ["hour", "hr"];

/// Clean and normalize an ingredient name.
///
/// Lowercases, strips everything but ASCII letters, digits and whitespace,
/// drops the standalone articles "a", "an" and "the", and collapses the
/// remaining whitespace to single spaces.
///
/// ```
/// use smartmeal_preprocess::normalize::clean_ingredient_name;
///
/// assert_eq!(clean_ingredient_name("A Ripe TOMATO!"), "ripe tomato");
/// ```
pub fn clean_ingredient_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lowered, "");
    let without_articles = ARTICLES.replace_all(&stripped, " ");
    without_articles
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a free-text duration into minutes.
///
/// Only the first run of digits is read. If the text mentions hours anywhere
/// the whole value is scaled by 60, so "1 hour 30 min" parses as 60.
pub fn parse_time_minutes(raw: Option<&str>) -> u32 {
    let text = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return 0,
    };

    let minutes = match FIRST_NUMBER.find(text) {
        // Digit-only match, so the only parse failure is overflow
        Some(m) => m.as_str().parse::<u32>().unwrap_or(u32::MAX),
        None => return 0,
    };

    let lowered = text.to_lowercase();
    if HOUR_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        minutes.saturating_mul(60)
    } else {
        minutes
    }
}
