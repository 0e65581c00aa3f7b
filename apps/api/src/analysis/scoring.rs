//! Match scorer — percentage of required skills covered by the extracted set.

use std::collections::BTreeSet;

use crate::analysis::normalize::normalize;

/// Percentage of `required` skills satisfied by `extracted`, rounded to 2 decimals.
///
/// A required skill is satisfied by an exact (normalized) match, or by the
/// first extracted skill that contains it or is contained in it. An empty
/// requirement list scores 0.0.
pub fn calculate_match_percentage(extracted: &BTreeSet<String>, required: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let extracted: Vec<String> = extracted.iter().map(|s| normalize(s)).collect();

    let matched = required
        .iter()
        .map(|r| normalize(r))
        .filter(|req| {
            extracted.contains(req)
                || extracted
                    .iter()
                    .any(|res| req.contains(res.as_str()) || res.contains(req.as_str()))
        })
        .count();

    round2(matched as f64 / required.len() as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
