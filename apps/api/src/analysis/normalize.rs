/// Comparison form of a skill or text fragment: trimmed and lower-cased.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Title-cases a skill for presentation.
///
/// The first letter of every alphabetic run is upper-cased and the rest of the
/// run lower-cased, so `node.js` becomes `Node.Js` and `ci/cd` becomes `Ci/Cd`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Splits a comma-separated requirement list, trimming each piece and dropping
/// empties. Duplicates and order are preserved.
pub fn parse_required_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
