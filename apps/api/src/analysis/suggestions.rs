use std::collections::HashSet;

const MAX_SUGGESTIONS: usize = 5;
const MAX_FOCUS_SKILLS: usize = 3;

/// Builds improvement suggestions from the match score and skill gaps.
///
/// Order is fixed: low-score warning, focus skills, score-band message, then
/// the two general tips. A skill is missing when no extracted skill equals it
/// case-insensitively.
pub fn generate_suggestions<'a>(
    extracted: impl IntoIterator<Item = &'a String>,
    required: &[String],
    match_percentage: f64,
) -> Vec<String> {
    let extracted_lower: HashSet<String> =
        extracted.into_iter().map(|s| s.to_lowercase()).collect();
    let missing: Vec<&str> = required
        .iter()
        .filter(|skill| !extracted_lower.contains(&skill.to_lowercase()))
        .map(String::as_str)
        .collect();

    let mut suggestions = Vec::new();

    if match_percentage < 60.0 {
        suggestions.push("Consider developing more skills that match the job requirements.".to_string());
    }

    if !missing.is_empty() {
        let focus: Vec<&str> = missing.iter().take(MAX_FOCUS_SKILLS).copied().collect();
        suggestions.push(format!("Focus on learning: {}", focus.join(", ")));
    }

    let band = if match_percentage >= 80.0 {
        "Great match! Highlight your relevant skills more prominently."
    } else if match_percentage >= 60.0 {
        "Good match. Consider adding a few more relevant skills to strengthen your profile."
    } else {
        "Consider taking courses or projects in the missing skill areas."
    };
    suggestions.push(band.to_string());

    suggestions.push("Ensure all relevant skills are clearly mentioned in your resume.".to_string());
    suggestions.push("Quantify your achievements and experience for better impact.".to_string());

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_low_score_with_missing_skill_order() {
        let out = generate_suggestions(&strings(&["Python"]), &strings(&["python", "Docker"]), 50.0);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], "Consider developing more skills that match the job requirements.");
        assert_eq!(out[1], "Focus on learning: Docker");
        assert_eq!(out[2], "Consider taking courses or projects in the missing skill areas.");
        assert_eq!(out[3], "Ensure all relevant skills are clearly mentioned in your resume.");
        assert_eq!(out[4], "Quantify your achievements and experience for better impact.");
    }

    #[test]
    fn test_focus_lists_first_three_missing_in_caller_casing() {
        let out = generate_suggestions(
            &strings(&[]),
            &strings(&["Rust", "Go", "Kafka", "Redis"]),
            0.0,
        );
        assert_eq!(out[1], "Focus on learning: Rust, Go, Kafka");
    }

    #[test]
    fn test_great_match_band() {
        let out = generate_suggestions(&strings(&["Python"]), &strings(&["python"]), 100.0);
        assert_eq!(
            out,
            strings(&[
                "Great match! Highlight your relevant skills more prominently.",
                "Ensure all relevant skills are clearly mentioned in your resume.",
                "Quantify your achievements and experience for better impact.",
            ])
        );
    }

    #[test]
    fn test_good_match_band_boundaries() {
        let out = generate_suggestions(&strings(&[]), &[], 60.0);
        assert!(out[0].starts_with("Good match."));
        let out = generate_suggestions(&strings(&[]), &[], 79.99);
        assert!(out[0].starts_with("Good match."));
        let out = generate_suggestions(&strings(&[]), &[], 80.0);
        assert!(out[0].starts_with("Great match!"));
    }

    #[test]
    fn test_no_requirements_has_no_focus_line() {
        let out = generate_suggestions(&strings(&["Python"]), &[], 0.0);
        assert!(out.iter().all(|s| !s.starts_with("Focus on learning")));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_partial_match_still_counts_as_missing() {
        // Suggestions use exact comparison, unlike the scorer
        let out = generate_suggestions(&strings(&["React"]), &strings(&["React Native"]), 100.0);
        assert_eq!(out[0], "Focus on learning: React Native");
        assert!(out.len() <= 5);
    }
}
