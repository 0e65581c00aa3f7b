use serde::Serialize;

/// Skill-gap analysis returned by `POST /analyze`.
///
/// `matched_skills`/`missing_skills` come from the handler-level comparison and
/// `match_percentage` from the scorer. The two are computed independently and
/// are not guaranteed to agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub extracted_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64, // 0.0 – 100.0, 2 decimals
    pub suggestions: Vec<String>,
    pub experience_summary: String,
    pub education_summary: String,
}
