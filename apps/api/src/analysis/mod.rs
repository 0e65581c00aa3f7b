//! Resume analysis: skill extraction, section summaries, scoring, suggestions.
//!
//! The heuristic pipeline in [`analyze`] is synchronous and pure over the input
//! text, the static skill dictionary and the loaded NLP model. The
//! [`backend::ResumeAnalyzer`] implementations decide whether that pipeline or
//! an LLM answers a request.

pub mod backend;
pub mod dictionary;
pub mod extractor;
pub mod handlers;
pub mod llm;
pub mod normalize;
pub mod prompts;
pub mod scoring;
pub mod suggestions;
pub mod summarizer;

use std::collections::BTreeSet;

use tracing::info;

use crate::analysis::extractor::SkillAnalyzer;
use crate::analysis::normalize::parse_required_skills;
use crate::analysis::scoring::calculate_match_percentage;
use crate::analysis::suggestions::generate_suggestions;
use crate::models::analysis::AnalysisResult;

/// Runs the full analysis for one resume against a comma-separated requirement list.
pub fn analyze(
    analyzer: &dyn SkillAnalyzer,
    resume_text: &str,
    job_requirements: &str,
) -> AnalysisResult {
    let required = parse_required_skills(job_requirements);

    let extracted = analyzer.extract_skills(resume_text);
    let experience_summary = analyzer.summarize_experience(resume_text);
    let education_summary = analyzer.summarize_education(resume_text);

    let (matched_skills, missing_skills) = match_required_skills(&extracted, &required);
    let match_percentage = calculate_match_percentage(&extracted, &required);
    let suggestions = generate_suggestions(&extracted, &required, match_percentage);

    info!(
        backend = analyzer.backend(),
        extracted = extracted.len(),
        required = required.len(),
        matched = matched_skills.len(),
        missing = missing_skills.len(),
        match_percentage,
        "Resume analyzed"
    );

    AnalysisResult {
        extracted_skills: extracted.into_iter().collect(),
        matched_skills,
        missing_skills,
        match_percentage,
        suggestions,
        experience_summary,
        education_summary,
    }
}

/// Splits required skills into matched (reported as the extracted skill that
/// satisfied them) and missing (reported in the caller's casing).
///
/// An exact case-insensitive match wins; otherwise the first extracted skill
/// that contains the requirement or is contained in it. Matched skills are
/// deduplicated, keeping first-seen order.
pub fn match_required_skills(
    extracted: &BTreeSet<String>,
    required: &[String],
) -> (Vec<String>, Vec<String>) {
    let mut matched: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    for req in required {
        let req_lower = req.to_lowercase();

        let exact = extracted.iter().find(|s| s.to_lowercase() == req_lower);
        let hit = exact.or_else(|| {
            extracted.iter().find(|s| {
                let skill_lower = s.to_lowercase();
                req_lower.contains(&skill_lower) || skill_lower.contains(&req_lower)
            })
        });

        match hit {
            Some(skill) => {
                if !matched.contains(skill) {
                    matched.push(skill.clone());
                }
            }
            None => missing.push(req.clone()),
        }
    }

    (matched, missing)
}
