//! LLM-backed analysis: the model reads the resume and requirements and
//! returns the whole `AnalysisResult` as JSON.

use serde_json::Value;
use tracing::info;

use crate::analysis::prompts::{build_analyze_prompt, ANALYZE_SYSTEM};
use crate::analysis::scoring::round2;
use crate::llm_client::{extract_json, LlmClient, LlmError};
use crate::models::analysis::AnalysisResult;

pub struct LlmAnalyzer(pub LlmClient);

impl LlmAnalyzer {
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_requirements: &str,
    ) -> Result<AnalysisResult, LlmError> {
        info!(model = self.0.model(), "Analyzing resume with LLM");

        let prompt = build_analyze_prompt(resume_text, job_requirements);
        let content = self.0.chat(ANALYZE_SYSTEM, &prompt).await?;
        let result = parse_analysis(&content)?;

        info!(
            extracted = result.extracted_skills.len(),
            matched = result.matched_skills.len(),
            missing = result.missing_skills.len(),
            match_percentage = result.match_percentage,
            "Resume analyzed by LLM"
        );
        Ok(result)
    }
}

/// Reads the model's reply into an `AnalysisResult`.
///
/// Missing or mistyped lists become empty, a missing or non-numeric
/// percentage becomes 0, and missing summaries become empty strings. The
/// percentage is clamped to 0..=100 and rounded to two decimals.
pub fn parse_analysis(content: &str) -> Result<AnalysisResult, LlmError> {
    let reply = extract_json(content)?;

    Ok(AnalysisResult {
        extracted_skills: string_list(&reply, "extractedSkills"),
        matched_skills: string_list(&reply, "matchedSkills"),
        missing_skills: string_list(&reply, "missingSkills"),
        match_percentage: reply
            .get("matchPercentage")
            .and_then(Value::as_f64)
            .map(|p| round2(p.clamp(0.0, 100.0)))
            .unwrap_or(0.0),
        suggestions: string_list(&reply, "suggestions"),
        experience_summary: text(&reply, "experienceSummary"),
        education_summary: text(&reply, "educationSummary"),
    })
}

fn string_list(reply: &Value, key: &str) -> Vec<String> {
    reply
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn text(reply: &Value, key: &str) -> String {
    reply
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{completion, spawn_gateway};

    #[test]
    fn test_parse_full_reply() {
        let content = r#"Sure! {
            "extractedSkills": ["Python", "React"],
            "matchedSkills": ["Python"],
            "missingSkills": ["Docker"],
            "matchPercentage": 50,
            "suggestions": ["Learn Docker"],
            "experienceSummary": "5 years of Python",
            "educationSummary": "BSc Computer Science"
        }"#;
        let result = parse_analysis(content).unwrap();
        assert_eq!(result.extracted_skills, vec!["Python", "React"]);
        assert_eq!(result.matched_skills, vec!["Python"]);
        assert_eq!(result.missing_skills, vec!["Docker"]);
        assert_eq!(result.match_percentage, 50.0);
        assert_eq!(result.suggestions, vec!["Learn Docker"]);
        assert_eq!(result.experience_summary, "5 years of Python");
        assert_eq!(result.education_summary, "BSc Computer Science");
    }

    #[test]
    fn test_missing_fields_default() {
        let result = parse_analysis(r#"{"experienceSummary": "Engineer"}"#).unwrap();
        assert!(result.extracted_skills.is_empty());
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.suggestions.is_empty());
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.experience_summary, "Engineer");
        assert_eq!(result.education_summary, "");
    }

    #[test]
    fn test_mistyped_fields_default() {
        let result = parse_analysis(
            r#"{"extractedSkills": "Python, React", "matchPercentage": "high", "suggestions": ["ok", 3, null]}"#,
        )
        .unwrap();
        assert!(result.extracted_skills.is_empty());
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.suggestions, vec!["ok"]);
    }

    #[test]
    fn test_percentage_is_clamped_and_rounded() {
        assert_eq!(
            parse_analysis(r#"{"matchPercentage": 133.3}"#).unwrap().match_percentage,
            100.0
        );
        assert_eq!(
            parse_analysis(r#"{"matchPercentage": -5}"#).unwrap().match_percentage,
            0.0
        );
        assert_eq!(
            parse_analysis(r#"{"matchPercentage": 66.6666}"#).unwrap().match_percentage,
            66.67
        );
    }

    #[test]
    fn test_reply_without_json_is_error() {
        let err = parse_analysis("I cannot help with that.").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to extract JSON from AI response. Response: I cannot"));
    }

    #[tokio::test]
    async fn test_analyze_round_trip_through_gateway() {
        let reply = completion(
            "```json\n{\"extractedSkills\": [\"Rust\"], \"matchPercentage\": 100}\n```",
        );
        let (config, seen) = spawn_gateway(200, reply).await;
        let analyzer = LlmAnalyzer(LlmClient::new(&config).unwrap());

        let result = analyzer.analyze("Rust developer", "rust").await.unwrap();
        assert_eq!(result.extracted_skills, vec!["Rust"]);
        assert_eq!(result.match_percentage, 100.0);
        assert!(result.missing_skills.is_empty());

        let seen = seen.lock().unwrap();
        let body = &seen[0].1;
        assert_eq!(body["messages"][0]["content"], ANALYZE_SYSTEM);
        assert!(body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .contains("Resume Text:\nRust developer"));
    }
}
