//! Skill dictionary — the static reference list of known skill terms.
//!
//! Every entry is lowercase. Order is preserved so iteration is deterministic.

use std::sync::LazyLock;

use regex::Regex;

pub const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node.js",
    "sql",
    "mongodb",
    "docker",
    "kubernetes",
    "aws",
    "git",
    "linux",
    "html",
    "css",
    "typescript",
    "angular",
    "vue",
    "django",
    "flask",
    "spring",
    "machine learning",
    "data science",
    "tensorflow",
    "pytorch",
    "rest api",
    "graphql",
    "microservices",
    "ci/cd",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem-solving",
    "time management",
    "adaptability",
    "creativity",
    "critical thinking",
    "project management",
    "collaboration",
    "negotiation",
    "presentation",
];

/// Technical-term alternations scanned by the NLP-backed analyzer.
const TECH_PATTERN_SOURCES: [&str; 4] = [
    r"(?i)\b(python|java|javascript|react|node\.?js?|sql|mongodb|docker|kubernetes|aws|git|linux)\b",
    r"(?i)\b(html|css|typescript|angular|vue|django|flask|spring)\b",
    r"(?i)\b(machine learning|data science|tensorflow|pytorch)\b",
    r"(?i)\b(rest api|graphql|microservices|ci/cd)\b",
];

/// Compiled once per process. The sources are literals, so compilation cannot fail.
pub static TECH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TECH_PATTERN_SOURCES
        .iter()
        .filter_map(|src| match Regex::new(src) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!("Invalid technical skill pattern {src}: {e}");
                None
            }
        })
        .collect()
});

/// Technical then soft skills, in dictionary order.
pub fn all_skills() -> impl Iterator<Item = &'static str> {
    TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS.iter()).copied()
}
