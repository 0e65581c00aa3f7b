//! Skill analyzers — pluggable extraction + summarization backends.
//!
//! `NlpAnalyzer` is used when the NLP model loads at startup, `KeywordAnalyzer`
//! otherwise. The chosen one drives `backend::HeuristicAnalyzer`.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::dictionary::{all_skills, SOFT_SKILLS, TECH_PATTERNS};
use crate::analysis::normalize::title_case;
use crate::analysis::summarizer::{
    split_lines, summarize, EDUCATION_LINES, EDUCATION_SENTENCES, EXPERIENCE_LINES,
    EXPERIENCE_SENTENCES,
};
use crate::nlp::{EntityLabel, NlpModel};

/// Entities longer than this are unlikely to be a literal skill or tool name.
const MAX_ENTITY_WORDS: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap analysis backends without touching the handlers.
pub trait SkillAnalyzer: Send + Sync {
    /// "nlp" | "keyword" — surfaced by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Deduplicated, title-cased skills found in the text.
    fn extract_skills(&self, text: &str) -> BTreeSet<String>;

    fn summarize_experience(&self, text: &str) -> String;

    fn summarize_education(&self, text: &str) -> String;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordAnalyzer — dictionary lookup over lines
// ────────────────────────────────────────────────────────────────────────────

pub struct KeywordAnalyzer;

impl SkillAnalyzer for KeywordAnalyzer {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        finalize(all_skills().filter(|skill| text_lower.contains(skill)))
    }

    fn summarize_experience(&self, text: &str) -> String {
        summarize(split_lines(text), &EXPERIENCE_LINES)
    }

    fn summarize_education(&self, text: &str) -> String {
        summarize(split_lines(text), &EDUCATION_LINES)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// NlpAnalyzer — regex terms + entities + soft skills, sentence summaries
// ────────────────────────────────────────────────────────────────────────────

pub struct NlpAnalyzer {
    model: Arc<NlpModel>,
}

impl NlpAnalyzer {
    pub fn new(model: Arc<NlpModel>) -> Self {
        Self { model }
    }
}

impl SkillAnalyzer for NlpAnalyzer {
    fn backend(&self) -> &'static str {
        "nlp"
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let mut found: Vec<String> = Vec::new();

        for pattern in TECH_PATTERNS.iter() {
            found.extend(pattern.find_iter(text).map(|m| m.as_str().to_string()));
        }

        found.extend(
            self.model
                .entities(text)
                .into_iter()
                .filter(|e| matches!(e.label, EntityLabel::Organization | EntityLabel::Product))
                .filter(|e| e.text.split_whitespace().count() <= MAX_ENTITY_WORDS)
                .map(|e| e.text),
        );

        let text_lower = text.to_lowercase();
        found.extend(
            SOFT_SKILLS
                .iter()
                .filter(|skill| text_lower.contains(*skill))
                .map(|skill| skill.to_string()),
        );

        finalize(found)
    }

    fn summarize_experience(&self, text: &str) -> String {
        summarize(self.model.sentences(text), &EXPERIENCE_SENTENCES)
    }

    fn summarize_education(&self, text: &str) -> String {
        summarize(self.model.sentences(text), &EDUCATION_SENTENCES)
    }
}

/// Trims, title-cases and deduplicates raw matches.
fn finalize<S: AsRef<str>>(raw: impl IntoIterator<Item = S>) -> BTreeSet<String> {
    raw.into_iter()
        .map(|s| title_case(s.as_ref().trim()))
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
