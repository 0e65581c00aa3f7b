//! NLP capability — sentence segmentation and lexicon-backed entity recognition.
//!
//! The model is loaded once at startup from a JSON entity lexicon:
//!
//! ```json
//! { "organization": ["google", "apache"], "product": ["jira", "postgres"] }
//! ```
//!
//! When loading fails the service runs with the keyword-only analyzer instead.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read NLP model at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid NLP model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("NLP model contains no entities")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Organization,
    Product,
}

/// A recognized entity span, carrying the text exactly as it appears in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Deserialize)]
struct EntityLexicon {
    #[serde(default)]
    organization: Vec<String>,
    #[serde(default)]
    product: Vec<String>,
}

/// Read-only language model shared by all requests.
#[derive(Debug)]
pub struct NlpModel {
    /// (lowercase phrase, label), longest phrases first.
    phrases: Vec<(String, EntityLabel)>,
}

impl NlpModel {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let lexicon: EntityLexicon = serde_json::from_str(raw)?;

        let mut phrases: Vec<(String, EntityLabel)> = lexicon
            .organization
            .iter()
            .map(|p| (p, EntityLabel::Organization))
            .chain(lexicon.product.iter().map(|p| (p, EntityLabel::Product)))
            .map(|(p, label)| (p.trim().to_lowercase(), label))
            .filter(|(p, _)| !p.is_empty())
            .collect();

        if phrases.is_empty() {
            return Err(ModelError::Empty);
        }

        phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        phrases.dedup_by(|a, b| a.0 == b.0);

        debug!("NLP model loaded with {} entity phrases", phrases.len());
        Ok(Self { phrases })
    }

    pub fn entity_count(&self) -> usize {
        self.phrases.len()
    }

    /// Splits text into sentences.
    ///
    /// Line breaks always end a sentence. Within a line a sentence ends after
    /// `.`, `!` or `?` followed by whitespace or the end of the line, so
    /// decimals such as `3.5` stay intact.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        for line in text.lines() {
            let mut start = 0;
            let mut chars = line.char_indices().peekable();
            while let Some((i, c)) = chars.next() {
                if matches!(c, '.' | '!' | '?') {
                    let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
                    if at_boundary {
                        let end = i + c.len_utf8();
                        push_trimmed(&mut out, &line[start..end]);
                        start = end;
                    }
                }
            }
            push_trimmed(&mut out, &line[start..]);
        }
        out
    }

    /// Finds lexicon entities as whole-word, case-insensitive matches.
    ///
    /// Overlapping matches resolve to the earliest, then longest, span.
    /// Results are in document order.
    pub fn entities(&self, text: &str) -> Vec<Entity> {
        let haystack = text.to_lowercase();
        let mut spans: Vec<(usize, usize, EntityLabel)> = Vec::new();

        for (phrase, label) in &self.phrases {
            for (start, _) in haystack.match_indices(phrase.as_str()) {
                let end = start + phrase.len();
                if is_word_boundary(&haystack, start, end) {
                    spans.push((start, end, *label));
                }
            }
        }

        spans.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)));

        let mut entities = Vec::new();
        let mut covered_until = 0;
        for (start, end, label) in spans {
            if start < covered_until {
                continue;
            }
            covered_until = end;
            entities.push(Entity {
                text: haystack[start..end].to_string(),
                label,
            });
        }
        entities
    }
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
