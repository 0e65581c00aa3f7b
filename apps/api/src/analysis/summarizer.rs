//! Section summarizer — keyword-tagged line/sentence filtering for the
//! experience and education summaries.

/// Parameters for one summary: which units to keep and how to join them.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRule {
    pub keywords: &'static [&'static str],
    pub max_items: usize,
    pub joiner: &'static str,
    /// Returned when no unit matches, so the field is never empty.
    pub fallback: &'static str,
}

pub const EXPERIENCE_SENTENCES: SummaryRule = SummaryRule {
    keywords: &[
        "experience",
        "worked",
        "position",
        "role",
        "responsibility",
        "achieved",
        "developed",
    ],
    max_items: 3,
    joiner: ". ",
    fallback: "Work experience details found in resume",
};

pub const EXPERIENCE_LINES: SummaryRule = SummaryRule {
    keywords: &["experience", "work", "employment", "position", "role"],
    max_items: 3,
    joiner: " ",
    fallback: "Experience details found in resume",
};

pub const EDUCATION_SENTENCES: SummaryRule = SummaryRule {
    keywords: &[
        "education",
        "degree",
        "bachelor",
        "master",
        "phd",
        "university",
        "college",
        "diploma",
    ],
    max_items: 2,
    joiner: ". ",
    fallback: "Education details found in resume",
};

pub const EDUCATION_LINES: SummaryRule = SummaryRule {
    keywords: &[
        "education",
        "degree",
        "bachelor",
        "master",
        "phd",
        "university",
        "college",
    ],
    max_items: 2,
    joiner: " ",
    fallback: "Education details found in resume",
};

/// Keeps the first `max_items` units mentioning any keyword, in document order.
pub fn summarize<'a>(units: impl IntoIterator<Item = &'a str>, rule: &SummaryRule) -> String {
    let kept: Vec<&str> = units
        .into_iter()
        .map(str::trim)
        .filter(|unit| {
            let lower = unit.to_lowercase();
            rule.keywords.iter().any(|kw| lower.contains(kw))
        })
        .take(rule.max_items)
        .collect();

    if kept.is_empty() {
        rule.fallback.to_string()
    } else {
        kept.join(rule.joiner)
    }
}

pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}
