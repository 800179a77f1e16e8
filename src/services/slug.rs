//! Slug generation and scoring. `generate_slug` derives a URL-safe slug
//! from a title; `validate_slug` scores any candidate against the rubric's
//! penalty table; `SlugSync` tracks the title-to-slug auto-link an editor
//! keeps until the author edits the slug by hand.

use crate::models::{IssueKind, SlugIssue, SlugReport};
use crate::services::rubric;

/// Derive a URL slug from a free-text title.
///
/// Lowercases, strips everything outside `[a-z0-9\s-]`, collapses
/// whitespace runs and hyphen runs to single hyphens, trims edge hyphens,
/// and truncates to 75 characters. Total: empty input yields empty output.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let hyphenated = filtered.split_whitespace().collect::<Vec<_>>().join("-");

    let mut collapsed = String::with_capacity(hyphenated.len());
    let mut prev_hyphen = false;
    for c in hyphenated.chars() {
        if c == '-' {
            if !prev_hyphen {
                collapsed.push('-');
            }
            prev_hyphen = true;
        } else {
            collapsed.push(c);
            prev_hyphen = false;
        }
    }

    let trimmed = collapsed.trim_matches('-');
    let truncated: String = trimmed.chars().take(rubric::MAX_SLUG_LENGTH).collect();
    // Truncation can land on a hyphen boundary
    truncated.trim_end_matches('-').to_string()
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Score a candidate slug against URL best practices.
///
/// Penalties accumulate independently from 100, floored at 0; issues are
/// reported in rule order. See `rubric` for the penalty table.
pub fn validate_slug(slug: &str) -> SlugReport {
    let mut issues = Vec::new();
    let mut score: i64 = 100;
    let len = slug.chars().count();
    let tokens: Vec<&str> = slug.split('-').filter(|t| !t.is_empty()).collect();

    if slug.is_empty() {
        score -= rubric::PENALTY_MISSING as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Error,
            message: "Slug is required".to_string(),
            fix: Some("Enter a URL slug for this post".to_string()),
        });
    }

    if len > rubric::MAX_SLUG_LENGTH {
        score -= rubric::PENALTY_TOO_LONG as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Warning,
            message: format!(
                "Slug is {} characters, keep it under {}",
                len,
                rubric::MAX_SLUG_LENGTH
            ),
            fix: Some("Shorten the slug".to_string()),
        });
    }

    if len > rubric::LONG_SLUG_LENGTH && len <= rubric::MAX_SLUG_LENGTH {
        score -= rubric::PENALTY_GETTING_LONG as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Suggestion,
            message: format!("Slug is getting long ({} characters)", len),
            fix: Some(format!(
                "Aim for {} characters or fewer",
                rubric::LONG_SLUG_LENGTH
            )),
        });
    }

    let mut offenders: Vec<char> = Vec::new();
    for c in slug.chars() {
        if !is_slug_char(c) && !offenders.contains(&c) {
            offenders.push(c);
        }
    }
    if !offenders.is_empty() {
        score -= rubric::PENALTY_INVALID_CHARS as i64;
        let listed = offenders
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", ");
        issues.push(SlugIssue {
            kind: IssueKind::Error,
            message: format!("Slug contains invalid characters: {}", listed),
            fix: Some("Use only lowercase letters, numbers, and hyphens".to_string()),
        });
    }

    if slug.chars().any(|c| c.is_ascii_uppercase()) {
        score -= rubric::PENALTY_UPPERCASE as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Warning,
            message: "Slug contains uppercase letters".to_string(),
            fix: Some("Convert the slug to lowercase".to_string()),
        });
    }

    if slug.contains("--") {
        score -= rubric::PENALTY_DOUBLE_HYPHEN as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Warning,
            message: "Slug contains consecutive hyphens".to_string(),
            fix: Some("Collapse repeated hyphens into one".to_string()),
        });
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        score -= rubric::PENALTY_EDGE_HYPHEN as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Warning,
            message: "Slug starts or ends with a hyphen".to_string(),
            fix: Some("Trim leading and trailing hyphens".to_string()),
        });
    }

    let stop_words = tokens.iter().filter(|t| rubric::is_stop_word(t)).count();
    if stop_words > rubric::MAX_STOP_WORDS {
        score -= rubric::PENALTY_STOP_WORDS as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Suggestion,
            message: format!("Slug contains {} stop words", stop_words),
            fix: Some("Drop filler words such as \"the\" and \"and\"".to_string()),
        });
    }

    if slug.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        score -= rubric::PENALTY_LEADING_DIGIT as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Suggestion,
            message: "Slug starts with a number".to_string(),
            fix: Some("Lead with a descriptive word".to_string()),
        });
    }

    if tokens.len() > rubric::MAX_SLUG_WORDS {
        score -= rubric::PENALTY_TOO_MANY_WORDS as i64;
        issues.push(SlugIssue {
            kind: IssueKind::Suggestion,
            message: format!("Slug has {} words", tokens.len()),
            fix: Some(format!("Aim for {} words or fewer", rubric::MAX_SLUG_WORDS)),
        });
    }

    let is_valid = !issues.iter().any(|i| i.kind == IssueKind::Error);
    SlugReport {
        is_valid,
        score: score.clamp(0, 100) as u32,
        issues,
        suggestions: build_suggestions(slug),
    }
}

/// Candidate replacements, in priority order: the cleaned slug, the cleaned
/// slug without stop words (first 6 tokens), and the substantial tokens
/// only (longer than 3 characters, not stop words, first 4).
fn build_suggestions(slug: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let cleaned = generate_slug(slug);
    let tokens: Vec<&str> = cleaned.split('-').filter(|t| !t.is_empty()).collect();

    push_candidate(&mut suggestions, slug, cleaned.clone());

    let no_stop: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !rubric::is_stop_word(t))
        .take(6)
        .collect();
    push_candidate(&mut suggestions, slug, no_stop.join("-"));

    let substantial: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| t.chars().count() > 3 && !rubric::is_stop_word(t))
        .take(4)
        .collect();
    push_candidate(&mut suggestions, slug, substantial.join("-"));

    suggestions
}

fn push_candidate(suggestions: &mut Vec<String>, original: &str, candidate: String) {
    if suggestions.len() < 3
        && !candidate.is_empty()
        && candidate != original
        && !suggestions.contains(&candidate)
    {
        suggestions.push(candidate);
    }
}

/// Title-to-slug auto-link used by editors: the slug follows the title
/// until the author edits it by hand, after which the link is permanently
/// broken for the editing session.
#[derive(Debug, Clone)]
pub struct SlugSync {
    slug: String,
    auto: bool,
}

impl Default for SlugSync {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugSync {
    pub fn new() -> Self {
        Self {
            slug: String::new(),
            auto: true,
        }
    }

    /// Resume editing a stored post; an existing non-empty slug is treated
    /// as manually chosen.
    pub fn with_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let auto = slug.is_empty();
        Self { slug, auto }
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Regenerates the slug from the new title while auto-sync is active.
    pub fn title_changed(&mut self, title: &str) -> &str {
        if self.auto {
            self.slug = generate_slug(title);
        }
        &self.slug
    }

    /// A manual slug edit; disables auto-sync for good.
    pub fn slug_edited(&mut self, slug: impl Into<String>) {
        self.auto = false;
        self.slug = slug.into();
    }
}
