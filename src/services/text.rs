//! Text statistics over post content: tag stripping, word and sentence
//! counts, heading and image scans, readability, keyword density. Malformed
//! HTML degrades to plain text; nothing here fails.

use crate::services::rubric;
use once_cell::sync::Lazy;
use regex::Regex;

// Statically compiled regexes - avoids runtime panic and improves performance
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex pattern"));
static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h[1-6][\s>]").expect("Invalid heading regex pattern"));
static IMG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<img[^>]*>").expect("Invalid img regex pattern"));
static ALT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)alt\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid alt regex pattern")
});

/// Remove HTML tags, leaving a space in their place so adjacent words do
/// not fuse across element boundaries.
pub fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, " ").into_owned()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentences are the non-empty segments between `.`, `!` and `?` runs.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn avg_words_per_sentence(text: &str) -> f64 {
    let sentences = sentence_count(text);
    if sentences == 0 {
        return 0.0;
    }
    word_count(text) as f64 / sentences as f64
}

/// Simplified Flesch reading ease over tag-stripped text, with a fixed
/// syllables-per-word estimate instead of a syllable counter. Clamped to
/// [0, 100].
pub fn flesch_reading_ease(text: &str) -> f64 {
    let score = 206.835
        - 1.015 * avg_words_per_sentence(text)
        - 84.6 * rubric::AVG_SYLLABLES_PER_WORD;
    score.clamp(0.0, 100.0)
}

/// Count `<h1>`-`<h6>` opening tags in raw HTML.
pub fn heading_count(html: &str) -> usize {
    HEADING_REGEX.find_iter(html).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAltStats {
    pub total: usize,
    pub missing_alt: usize,
}

/// Scan `<img>` tags and count how many lack a non-empty `alt` attribute.
pub fn image_alt_stats(html: &str) -> ImageAltStats {
    let mut total = 0;
    let mut missing_alt = 0;
    for tag in IMG_REGEX.find_iter(html) {
        total += 1;
        let has_alt = ALT_REGEX
            .captures(tag.as_str())
            .and_then(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| !m.as_str().trim().is_empty())
            .unwrap_or(false);
        if !has_alt {
            missing_alt += 1;
        }
    }
    ImageAltStats { total, missing_alt }
}

/// Percentage of word windows that exactly match the keyword phrase.
///
/// Both sides are lowercased and split on whitespace; punctuation is not
/// normalized, so "rust!" does not match "rust". Returns 0 for empty
/// content or an empty keyword.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let haystack = text.to_lowercase();
    let words: Vec<&str> = haystack.split_whitespace().collect();
    let phrase = keyword.to_lowercase();
    let needle: Vec<&str> = phrase.split_whitespace().collect();

    if words.is_empty() || needle.is_empty() || needle.len() > words.len() {
        return 0.0;
    }

    let matches = words
        .windows(needle.len())
        .filter(|w| *w == needle.as_slice())
        .count();

    matches as f64 / words.len() as f64 * 100.0
}

/// Estimated reading time in minutes, minimum 1.
pub fn reading_time_minutes(word_count: usize, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1);
    ((word_count as f64 / wpm as f64).ceil() as u32).max(1)
}
