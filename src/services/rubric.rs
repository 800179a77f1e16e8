//! The scoring rubric as constant data: check table, thresholds, slug
//! penalties, and the stop-word list. Evaluation logic lives in
//! `services::seo` and `services::slug`; everything tunable is here.

/// Points awarded for a check that passes outright.
pub const GOOD_POINTS: u32 = 10;
/// Points awarded for a check that passes with reservations.
pub const PARTIAL_POINTS: u32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub max_points: u32,
    /// Keyword-gated checks are omitted entirely (numerator and
    /// denominator) when no focus keyword is supplied.
    pub needs_keyword: bool,
}

/// The full check battery, in evaluation order.
pub const CHECKS: [CheckSpec; 10] = [
    CheckSpec {
        id: "title-length",
        name: "Title length",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
    CheckSpec {
        id: "seo-title-length",
        name: "SEO title length",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
    CheckSpec {
        id: "meta-description-length",
        name: "Meta description length",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
    CheckSpec {
        id: "content-length",
        name: "Content length",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
    CheckSpec {
        id: "keyword-in-title",
        name: "Focus keyword in title",
        max_points: GOOD_POINTS,
        needs_keyword: true,
    },
    CheckSpec {
        id: "keyword-density",
        name: "Keyword density",
        max_points: GOOD_POINTS,
        needs_keyword: true,
    },
    CheckSpec {
        id: "url-structure",
        name: "URL structure",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
    CheckSpec {
        id: "readability",
        name: "Readability",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
    CheckSpec {
        id: "heading-structure",
        name: "Heading structure",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
    CheckSpec {
        id: "image-alt-text",
        name: "Image alt text",
        max_points: GOOD_POINTS,
        needs_keyword: false,
    },
];

/// Maximum attainable points for the applicable checks: 100 with a focus
/// keyword, 80 without.
pub fn max_score(has_keyword: bool) -> u32 {
    CHECKS
        .iter()
        .filter(|c| has_keyword || !c.needs_keyword)
        .map(|c| c.max_points)
        .sum()
}

#[derive(Debug, Clone, Copy)]
pub struct LengthBand {
    pub min: usize,
    pub max: usize,
}

impl LengthBand {
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

pub const TITLE_LENGTH: LengthBand = LengthBand { min: 30, max: 60 };
pub const SEO_TITLE_LENGTH: LengthBand = LengthBand { min: 50, max: 60 };
pub const META_DESCRIPTION_LENGTH: LengthBand = LengthBand { min: 150, max: 160 };

/// Word count at or above which content length is rated good.
pub const GOOD_WORD_COUNT: usize = 300;
/// Word count below which content length is an error.
pub const MIN_WORD_COUNT: usize = 150;

/// Keyword density band, in percent of total words.
pub const KEYWORD_DENSITY_MIN: f64 = 0.5;
pub const KEYWORD_DENSITY_MAX: f64 = 2.5;

/// Flesch reading-ease thresholds.
pub const READABILITY_GOOD: f64 = 60.0;
pub const READABILITY_WARNING: f64 = 30.0;

/// Fixed syllables-per-word estimate used by the simplified Flesch formula.
pub const AVG_SYLLABLES_PER_WORD: f64 = 1.5;

/// Default reading speed for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

// Slug rules. Penalties accumulate independently from a starting score of
// 100, floored at 0.
pub const MAX_SLUG_LENGTH: usize = 75;
pub const LONG_SLUG_LENGTH: usize = 50;
pub const MAX_SLUG_WORDS: usize = 8;
pub const MAX_STOP_WORDS: usize = 2;

pub const PENALTY_MISSING: u32 = 50;
pub const PENALTY_TOO_LONG: u32 = 20;
pub const PENALTY_GETTING_LONG: u32 = 10;
pub const PENALTY_INVALID_CHARS: u32 = 30;
pub const PENALTY_UPPERCASE: u32 = 15;
pub const PENALTY_DOUBLE_HYPHEN: u32 = 10;
pub const PENALTY_EDGE_HYPHEN: u32 = 10;
pub const PENALTY_STOP_WORDS: u32 = 5;
pub const PENALTY_LEADING_DIGIT: u32 = 5;
pub const PENALTY_TOO_MANY_WORDS: u32 = 5;

/// Words that carry no search value in a URL.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can",
    "do", "does", "for", "from", "had", "has", "have", "how", "if", "in", "into", "is", "it",
    "its", "just", "more", "most", "my", "no", "not", "of", "on", "only", "or", "our", "over",
    "so", "some", "than", "that", "the", "their", "then", "these", "this", "those", "to", "too",
    "under", "very", "was", "were", "what", "when", "where", "which", "who", "why", "will",
    "with", "your",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token.to_ascii_lowercase().as_str())
}
