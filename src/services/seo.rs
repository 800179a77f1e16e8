//! The content SEO analyzer: a fixed battery of checks over a post's
//! editable fields, producing a weighted report with per-check diagnostics.

use crate::models::{CheckStatus, PostFields, SeoCheck, SeoReport};
use crate::services::rubric::{self, CheckSpec, LengthBand};
use crate::services::text;

/// Runs the check battery over a post snapshot.
///
/// Construct once and share by reference; the analyzer holds no mutable
/// state, so every call is an independent, side-effect-free computation
/// safe at keystroke frequency.
#[derive(Debug, Clone)]
pub struct SeoAnalyzer {
    reading_speed_wpm: usize,
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeoAnalyzer {
    pub fn new() -> Self {
        Self {
            reading_speed_wpm: rubric::WORDS_PER_MINUTE,
        }
    }

    pub fn with_reading_speed(words_per_minute: usize) -> Self {
        Self {
            reading_speed_wpm: words_per_minute.max(1),
        }
    }

    /// Evaluate all applicable checks in fixed order. Keyword checks are
    /// omitted entirely (points and maximum) when no focus keyword is set.
    pub fn analyze(&self, fields: &PostFields) -> SeoReport {
        let plain = text::strip_tags(&fields.content);
        let word_count = text::word_count(&plain);
        let keyword = fields
            .focus_keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());

        let mut checks = Vec::with_capacity(rubric::CHECKS.len());
        checks.push(length_check(&rubric::CHECKS[0], &fields.title, rubric::TITLE_LENGTH));
        checks.push(length_check(
            &rubric::CHECKS[1],
            &fields.seo_title,
            rubric::SEO_TITLE_LENGTH,
        ));
        checks.push(length_check(
            &rubric::CHECKS[2],
            &fields.seo_description,
            rubric::META_DESCRIPTION_LENGTH,
        ));
        checks.push(content_length_check(word_count));

        let mut keyword_density = 0.0;
        if let Some(kw) = keyword {
            checks.push(keyword_in_title_check(&fields.title, kw));
            keyword_density = text::keyword_density(&plain, kw);
            checks.push(keyword_density_check(keyword_density));
        }

        checks.push(url_structure_check(&fields.slug));

        let readability_score = text::flesch_reading_ease(&plain);
        checks.push(readability_check(readability_score));
        checks.push(heading_check(&fields.content));
        checks.push(image_alt_check(&fields.content));

        let earned: u32 = checks.iter().map(|c| c.score).sum();
        let max = rubric::max_score(keyword.is_some());
        let overall_score = ((earned as f64 / max as f64) * 100.0).round() as u32;

        tracing::debug!(overall_score, word_count, "seo analysis complete");

        SeoReport {
            overall_score,
            checks,
            readability_score,
            keyword_density,
            word_count,
            reading_time_minutes: text::reading_time_minutes(word_count, self.reading_speed_wpm),
        }
    }
}

fn length_check(spec: &CheckSpec, value: &str, band: LengthBand) -> SeoCheck {
    let len = value.chars().count();
    let (status, score, message) = if len == 0 {
        (CheckStatus::Error, 0, "Not set".to_string())
    } else if band.contains(len) {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            format!("{} characters", len),
        )
    } else {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            format!("{} characters, aim for {}-{}", len, band.min, band.max),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}

fn content_length_check(word_count: usize) -> SeoCheck {
    let spec = &rubric::CHECKS[3];
    let (status, score, message) = if word_count >= rubric::GOOD_WORD_COUNT {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            format!("{} words", word_count),
        )
    } else if word_count >= rubric::MIN_WORD_COUNT {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            format!(
                "{} words, aim for at least {}",
                word_count,
                rubric::GOOD_WORD_COUNT
            ),
        )
    } else {
        (
            CheckStatus::Error,
            0,
            format!(
                "{} words, aim for at least {}",
                word_count,
                rubric::GOOD_WORD_COUNT
            ),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}

fn keyword_in_title_check(title: &str, keyword: &str) -> SeoCheck {
    let spec = &rubric::CHECKS[4];
    let found = title.to_lowercase().contains(&keyword.to_lowercase());
    let (status, score, message) = if found {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            format!("Focus keyword \"{}\" appears in the title", keyword),
        )
    } else {
        (
            CheckStatus::Warning,
            0,
            format!("Focus keyword \"{}\" is missing from the title", keyword),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}

fn keyword_density_check(density: f64) -> SeoCheck {
    let spec = &rubric::CHECKS[5];
    let (status, score, message) = if density >= rubric::KEYWORD_DENSITY_MIN
        && density <= rubric::KEYWORD_DENSITY_MAX
    {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            format!("Keyword density is {:.1}%", density),
        )
    } else if density > 0.0 {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            format!(
                "Keyword density is {:.1}%, aim for {}-{}%",
                density,
                rubric::KEYWORD_DENSITY_MIN,
                rubric::KEYWORD_DENSITY_MAX
            ),
        )
    } else {
        (
            CheckStatus::Error,
            0,
            "Focus keyword does not appear in the content".to_string(),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}

fn url_structure_check(slug: &str) -> SeoCheck {
    let spec = &rubric::CHECKS[6];
    let well_formed = !slug.is_empty()
        && slug.chars().count() <= rubric::MAX_SLUG_LENGTH
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.contains("--");
    let (status, score, message) = if well_formed {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            "Slug is short, lowercase, and hyphen-separated".to_string(),
        )
    } else {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            "Slug should be short, lowercase, and hyphen-separated".to_string(),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}

fn readability_check(score_value: f64) -> SeoCheck {
    let spec = &rubric::CHECKS[7];
    let (status, score, message) = if score_value >= rubric::READABILITY_GOOD {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            format!("Flesch reading ease is {:.0}", score_value),
        )
    } else if score_value >= rubric::READABILITY_WARNING {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            format!(
                "Flesch reading ease is {:.0}, shorter sentences would help",
                score_value
            ),
        )
    } else {
        (
            CheckStatus::Error,
            0,
            format!(
                "Flesch reading ease is {:.0}, the text is hard to read",
                score_value
            ),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}

fn heading_check(content: &str) -> SeoCheck {
    let spec = &rubric::CHECKS[8];
    let headings = text::heading_count(content);
    let (status, score, message) = if headings >= 2 {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            format!("{} headings found", headings),
        )
    } else if headings == 1 {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            "Only one heading found, add subheadings to structure the content".to_string(),
        )
    } else {
        (
            CheckStatus::Error,
            0,
            "No headings found".to_string(),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}

fn image_alt_check(content: &str) -> SeoCheck {
    let spec = &rubric::CHECKS[9];
    let stats = text::image_alt_stats(content);
    let (status, score, message) = if stats.total == 0 {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            "No images found, consider adding a relevant image".to_string(),
        )
    } else if stats.missing_alt == 0 {
        (
            CheckStatus::Good,
            rubric::GOOD_POINTS,
            format!("All {} images have alt text", stats.total),
        )
    } else {
        (
            CheckStatus::Warning,
            rubric::PARTIAL_POINTS,
            format!(
                "{} of {} images are missing alt text",
                stats.missing_alt, stats.total
            ),
        )
    };
    SeoCheck {
        id: spec.id,
        name: spec.name,
        status,
        message,
        score,
    }
}
