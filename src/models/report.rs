use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Good,
    Warning,
    Error,
}

impl FromStr for CheckStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Outcome of a single SEO check. `score` is one of 0, 5 or 10 points.
#[derive(Debug, Clone, Serialize)]
pub struct SeoCheck {
    pub id: &'static str,
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoReport {
    pub overall_score: u32,
    pub checks: Vec<SeoCheck>,
    pub readability_score: f64,
    pub keyword_density: f64,
    pub word_count: usize,
    pub reading_time_minutes: u32,
}

impl SeoReport {
    pub fn check(&self, id: &str) -> Option<&SeoCheck> {
        self.checks.iter().find(|c| c.id == id)
    }
}

/// Snapshot of a post's SEO-relevant fields, as edited.
///
/// `content` is the rendered HTML body. All fields are plain text supplied
/// by the caller; the analyzer performs no I/O.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub seo_title: String,
    #[serde(default)]
    pub seo_description: String,
    pub focus_keyword: Option<String>,
    #[serde(default)]
    pub slug: String,
}
