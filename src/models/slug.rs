use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Suggestion,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Suggestion => write!(f, "suggestion"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SlugIssue {
    pub kind: IssueKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

/// Result of scoring a candidate slug. `is_valid` is true iff no issue of
/// kind `error` fired; `suggestions` holds at most three candidate slugs,
/// deduplicated and distinct from the input.
#[derive(Debug, Clone, Serialize)]
pub struct SlugReport {
    pub is_valid: bool,
    pub score: u32,
    pub issues: Vec<SlugIssue>,
    pub suggestions: Vec<String>,
}

impl SlugReport {
    pub fn has_issue_of(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}
