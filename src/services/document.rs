//! Post-file ingestion: TOML front matter between `+++` fences, followed by
//! a Markdown or HTML body. Produces the field snapshot the analyzer
//! consumes.

use crate::models::{FrontMatter, PostDocument, PostFields};
use crate::services::markdown::MarkdownRenderer;
use crate::services::slug::generate_slug;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("front matter is not closed with '+++'")]
    UnclosedFrontMatter,
    #[error("invalid front matter: {0}")]
    InvalidFrontMatter(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Markdown,
    Html,
}

impl BodyFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("html") | Some("htm") => Self::Html,
            _ => Self::Markdown,
        }
    }
}

/// Parse a post file into analyzer fields.
///
/// Missing front matter is fine: the first `# ` line becomes the title and
/// the whole input is the body. A missing slug is derived from the title.
pub fn parse_document(
    raw: &str,
    format: BodyFormat,
    renderer: &MarkdownRenderer,
) -> Result<PostDocument, DocumentError> {
    let (front, body) = split_front_matter(raw)?;
    let front: FrontMatter = match front {
        Some(src) => toml::from_str(src)?,
        None => FrontMatter::default(),
    };

    let title = front
        .title
        .unwrap_or_else(|| first_heading(body).unwrap_or_default());
    let content = match format {
        BodyFormat::Markdown => renderer.render(body),
        BodyFormat::Html => body.to_string(),
    };
    let slug = front.slug.unwrap_or_else(|| generate_slug(&title));

    Ok(PostDocument {
        fields: PostFields {
            title,
            content,
            seo_title: front.seo_title.unwrap_or_default(),
            seo_description: front.seo_description.unwrap_or_default(),
            focus_keyword: front.focus_keyword,
            slug,
        },
        tags: front.tags,
    })
}

fn split_front_matter(raw: &str) -> Result<(Option<&str>, &str), DocumentError> {
    let Some(after_open) = raw
        .strip_prefix("+++\n")
        .or_else(|| raw.strip_prefix("+++\r\n"))
    else {
        return Ok((None, raw));
    };

    let Some(pos) = after_open.find("\n+++") else {
        return Err(DocumentError::UnclosedFrontMatter);
    };

    let front = &after_open[..pos];
    let body = after_open[pos + "\n+++".len()..]
        .trim_start_matches('\r')
        .trim_start_matches('\n');
    Ok((Some(front), body))
}

fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.strip_prefix("# ").map(|t| t.trim().to_string()))
}
