use super::PostFields;
use serde::Deserialize;

/// TOML front matter carried at the top of a post file between `+++` fences.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub focus_keyword: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PostDocument {
    pub fields: PostFields,
    pub tags: Vec<String>,
}
