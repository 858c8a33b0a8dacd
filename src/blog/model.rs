use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder body written into freshly created posts.
pub const BODY_PLACEHOLDER: &str = "Write your post here.";

/// The metadata block at the top of every post.
///
/// Known keys are typed; anything else found in the block is kept in `extra`
/// and written back after the known keys so hand-added fields survive a save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        rename = "pubDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pub_date: Option<NaiveDate>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub draft: bool,

    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

impl FrontMatter {
    /// Metadata for a brand new post: a draft dated `date` with an empty description.
    pub fn new(title: String, tags: Vec<String>, date: NaiveDate) -> Self {
        Self {
            title,
            description: Some(String::new()),
            pub_date: Some(date),
            tags,
            draft: true,
            extra: serde_yaml::Mapping::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Post {
    pub fn new(front_matter: FrontMatter, body: String) -> Self {
        Self { front_matter, body }
    }

    pub fn title(&self) -> &str {
        &self.front_matter.title
    }

    pub fn is_draft(&self) -> bool {
        self.front_matter.draft
    }
}

/// Starter body for a new post titled `title`.
pub fn initial_body(title: &str) -> String {
    format!("\n# {}\n\n{}\n", title, BODY_PLACEHOLDER)
}

/// Splits a comma-separated tag argument, trimming entries and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A post together with where it lives in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPost {
    pub slug: String,
    pub path: PathBuf,
    pub post: Post,
}

impl StoredPost {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.slug.clone())
    }
}
