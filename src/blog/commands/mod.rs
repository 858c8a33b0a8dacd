//! # Command Layer
//!
//! One module per operation. Each `run` takes the store (and, where needed,
//! a process runner or git gateway), does the work, and returns a
//! [`CmdResult`]: structured data for the caller to render plus leveled
//! messages. Nothing here prints or exits; "not found" and "already exists"
//! come back as errors, git failures come back as `Error` messages.

use crate::model::StoredPost;
use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod paths;
pub mod publishing;
pub mod push;
pub mod show;
pub mod status;
pub mod tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A tag and the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_posts: Vec<StoredPost>,
    pub post_paths: Vec<PathBuf>,
    pub tag_counts: Vec<TagCount>,
    /// Raw version-control status text, when there is any.
    pub vcs_status: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_posts(mut self, posts: Vec<StoredPost>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_post_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.post_paths = paths;
        self
    }

    pub fn with_tag_counts(mut self, counts: Vec<TagCount>) -> Self {
        self.tag_counts = counts;
        self
    }
}
