//! # Configuration
//!
//! Configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `BLOG_POSTS_DIR`, `BLOG_FILE_EXT`, `BLOG_EDITOR`,
//!    `BLOG_GIT`, `BLOG_REMOTE`, `BLOG_BRANCH`.
//! 2. **Repository config**: `blog.toml` at the repository root.
//! 3. **Compiled defaults**.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `posts_dir` | `src/content/posts` | Store directory, relative to the repository root |
//! | `file_ext` | `.mdx` | Extension for new posts |
//! | `editor` | `vim` | Editor used when `$EDITOR` and `$VISUAL` are unset |
//! | `git` | `git` | Version-control executable |
//! | `remote` | `origin` | Remote that `publish` and `push` push to |
//! | `branch` | `main` | Branch that `publish` and `push` push to |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "blog.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// Directory holding the posts, relative to the repository root.
    #[config(env = "BLOG_POSTS_DIR", default = "src/content/posts")]
    pub posts_dir: String,

    /// Extension for new posts (".mdx" or ".md").
    #[config(env = "BLOG_FILE_EXT", default = ".mdx")]
    pub file_ext: String,

    /// Editor used when neither $EDITOR nor $VISUAL is set.
    #[config(env = "BLOG_EDITOR", default = "vim")]
    pub editor: String,

    #[config(env = "BLOG_GIT", default = "git")]
    pub git: String,

    #[config(env = "BLOG_REMOTE", default = "origin")]
    pub remote: String,

    #[config(env = "BLOG_BRANCH", default = "main")]
    pub branch: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_dir: "src/content/posts".to_string(),
            file_ext: ".mdx".to_string(),
            editor: "vim".to_string(),
            git: "git".to_string(),
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}

impl BlogConfig {
    /// Loads env overrides and `<repo_root>/blog.toml` over the defaults.
    /// A missing file is not an error.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let mut config = BlogConfig::builder()
            .env()
            .file(repo_root.join(CONFIG_FILENAME))
            .load()?;
        config.file_ext = normalize_ext(&config.file_ext);
        Ok(config)
    }

    pub fn posts_root(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.posts_dir)
    }
}

/// Ensures an extension starts with a dot.
pub fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
