//! # Storage Layer
//!
//! Posts live as individual files in a single flat directory, one file per
//! slug:
//!
//! ```text
//! src/content/posts/
//! ├── hello-world.mdx
//! ├── older-post.md
//! └── ...
//! ```
//!
//! The [`PostStore`] trait hides where those files actually are so commands
//! can run against [`memory::InMemoryStore`] in tests and
//! [`fs::FileStore`] in production.
//!
//! ## Lookup rules
//!
//! - A slug maps to `<root>/<slug><ext>`. Extensions are tried in a fixed
//!   order: the configured extension first, then `.mdx`, then `.md`.
//! - Listing only considers files with a recognized extension and returns
//!   them ordered by filename.
//! - A missing store directory reads as an empty store. Writes create it.

use crate::error::Result;
use crate::model::{FrontMatter, Post, StoredPost};
use std::path::Path;

pub mod fs;
pub mod memory;

pub const RECOGNIZED_EXTENSIONS: [&str; 2] = [".mdx", ".md"];

pub trait PostStore {
    /// The store directory.
    fn root(&self) -> &Path;

    /// Every recognized post, ordered by filename.
    fn list_all(&self) -> Result<Vec<StoredPost>>;

    /// Looks a post up by slug. Absence is `Ok(None)`.
    fn find(&self, slug: &str) -> Result<Option<StoredPost>>;

    /// Writes a new post. Fails with `AlreadyExists` without touching the
    /// store if any file for `slug` is already present.
    fn create(&mut self, slug: &str, front_matter: FrontMatter, body: String)
        -> Result<StoredPost>;

    /// Overwrites the post at `path`.
    fn save(&mut self, path: &Path, post: &Post) -> Result<()>;

    /// Removes the post at `path`, a location previously returned by the store.
    fn delete(&mut self, path: &Path) -> Result<()>;
}

/// Extensions to probe for a slug, in preference order.
pub(crate) fn lookup_extensions(file_ext: &str) -> Vec<&str> {
    let mut exts = vec![file_ext];
    exts.extend(RECOGNIZED_EXTENSIONS.iter().filter(|e| **e != file_ext));
    exts
}

pub(crate) fn is_recognized(path: &Path, file_ext: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| {
            lookup_extensions(file_ext)
                .iter()
                .any(|ext| name.len() > ext.len() && name.ends_with(ext))
        })
}

/// Rejects lookups that would leave the store directory.
pub(crate) fn is_safe_stem(slug: &str) -> bool {
    !slug.is_empty() && !slug.starts_with('.') && !slug.contains(['/', '\\'])
}

/// The slug of a stored file: its name minus the matching extension.
pub(crate) fn slug_of(path: &Path, file_ext: &str) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    lookup_extensions(file_ext)
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .map(str::to_string)
}
