use super::{is_recognized, is_safe_stem, lookup_extensions, slug_of, PostStore};
use crate::error::{BlogError, Result};
use crate::model::{FrontMatter, Post, StoredPost};
use crate::slug::is_valid_slug;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing. Paths are virtual and nothing persists.
pub struct InMemoryStore {
    root: PathBuf,
    file_ext: String,
    posts: BTreeMap<PathBuf, Post>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/blog/posts"),
            file_ext: ".mdx".to_string(),
            posts: BTreeMap::new(),
        }
    }

    /// Places a post under an explicit file name, bypassing `create`.
    pub fn insert(&mut self, file_name: &str, post: Post) -> PathBuf {
        let path = self.root.join(file_name);
        self.posts.insert(path.clone(), post);
        path
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn existing_path(&self, slug: &str) -> Option<PathBuf> {
        lookup_extensions(&self.file_ext)
            .into_iter()
            .map(|ext| self.root.join(format!("{}{}", slug, ext)))
            .find(|path| self.posts.contains_key(path))
    }
}

impl PostStore for InMemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_all(&self) -> Result<Vec<StoredPost>> {
        Ok(self
            .posts
            .iter()
            .filter(|(path, _)| is_recognized(path, &self.file_ext))
            .filter_map(|(path, post)| {
                slug_of(path, &self.file_ext).map(|slug| StoredPost {
                    slug,
                    path: path.clone(),
                    post: post.clone(),
                })
            })
            .collect())
    }

    fn find(&self, slug: &str) -> Result<Option<StoredPost>> {
        if !is_safe_stem(slug) {
            return Ok(None);
        }
        Ok(self.existing_path(slug).map(|path| StoredPost {
            slug: slug.to_string(),
            post: self.posts[&path].clone(),
            path,
        }))
    }

    fn create(
        &mut self,
        slug: &str,
        front_matter: FrontMatter,
        body: String,
    ) -> Result<StoredPost> {
        if !is_valid_slug(slug) {
            return Err(BlogError::Api(format!("Invalid slug '{}'", slug)));
        }
        if let Some(existing) = self.existing_path(slug) {
            return Err(BlogError::AlreadyExists(existing));
        }
        let path = self.root.join(format!("{}{}", slug, self.file_ext));
        let post = Post::new(front_matter, body);
        self.posts.insert(path.clone(), post.clone());
        Ok(StoredPost {
            slug: slug.to_string(),
            path,
            post,
        })
    }

    fn save(&mut self, path: &Path, post: &Post) -> Result<()> {
        self.posts.insert(path.to_path_buf(), post.clone());
        Ok(())
    }

    fn delete(&mut self, path: &Path) -> Result<()> {
        self.posts
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| BlogError::Io(io::Error::new(io::ErrorKind::NotFound, "no such post")))
    }
}
