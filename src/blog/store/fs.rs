use super::{is_recognized, is_safe_stem, lookup_extensions, slug_of, PostStore};
use crate::error::{BlogError, Result};
use crate::frontmatter;
use crate::model::{FrontMatter, Post, StoredPost};
use crate::slug::is_valid_slug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".mdx".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        self.file_ext = crate::config::normalize_ext(ext);
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn existing_path(&self, slug: &str) -> Option<PathBuf> {
        lookup_extensions(&self.file_ext)
            .into_iter()
            .map(|ext| self.root.join(format!("{}{}", slug, ext)))
            .find(|path| path.is_file())
    }

    fn load(&self, path: &Path) -> Result<Post> {
        let text = read_post_file(path)?;
        frontmatter::parse(&text, path)
    }
}

impl PostStore for FileStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_all(&self) -> Result<Vec<StoredPost>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BlogError::Io(e)),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_recognized(&path, &self.file_ext) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(slug) = slug_of(&path, &self.file_ext) else {
                continue;
            };
            match self.load(&path) {
                Ok(post) => posts.push(StoredPost { slug, path, post }),
                Err(BlogError::MalformedPost { path, reason }) => {
                    warn!(path = %path.display(), "skipping post: {}", reason);
                }
                Err(e) => {
                    warn!(path = %path.display(), "skipping unreadable post: {}", e);
                }
            }
        }
        Ok(posts)
    }

    fn find(&self, slug: &str) -> Result<Option<StoredPost>> {
        if !is_safe_stem(slug) {
            return Ok(None);
        }
        match self.existing_path(slug) {
            Some(path) => {
                let post = self.load(&path)?;
                Ok(Some(StoredPost {
                    slug: slug.to_string(),
                    path,
                    post,
                }))
            }
            None => Ok(None),
        }
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

        fs::create_dir_all(&self.root)?;
        let path = self.root.join(format!("{}{}", slug, self.file_ext));
        let post = Post::new(front_matter, body);
        let text = frontmatter::render(&post)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => BlogError::AlreadyExists(path.clone()),
                _ => BlogError::Io(e),
            })?;
        file.write_all(text.as_bytes())?;
        debug!(path = %path.display(), "created post");

        Ok(StoredPost {
            slug: slug.to_string(),
            path,
            post,
        })
    }

    fn save(&mut self, path: &Path, post: &Post) -> Result<()> {
        let text = match fs::read_to_string(path) {
            Ok(original) => frontmatter::rewrite(&original, post, path)?,
            Err(e) if e.kind() == ErrorKind::NotFound => frontmatter::render(post)?,
            Err(e) => return Err(BlogError::Io(e)),
        };
        fs::write(path, text)?;
        debug!(path = %path.display(), "saved post");
        Ok(())
    }

    fn delete(&mut self, path: &Path) -> Result<()> {
        fs::remove_file(path)?;
        debug!(path = %path.display(), "deleted post");
        Ok(())
    }
}

/// Reads a post file. Non-UTF-8 content is a malformed post, not an IO error.
fn read_post_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => BlogError::MalformedPost {
            path: path.to_path_buf(),
            reason: "file is not valid UTF-8".to_string(),
        },
        _ => BlogError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    struct TestEnv {
        _temp_dir: TempDir,
        store: FileStore,
        root: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
            let root = temp_dir.path().join("posts");
            let store = FileStore::new(root.clone());
            Self {
                _temp_dir: temp_dir,
                store,
                root,
            }
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn front_matter(title: &str, tags: &[&str]) -> FrontMatter {
        FrontMatter::new(
            title.to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
            date(),
        )
    }

    #[test]
    fn missing_directory_lists_empty() {
        let env = TestEnv::new();
        assert!(!env.root.exists());
        assert!(env.store.list_all().unwrap().is_empty());
    }

    #[test]
    fn create_then_find_returns_same_metadata() {
        let mut env = TestEnv::new();
        env.store
            .create("hello", front_matter("Hello", &["a", "b"]), "\nbody\n".into())
            .unwrap();

        let found = env.store.find("hello").unwrap().unwrap();
        assert_eq!(found.path, env.root.join("hello.mdx"));
        assert_eq!(found.post.title(), "Hello");
        assert_eq!(found.post.front_matter.pub_date, Some(date()));
        assert_eq!(found.post.front_matter.tags, vec!["a", "b"]);
        assert!(found.post.is_draft());
        assert_eq!(found.post.body, "\nbody\n");
    }

    #[test]
    fn create_refuses_existing_slug_without_mutation() {
        let mut env = TestEnv::new();
        env.store
            .create("dup", front_matter("First", &[]), "one".into())
            .unwrap();
        let before = fs::read_to_string(env.root.join("dup.mdx")).unwrap();

        let err = env
            .store
            .create("dup", front_matter("Second", &[]), "two".into())
            .unwrap_err();
        assert!(matches!(err, BlogError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(env.root.join("dup.mdx")).unwrap(), before);
        assert_eq!(fs::read_dir(&env.root).unwrap().count(), 1);
    }

    #[test]
    fn create_refuses_slug_taken_by_other_extension() {
        let mut env = TestEnv::new();
        fs::create_dir_all(&env.root).unwrap();
        fs::write(env.root.join("old.md"), "---\ntitle: Old\n---\n").unwrap();

        let err = env
            .store
            .create("old", front_matter("Old", &[]), String::new())
            .unwrap_err();
        assert!(matches!(err, BlogError::AlreadyExists(p) if p.ends_with("old.md")));
    }

    #[test]
    fn find_missing_is_none() {
        let env = TestEnv::new();
        assert!(env.store.find("nope").unwrap().is_none());
        assert!(env.store.find("../escape").unwrap().is_none());
    }

    #[test]
    fn find_prefers_mdx_over_md() {
        let env = TestEnv::new();
        fs::create_dir_all(&env.root).unwrap();
        fs::write(env.root.join("both.md"), "---\ntitle: MD\n---\n").unwrap();
        fs::write(env.root.join("both.mdx"), "---\ntitle: MDX\n---\n").unwrap();

        let found = env.store.find("both").unwrap().unwrap();
        assert_eq!(found.post.title(), "MDX");
    }

    #[test]
    fn configured_extension_wins_lookup_and_names_new_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf()).with_file_ext("md");
        let created = store
            .create("note", front_matter("Note", &[]), String::new())
            .unwrap();
        assert!(created.path.ends_with("note.md"));
        assert_eq!(store.file_ext(), ".md");
    }

    #[test]
    fn list_is_ordered_by_filename_and_skips_other_files() {
        let mut env = TestEnv::new();
        env.store.create("b-post", front_matter("B", &[]), String::new()).unwrap();
        env.store.create("a-post", front_matter("A", &[]), String::new()).unwrap();
        fs::write(env.root.join("c-post.md"), "---\ntitle: C\n---\nbody").unwrap();
        fs::write(env.root.join("notes.txt"), "ignored").unwrap();
        fs::create_dir(env.root.join("drafts.md")).unwrap();

        let slugs: Vec<_> = env
            .store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["a-post", "b-post", "c-post"]);
    }

    #[test]
    fn list_skips_malformed_posts() {
        let mut env = TestEnv::new();
        env.store.create("good", front_matter("Good", &[]), String::new()).unwrap();
        fs::write(env.root.join("bad.mdx"), "no front matter here").unwrap();

        let posts = env.store.list_all().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn list_skips_files_that_are_not_utf8() {
        let mut env = TestEnv::new();
        env.store.create("good", front_matter("Good", &[]), String::new()).unwrap();
        fs::write(env.root.join("bad.md"), b"\xff\xfe").unwrap();
        fs::write(env.root.join("latin1.md"), b"---\ntitle: Caf\xe9\n---\n").unwrap();

        let posts = env.store.list_all().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn find_names_file_that_is_not_utf8() {
        let env = TestEnv::new();
        fs::create_dir_all(&env.root).unwrap();
        fs::write(env.root.join("bad.md"), b"\xff\xfe").unwrap();

        let err = env.store.find("bad").unwrap_err();
        assert!(matches!(&err, BlogError::MalformedPost { path, .. } if path.ends_with("bad.md")));
        assert!(err.to_string().contains("bad.md"));
    }

    #[test]
    fn save_keeps_hand_written_file_and_flips_only_draft() {
        let original = "---\ndescription: ''\ndraft: true\npubDate: '2024-03-09'\ntags:\n- rust\ntitle: Hello\n---\n\n# Hello\n";
        let mut env = TestEnv::new();
        fs::create_dir_all(&env.root).unwrap();
        let path = env.root.join("hello.md");
        fs::write(&path, original).unwrap();

        let found = env.store.find("hello").unwrap().unwrap();
        env.store.save(&found.path, &found.post).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), original);

        let mut published = found.post.clone();
        published.front_matter.draft = false;
        env.store.save(&found.path, &published).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            original.replace("draft: true", "draft: false")
        );
    }

    #[test]
    fn save_round_trips_untouched_file() {
        let mut env = TestEnv::new();
        let created = env
            .store
            .create("rt", front_matter("Round Trip", &["x"]), "\n# Round Trip\n".into())
            .unwrap();
        let before = fs::read_to_string(&created.path).unwrap();

        let found = env.store.find("rt").unwrap().unwrap();
        env.store.save(&found.path, &found.post).unwrap();
        assert_eq!(fs::read_to_string(&created.path).unwrap(), before);
    }

    #[test]
    fn save_persists_draft_flip() {
        let mut env = TestEnv::new();
        let mut stored = env
            .store
            .create("flip", front_matter("Flip", &[]), String::new())
            .unwrap();
        stored.post.front_matter.draft = false;
        env.store.save(&stored.path, &stored.post).unwrap();

        assert!(!env.store.find("flip").unwrap().unwrap().post.is_draft());
    }

    #[test]
    fn delete_removes_file() {
        let mut env = TestEnv::new();
        let stored = env
            .store
            .create("gone", front_matter("Gone", &[]), String::new())
            .unwrap();
        env.store.delete(&stored.path).unwrap();

        assert!(!stored.path.exists());
        assert!(env.store.find("gone").unwrap().is_none());
    }

    #[test]
    fn create_rejects_invalid_slug() {
        let mut env = TestEnv::new();
        let err = env
            .store
            .create("", front_matter("Empty", &[]), String::new())
            .unwrap_err();
        assert!(matches!(err, BlogError::Api(_)));
        assert!(!env.root.exists());
    }
}
