use crate::api::BlogApi;
use crate::config::BlogConfig;
use crate::editor::resolve_editor;
use crate::error::Result;
use crate::process::SystemRunner;
use crate::store::fs::FileStore;
use crate::vcs::GitSettings;
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct BlogContext {
    pub api: BlogApi<FileStore, SystemRunner>,
    pub config: BlogConfig,
    pub repo_root: PathBuf,
}

/// Walks up from `cwd` to the nearest directory containing `.git`.
/// Stops at the home directory or the filesystem root.
pub fn find_repo_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(".git").exists() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Builds the production API. The repository root is `root` when given,
/// otherwise the enclosing git checkout of `cwd`, otherwise `cwd` itself.
pub fn initialize(cwd: &Path, root: Option<PathBuf>) -> Result<BlogContext> {
    let repo_root = root
        .map(|r| if r.is_absolute() { r } else { cwd.join(r) })
        .or_else(|| find_repo_root(cwd))
        .unwrap_or_else(|| cwd.to_path_buf());

    let config = BlogConfig::load(&repo_root)?;
    let posts_root = config.posts_root(&repo_root);
    debug!(repo_root = %repo_root.display(), posts = %posts_root.display(), "initialized");

    let store = FileStore::new(posts_root).with_file_ext(&config.file_ext);
    let git = GitSettings {
        program: config.git.clone(),
        repo_root: repo_root.clone(),
        remote: config.remote.clone(),
        branch: config.branch.clone(),
    };
    let editor = resolve_editor(&config.editor);
    let api = BlogApi::new(store, SystemRunner, git, editor);

    Ok(BlogContext {
        api,
        config,
        repo_root,
    })
}
