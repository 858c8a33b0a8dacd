//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! blog operation. It owns the store, the process runner and the settings the
//! commands need, and hands each call to the matching `commands::*::run`.
//!
//! The facade does no I/O of its own and no presentation: it returns
//! `Result<CmdResult>` and leaves rendering to the caller.
//!
//! `BlogApi<S, R>` is generic over both seams:
//! - Production: `BlogApi<FileStore, SystemRunner>`
//! - Testing: `BlogApi<InMemoryStore, FakeRunner>`

use crate::commands;
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::store::PostStore;
use crate::vcs::{Git, GitSettings};
use chrono::{Local, NaiveDate};

pub struct BlogApi<S: PostStore, R: ProcessRunner> {
    store: S,
    runner: R,
    git: GitSettings,
    editor: String,
}

impl<S: PostStore, R: ProcessRunner> BlogApi<S, R> {
    pub fn new(store: S, runner: R, git: GitSettings, editor: String) -> Self {
        Self {
            store,
            runner,
            git,
            editor,
        }
    }

    pub fn create_post(
        &mut self,
        title: &str,
        tags: Vec<String>,
        open_editor: bool,
    ) -> Result<CmdResult> {
        self.create_post_on(title, tags, open_editor, Local::now().date_naive())
    }

    pub fn create_post_on(
        &mut self,
        title: &str,
        tags: Vec<String>,
        open_editor: bool,
        date: NaiveDate,
    ) -> Result<CmdResult> {
        let new_post = commands::create::NewPost {
            title: title.to_string(),
            tags,
            date,
            open_editor,
        };
        commands::create::run(&mut self.store, &self.runner, &self.editor, new_post)
    }

    pub fn list_posts(&self, filter: &PostFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn edit_post(&self, slug: &str) -> Result<CmdResult> {
        commands::edit::run(&self.store, &self.runner, &self.editor, slug)
    }

    pub fn show_post(&self, slug: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, slug)
    }

    pub fn post_path(&self, slug: &str) -> Result<CmdResult> {
        commands::paths::run(&self.store, slug)
    }

    pub fn publish_post(&mut self, slug: &str) -> Result<CmdResult> {
        let git = Git::new(&self.runner, &self.git);
        commands::publishing::publish(&mut self.store, &git, slug)
    }

    pub fn unpublish_post(&mut self, slug: &str) -> Result<CmdResult> {
        commands::publishing::unpublish(&mut self.store, slug)
    }

    pub fn delete_post(&mut self, slug: &str, confirmed: bool) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, slug, confirmed)
    }

    pub fn push_changes(&self, message: &str) -> Result<CmdResult> {
        let git = Git::new(&self.runner, &self.git);
        commands::push::run(&self.store, &git, message)
    }

    pub fn status(&self) -> Result<CmdResult> {
        let git = Git::new(&self.runner, &self.git);
        commands::status::run(&self.store, &git)
    }

    pub fn tag_summary(&self) -> Result<CmdResult> {
        commands::tags::run(&self.store)
    }

    /// Looks a post up without turning absence into an error.
    pub fn find_post(&self, slug: &str) -> Result<Option<StoredPost>> {
        self.store.find(slug)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

pub use crate::model::StoredPost;
pub use commands::list::PostFilter;
pub use commands::push::DEFAULT_MESSAGE as DEFAULT_PUSH_MESSAGE;
pub use commands::{CmdMessage, CmdResult, MessageLevel, TagCount};
