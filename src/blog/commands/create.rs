use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::{initial_body, FrontMatter};
use crate::process::ProcessRunner;
use crate::slug::slugify;
use crate::store::PostStore;
use chrono::NaiveDate;

use super::helpers::launch_editor;

/// Options for a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub open_editor: bool,
}

pub fn run<S: PostStore, R: ProcessRunner>(
    store: &mut S,
    runner: &R,
    editor: &str,
    new_post: NewPost,
) -> Result<CmdResult> {
    let title = new_post.title.trim().to_string();
    let slug = slugify(&title);
    if slug.is_empty() {
        return Err(BlogError::Api(format!(
            "Title '{}' has no characters usable in a slug",
            title
        )));
    }

    let body = initial_body(&title);
    let front_matter = FrontMatter::new(title, new_post.tags, new_post.date);
    let stored = store.create(&slug, front_matter, body)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created: {}",
        stored.path.display()
    )));

    if new_post.open_editor {
        launch_editor(runner, editor, &stored.path, &mut result)?;
    }

    Ok(result)
}
