use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::store::PostStore;
use crate::vcs::Git;

use super::helpers::{report_git, require_post};

/// Clears the draft flag, saves, then commits and pushes the file.
///
/// Git runs best-effort: failures are reported on the result and the saved
/// file is left as is.
pub fn publish<S: PostStore, R: ProcessRunner>(
    store: &mut S,
    git: &Git<R>,
    slug: &str,
) -> Result<CmdResult> {
    let mut stored = require_post(store, slug)?;
    stored.post.front_matter.draft = false;
    store.save(&stored.path, &stored.post)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Published: {}",
        stored.post.title()
    )));

    report_git(&mut result, &git.add(&stored.path));
    report_git(
        &mut result,
        &git.commit(&format!("blog: publish {}", stored.slug)),
    );
    if report_git(&mut result, &git.push()) {
        let settings = git.settings();
        result.add_message(CmdMessage::info(format!(
            "Pushed to {}/{}.",
            settings.remote, settings.branch
        )));
    }

    Ok(result)
}

/// Sets the draft flag and saves. No version-control action.
pub fn unpublish<S: PostStore>(store: &mut S, slug: &str) -> Result<CmdResult> {
    let mut stored = require_post(store, slug)?;
    stored.post.front_matter.draft = true;
    store.save(&stored.path, &stored.post)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Unpublished: {}",
        stored.post.title()
    )));
    Ok(result)
}
