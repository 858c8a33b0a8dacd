use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::store::PostStore;
use crate::vcs::Git;

use super::helpers::report_git;

pub const DEFAULT_MESSAGE: &str = "blog: update posts";

/// Stages the whole store directory and, if anything is pending there,
/// commits with `message` and pushes.
pub fn run<S: PostStore, R: ProcessRunner>(
    store: &S,
    git: &Git<R>,
    message: &str,
) -> Result<CmdResult> {
    let root = store.root();
    let mut result = CmdResult::default();

    report_git(&mut result, &git.add(root));
    let status = git.status_porcelain(root);
    report_git(&mut result, &status);

    if status.stdout.is_empty() {
        result.add_message(CmdMessage::info("No changes to push."));
        return Ok(result);
    }

    report_git(&mut result, &git.commit(message));
    if report_git(&mut result, &git.push()) {
        let settings = git.settings();
        result.add_message(CmdMessage::success(format!(
            "Pushed to {}/{}.",
            settings.remote, settings.branch
        )));
    }
    Ok(result)
}
