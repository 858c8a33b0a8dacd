use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::store::PostStore;
use crate::vcs::Git;

use super::helpers::report_git;

/// Short-form version-control status limited to the store directory.
pub fn run<S: PostStore, R: ProcessRunner>(store: &S, git: &Git<R>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let status = git.status_short(store.root());
    report_git(&mut result, &status);

    if status.stdout.is_empty() {
        result.add_message(CmdMessage::info("No changes in posts directory."));
    } else {
        result.vcs_status = Some(status.stdout);
    }
    Ok(result)
}
