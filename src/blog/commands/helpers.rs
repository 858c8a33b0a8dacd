use crate::commands::{CmdMessage, CmdResult};
use crate::editor::open_in_editor;
use crate::error::{BlogError, Result};
use crate::model::StoredPost;
use crate::process::ProcessRunner;
use crate::store::PostStore;
use crate::vcs::GitOutput;
use std::path::Path;

/// Resolves a slug or fails with `PostNotFound`.
pub fn require_post<S: PostStore>(store: &S, slug: &str) -> Result<StoredPost> {
    store
        .find(slug)?
        .ok_or_else(|| BlogError::PostNotFound(slug.to_string()))
}

/// Records a git failure on the result. Returns true when the call succeeded.
pub fn report_git(result: &mut CmdResult, output: &GitOutput) -> bool {
    match &output.error {
        Some(err) => {
            result.add_message(CmdMessage::error(format!("git error: {}", err)));
            false
        }
        None => true,
    }
}

/// Opens `path` in the editor. A non-zero exit is a warning, not an error:
/// whatever the editor wrote to disk stays.
pub fn launch_editor<R: ProcessRunner>(
    runner: &R,
    editor: &str,
    path: &Path,
    result: &mut CmdResult,
) -> Result<()> {
    match open_in_editor(runner, editor, path)? {
        Some(0) => {}
        Some(code) => result.add_message(CmdMessage::warning(format!(
            "Editor '{}' exited with status {}",
            editor, code
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "Editor '{}' was terminated",
            editor
        ))),
    }
    Ok(())
}
