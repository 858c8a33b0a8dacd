use crate::commands::CmdResult;
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::store::PostStore;

use super::helpers::{launch_editor, require_post};

/// Opens the post's file in the editor. The editor owns any changes; nothing
/// is re-read or saved afterwards.
pub fn run<S: PostStore, R: ProcessRunner>(
    store: &S,
    runner: &R,
    editor: &str,
    slug: &str,
) -> Result<CmdResult> {
    let stored = require_post(store, slug)?;
    let mut result = CmdResult::default();
    launch_editor(runner, editor, &stored.path, &mut result)?;
    Ok(result)
}
