use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PostStore;

use super::helpers::require_post;

/// Removes a post's file. Nothing is touched unless `confirmed` is set; the
/// caller is responsible for asking.
pub fn run<S: PostStore>(store: &mut S, slug: &str, confirmed: bool) -> Result<CmdResult> {
    let stored = require_post(store, slug)?;
    let mut result = CmdResult::default();

    if !confirmed {
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    store.delete(&stored.path)?;
    result.add_message(CmdMessage::success(format!(
        "Deleted: {} ({})",
        stored.post.title(),
        stored.file_name()
    )));
    Ok(result)
}
