use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PostStore;

use super::helpers::require_post;

pub fn run<S: PostStore>(store: &S, slug: &str) -> Result<CmdResult> {
    let stored = require_post(store, slug)?;
    Ok(CmdResult::default().with_listed_posts(vec![stored]))
}
