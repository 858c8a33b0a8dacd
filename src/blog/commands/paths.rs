use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PostStore;

use super::helpers::require_post;

pub fn run<S: PostStore>(store: &S, slug: &str) -> Result<CmdResult> {
    let stored = require_post(store, slug)?;
    Ok(CmdResult::default().with_post_paths(vec![stored.path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FrontMatter, Post};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    #[test]
    fn reports_resolved_path() {
        let mut store = InMemoryStore::new();
        let fm = FrontMatter::new("P".into(), vec![], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        store.insert("p.md", Post::new(fm, String::new()));

        let result = run(&store, "p").unwrap();
        assert_eq!(result.post_paths, vec![PathBuf::from("/blog/posts/p.md")]);
    }
}
