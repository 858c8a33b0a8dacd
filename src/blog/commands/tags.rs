use crate::commands::{CmdResult, TagCount};
use crate::error::Result;
use crate::store::PostStore;
use std::collections::HashMap;

/// Counts posts per tag, most used first. Ties are ordered by tag name.
pub fn run<S: PostStore>(store: &S) -> Result<CmdResult> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for stored in store.list_all()? {
        for tag in stored.post.front_matter.tags {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut tag_counts: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    tag_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

    Ok(CmdResult::default().with_tag_counts(tag_counts))
}
