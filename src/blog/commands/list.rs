use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PostStore;

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub drafts_only: bool,
    pub tag: Option<String>,
}

pub fn run<S: PostStore>(store: &S, filter: &PostFilter) -> Result<CmdResult> {
    let listed = store
        .list_all()?
        .into_iter()
        .filter(|sp| !filter.drafts_only || sp.post.is_draft())
        .filter(|sp| match &filter.tag {
            Some(tag) => sp.post.front_matter.has_tag(tag),
            None => true,
        })
        .collect();

    Ok(CmdResult::default().with_listed_posts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FrontMatter, Post};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for (file, title, tags, draft) in [
            ("b.mdx", "B", vec!["rust"], true),
            ("a.mdx", "A", vec!["rust", "cli"], false),
            ("c.md", "C", vec!["life"], true),
        ] {
            let mut fm = FrontMatter::new(
                title.into(),
                tags.into_iter().map(String::from).collect(),
                date,
            );
            fm.draft = draft;
            store.insert(file, Post::new(fm, String::new()));
        }
        store
    }

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.listed_posts.iter().map(|p| p.post.title()).collect()
    }

    #[test]
    fn lists_everything_in_filename_order() {
        let result = run(&seeded(), &PostFilter::default()).unwrap();
        assert_eq!(titles(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn filters_drafts() {
        let filter = PostFilter {
            drafts_only: true,
            tag: None,
        };
        assert_eq!(titles(&run(&seeded(), &filter).unwrap()), vec!["B", "C"]);
    }

    #[test]
    fn filters_by_tag_and_drafts_together() {
        let filter = PostFilter {
            drafts_only: true,
            tag: Some("rust".into()),
        };
        assert_eq!(titles(&run(&seeded(), &filter).unwrap()), vec!["B"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let result = run(&InMemoryStore::new(), &PostFilter::default()).unwrap();
        assert!(result.listed_posts.is_empty());
    }
}
