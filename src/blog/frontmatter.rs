//! Front matter codec.
//!
//! A post file is a YAML metadata block fenced by `---` lines, followed by the
//! raw body:
//!
//! ```text
//! ---
//! title: Hello, World
//! description: ''
//! pubDate: '2024-03-09'
//! tags:
//! - rust
//! draft: true
//! ---
//!
//! # Hello, World
//! ```
//!
//! The body is everything after the closing fence, byte for byte. Saving goes
//! through [`rewrite`], which keeps the bytes of any file whose post did not
//! change, whoever wrote it.

use crate::error::{BlogError, Result};
use crate::model::{FrontMatter, Post};
use std::path::Path;

const FENCE: &str = "---";

/// Byte ranges of a fenced post file.
struct Sections {
    yaml: std::ops::Range<usize>,
    body_start: usize,
}

fn locate(text: &str) -> std::result::Result<Sections, &'static str> {
    let yaml_start = strip_fence_line(text)
        .map(|rest| text.len() - rest.len())
        .ok_or("missing opening '---'")?;

    let mut offset = yaml_start;
    for line in text[yaml_start..].split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            return Ok(Sections {
                yaml: yaml_start..offset,
                body_start: offset + line.len(),
            });
        }
        offset += line.len();
    }
    Err("missing closing '---'")
}

/// Parses a post file. `path` is only used for error reporting.
pub fn parse(text: &str, path: &Path) -> Result<Post> {
    let malformed = |reason: &str| BlogError::MalformedPost {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let sections = locate(text).map_err(malformed)?;
    let front_matter: FrontMatter = serde_yaml::from_str(&text[sections.yaml])
        .map_err(|e| malformed(&e.to_string()))?;

    Ok(Post {
        front_matter,
        body: text[sections.body_start..].to_string(),
    })
}

/// Renders a post back into file contents.
pub fn render(post: &Post) -> Result<String> {
    let yaml = serde_yaml::to_string(&post.front_matter)?;
    Ok(format!("{FENCE}\n{}{FENCE}\n{}", quote_pub_date(&yaml), post.body))
}

/// Renders `post` over `original`, the text it was loaded from.
///
/// Unchanged posts keep their original bytes, and a post whose only change is
/// the draft flag gets just its `draft:` line rewritten. Anything else is a
/// full [`render`].
pub fn rewrite(original: &str, post: &Post, path: &Path) -> Result<String> {
    let Ok(current) = parse(original, path) else {
        return render(post);
    };
    if current == *post {
        return Ok(original.to_string());
    }

    let mut draft_flipped = current;
    draft_flipped.front_matter.draft = post.front_matter.draft;
    if draft_flipped == *post {
        if let Some(text) = replace_draft(original, post.front_matter.draft) {
            if parse(&text, path).is_ok_and(|reparsed| reparsed == *post) {
                return Ok(text);
            }
        }
    }
    render(post)
}

/// Sets the top-level `draft:` line, appending one to the block if absent.
fn replace_draft(text: &str, draft: bool) -> Option<String> {
    let sections = locate(text).ok()?;
    let block = &text[sections.yaml.clone()];

    let mut offset = sections.yaml.start;
    for line in block.split_inclusive('\n') {
        if let Some(value) = line.strip_prefix("draft:") {
            let ending = &value[value.trim_end_matches(['\r', '\n']).len()..];
            return Some(format!(
                "{}draft: {}{}{}",
                &text[..offset],
                draft,
                ending,
                &text[offset + line.len()..]
            ));
        }
        offset += line.len();
    }

    let newline = if text[..sections.yaml.start].ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };
    let end = sections.yaml.end;
    Some(format!("{}draft: {}{}{}", &text[..end], draft, newline, &text[end..]))
}

/// `pubDate` is an ISO date string, not a YAML timestamp.
fn quote_pub_date(yaml: &str) -> String {
    yaml.split_inclusive('\n')
        .map(|line| match line.strip_prefix("pubDate: ") {
            Some(value) if !value.starts_with(['\'', '"']) => {
                format!("pubDate: '{}'\n", value.trim_end())
            }
            _ => line.to_string(),
        })
        .collect()
}

fn strip_fence_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    rest.strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))
}
