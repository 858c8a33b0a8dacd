use blogctl::api::{CmdMessage, MessageLevel, StoredPost, TagCount};
use colored::Colorize;
use std::path::PathBuf;

const INDENT: &str = "          ";
const SEPARATOR: &str = "--------------------------------";

/// Prints messages; errors and warnings go to stderr.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_post_list(posts: &[StoredPost]) -> String {
    if posts.is_empty() {
        return "No posts found.\n".to_string();
    }

    let mut out = String::new();
    for sp in posts {
        let fm = &sp.post.front_matter;
        let date = fm
            .pub_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());
        let draft = if fm.draft {
            format!(" {}", "[DRAFT]".yellow())
        } else {
            String::new()
        };

        out.push_str(&format!("  {}  {}{}\n", date.dimmed(), fm.title.bold(), draft));
        if !fm.tags.is_empty() {
            out.push_str(&format!("{}tags: {}\n", INDENT, fm.tags.join(", ")));
        }
        out.push_str(&format!("{}slug: {}\n", INDENT, sp.slug));
    }
    out
}

pub(super) fn render_full_post(sp: &StoredPost) -> String {
    let fm = &sp.post.front_matter;
    let mut out = format!("{}\n", fm.title.bold());
    out.push_str(&format!("slug: {}\n", sp.slug));
    if let Some(date) = fm.pub_date {
        out.push_str(&format!("date: {}\n", date));
    }
    if let Some(description) = fm.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("description: {}\n", description));
    }
    if !fm.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", fm.tags.join(", ")));
    }
    out.push_str(&format!("draft: {}\n", if fm.draft { "yes" } else { "no" }));
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(sp.post.body.trim_start_matches('\n'));
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub(super) fn render_tag_counts(counts: &[TagCount]) -> String {
    if counts.is_empty() {
        return "No tags found.\n".to_string();
    }
    counts
        .iter()
        .map(|tc| format!("  {} ({})\n", tc.tag, tc.count))
        .collect()
}

pub(super) fn render_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("{}\n", p.display()))
        .collect()
}
