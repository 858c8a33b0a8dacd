//! Dispatch and per-command handlers.
//!
//! This is the only place that talks to the terminal: it builds the context,
//! calls the API, prints results, and asks for delete confirmation. Errors
//! bubble up to `main`, which prints them and exits with status 1.

use super::render::{
    print_messages, render_full_post, render_paths, render_post_list, render_tag_counts,
};
use super::setup::{Cli, Commands};
use blogctl::api::{BlogApi, CmdResult, PostFilter};
use blogctl::error::{BlogError, Result};
use blogctl::init::initialize;
use blogctl::model::parse_tags;
use blogctl::process::SystemRunner;
use blogctl::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

type Api = BlogApi<FileStore, SystemRunner>;

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.root)?;
    let mut api = ctx.api;

    match cli.command {
        Commands::New {
            title,
            tags,
            no_edit,
        } => handle_new(&mut api, title.join(" "), &tags, no_edit),
        Commands::List { drafts, tag } => handle_list(&api, drafts, tag),
        Commands::Edit { slug } => finish(api.edit_post(&slug)?),
        Commands::Show { slug } => handle_show(&api, &slug),
        Commands::Path { slug } => handle_path(&api, &slug),
        Commands::Publish { slug } => finish(api.publish_post(&slug)?),
        Commands::Unpublish { slug } => finish(api.unpublish_post(&slug)?),
        Commands::Delete { slug, yes } => handle_delete(&mut api, &slug, yes),
        Commands::Push { message } => finish(api.push_changes(&message)?),
        Commands::Status => handle_status(&api),
        Commands::Tags => handle_tags(&api),
    }
}

fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(api: &mut Api, title: String, tags: &str, no_edit: bool) -> Result<()> {
    let result = api.create_post(&title, parse_tags(tags), !no_edit)?;
    finish(result)
}

fn handle_list(api: &Api, drafts: bool, tag: Option<String>) -> Result<()> {
    let filter = PostFilter {
        drafts_only: drafts,
        tag,
    };
    let result = api.list_posts(&filter)?;
    print!("{}", render_post_list(&result.listed_posts));
    finish(result)
}

fn handle_show(api: &Api, slug: &str) -> Result<()> {
    let result = api.show_post(slug)?;
    for post in &result.listed_posts {
        print!("{}", render_full_post(post));
    }
    finish(result)
}

fn handle_path(api: &Api, slug: &str) -> Result<()> {
    let result = api.post_path(slug)?;
    print!("{}", render_paths(&result.post_paths));
    finish(result)
}

fn handle_delete(api: &mut Api, slug: &str, yes: bool) -> Result<()> {
    // Resolve first so a bad slug fails before prompting.
    let stored = api
        .find_post(slug)?
        .ok_or_else(|| BlogError::PostNotFound(slug.to_string()))?;

    let confirmed = yes
        || confirm(&format!(
            "Delete '{}' ({})?",
            stored.post.title(),
            stored.file_name()
        ))?;
    let result = api.delete_post(slug, confirmed)?;
    finish(result)
}

fn handle_status(api: &Api) -> Result<()> {
    let result = api.status()?;
    if let Some(status) = &result.vcs_status {
        println!("{}", status);
    }
    finish(result)
}

fn handle_tags(api: &Api) -> Result<()> {
    let result = api.tag_summary()?;
    print!("{}", render_tag_counts(&result.tag_counts));
    finish(result)
}

/// Asks a yes/no question on stdin. End of input counts as no.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_explicit_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
