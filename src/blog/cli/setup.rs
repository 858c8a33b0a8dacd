use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blog", bin_name = "blog", version)]
#[command(about = "Manage your MDX blog posts from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository root (defaults to the enclosing git checkout)
    #[arg(long, global = true, env = "BLOG_ROOT")]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new blog post
    #[command(alias = "n")]
    New {
        /// Title of the post
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Don't open the new post in the editor
        #[arg(long)]
        no_edit: bool,
    },

    /// List all blog posts
    #[command(alias = "ls")]
    List {
        /// Show only drafts
        #[arg(long)]
        drafts: bool,

        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Open a post in your editor
    #[command(alias = "e")]
    Edit { slug: String },

    /// Print a post's metadata and body
    #[command(alias = "v")]
    Show { slug: String },

    /// Print the file path of a post
    Path { slug: String },

    /// Set draft to false, commit, and push
    Publish { slug: String },

    /// Set draft to true
    Unpublish { slug: String },

    /// Delete a post (with confirmation)
    #[command(alias = "rm")]
    Delete {
        slug: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Stage, commit, and push all post changes
    Push {
        /// Commit message
        #[arg(short, long, default_value = blogctl::api::DEFAULT_PUSH_MESSAGE)]
        message: String,
    },

    /// Show git status for the posts directory
    Status,

    /// List all tags with post counts
    Tags,
}
