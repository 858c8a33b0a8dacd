//! # blogctl
//!
//! A library for managing a directory of front-matter blog posts, with a
//! small CLI (`blog`) on top. Posts are `.mdx`/`.md` files whose YAML header
//! carries the title, description, publication date, tags and draft flag;
//! git is used to commit and push them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - BlogApi<S, R>: thin facade over commands                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                            │
//!                  ▼                            ▼
//! ┌───────────────────────────────┐ ┌──────────────────────────┐
//! │  Store (store/)               │ │  Gateways                │
//! │  - PostStore trait            │ │  - vcs.rs (git)          │
//! │  - FileStore, InMemoryStore   │ │  - editor.rs             │
//! │  - frontmatter.rs codec       │ │  - process.rs runner     │
//! └───────────────────────────────┘ └──────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward takes plain arguments, returns
//! `Result<CmdResult>`, and never prints or exits. Both the store and the
//! process runner are traits, so the commands are tested against
//! `InMemoryStore` and `FakeRunner` without touching the filesystem or
//! launching git.
//!
//! ## Modules
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Storage trait and implementations
//! - [`frontmatter`]: Metadata block parsing and rendering
//! - [`model`]: `FrontMatter`, `Post`, `StoredPost`
//! - [`slug`]: Title to slug conversion
//! - [`vcs`]: Git gateway
//! - [`editor`]: Editor resolution and launch
//! - [`process`]: Subprocess runner abstraction
//! - [`config`]: Layered configuration
//! - [`init`]: Production wiring (repository root, config, store)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod frontmatter;
pub mod init;
pub mod model;
pub mod process;
pub mod slug;
pub mod store;
pub mod vcs;
