use crate::error::{BlogError, Result};
use crate::process::ProcessRunner;
use std::env;
use std::path::Path;

/// Picks the editor command: `$EDITOR`, then `$VISUAL`, then `fallback`.
pub fn resolve_editor(fallback: &str) -> String {
    resolve_editor_with(|key| env::var(key).ok(), fallback)
}

fn resolve_editor_with<F>(lookup: F, fallback: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Opens `path` in `editor` and waits for it to exit.
///
/// `editor` may carry its own arguments (`code --wait`); the path is appended
/// last. Returns the editor's exit code.
pub fn open_in_editor<R: ProcessRunner>(
    runner: &R,
    editor: &str,
    path: &Path,
) -> Result<Option<i32>> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| BlogError::Process("No editor configured. Set $EDITOR.".to_string()))?;

    let mut args: Vec<String> = parts.map(str::to_string).collect();
    args.push(path.to_string_lossy().into_owned());

    runner.interactive(program, &args)
}
