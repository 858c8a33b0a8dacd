use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MISSING_GIT: &str = "blogctl-test-missing-git";

fn blog(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("blog").unwrap();
    cmd.current_dir(root)
        .env("BLOG_ROOT", root)
        .env("BLOG_GIT", MISSING_GIT)
        .env_remove("BLOG_POSTS_DIR")
        .env_remove("BLOG_FILE_EXT")
        .env_remove("RUST_LOG");
    cmd
}

fn posts_dir(root: &Path) -> PathBuf {
    root.join("src/content/posts")
}

fn new_post(root: &Path, title: &str, tags: &str) {
    blog(root)
        .args(["new", title, "--tags", tags, "--no-edit"])
        .assert()
        .success();
}

#[test]
fn new_writes_draft_with_front_matter() {
    let temp = TempDir::new().unwrap();
    blog(temp.path())
        .args(["new", "Hello, World! 2024", "-t", "rust, cli", "--no-edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("hello-world-2024.mdx"));

    let text = fs::read_to_string(posts_dir(temp.path()).join("hello-world-2024.mdx")).unwrap();
    assert!(text.starts_with("---\n"));
    assert!(text.contains("title:") && text.contains("Hello, World! 2024"));
    assert!(text.contains("draft: true"));
    assert!(text.contains("- rust\n- cli\n"));
    assert!(text.ends_with("---\n\n# Hello, World! 2024\n\nWrite your post here.\n"));
}

#[test]
fn new_on_existing_slug_fails() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Twice", "");

    blog(temp.path())
        .args(["new", "twice", "--no-edit"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn list_filters_and_reports_empty() {
    let temp = TempDir::new().unwrap();
    blog(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."));

    new_post(temp.path(), "Alpha", "rust");
    new_post(temp.path(), "Beta", "life");

    blog(temp.path())
        .args(["list", "--tag", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("slug: alpha"))
        .stdout(predicate::str::contains("Beta").not());
}

#[test]
fn unpublish_and_missing_slugs() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Toggle", "");

    blog(temp.path())
        .args(["unpublish", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unpublished: Toggle"));

    for cmd in ["edit", "show", "path", "publish", "unpublish"] {
        blog(temp.path())
            .args([cmd, "ghost"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Post 'ghost' not found."));
    }
}

#[test]
fn publish_survives_missing_git() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Ship It", "");

    blog(temp.path())
        .args(["publish", "ship-it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Published: Ship It"))
        .stderr(predicate::str::contains("git error:"));

    let text = fs::read_to_string(posts_dir(temp.path()).join("ship-it.mdx")).unwrap();
    assert!(text.contains("draft: false"));
}

#[test]
fn publish_of_hand_written_post_changes_only_draft_line() {
    let temp = TempDir::new().unwrap();
    let dir = posts_dir(temp.path());
    fs::create_dir_all(&dir).unwrap();
    let original = "---\ndescription: ''\ndraft: true\npubDate: '2024-03-09'\ntags:\n- rust\ntitle: Hello\n---\n\n# Hello\n";
    fs::write(dir.join("hello.md"), original).unwrap();

    blog(temp.path()).args(["publish", "hello"]).assert().success();
    assert_eq!(
        fs::read_to_string(dir.join("hello.md")).unwrap(),
        original.replace("draft: true", "draft: false")
    );

    blog(temp.path()).args(["unpublish", "hello"]).assert().success();
    assert_eq!(fs::read_to_string(dir.join("hello.md")).unwrap(), original);
}

#[test]
fn list_and_tags_skip_undecodable_files() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Readable", "rust");
    fs::write(
        posts_dir(temp.path()).join("latin1.md"),
        b"---\ntitle: Caf\xe9\n---\n",
    )
    .unwrap();

    blog(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Readable"))
        .stderr(predicate::str::contains("latin1.md"));
    blog(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("  rust (1)\n");
}

#[test]
fn git_failure_is_reported_once() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Once", "");

    let output = blog(temp.path())
        .args(["publish", "once"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches(MISSING_GIT).count(), 3, "{stderr}");
    assert!(!stderr.contains("WARN"), "{stderr}");
}

#[test]
fn delete_needs_confirmation() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Doomed", "");
    let path = posts_dir(temp.path()).join("doomed.mdx");

    blog(temp.path())
        .args(["delete", "doomed"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));
    assert!(path.exists());

    blog(temp.path())
        .args(["delete", "doomed"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Doomed (doomed.mdx)"));
    assert!(!path.exists());

    blog(temp.path())
        .args(["delete", "doomed", "--yes"])
        .assert()
        .code(1);
}

#[test]
fn tags_are_summarized_by_count() {
    let temp = TempDir::new().unwrap();
    blog(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found."));

    new_post(temp.path(), "One", "a,b");
    new_post(temp.path(), "Two", "a");
    new_post(temp.path(), "Three", "c");

    blog(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("  a (2)\n  b (1)\n  c (1)\n");
}

#[test]
fn show_prints_metadata_and_body() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Visible", "x");

    blog(temp.path())
        .args(["show", "visible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slug: visible"))
        .stdout(predicate::str::contains("draft: yes"))
        .stdout(predicate::str::contains("Write your post here."));
}

#[test]
fn posts_dir_comes_from_repository_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("blog.toml"),
        "posts_dir = \"content\"\nfile_ext = \"md\"\n",
    )
    .unwrap();

    new_post(temp.path(), "Configured", "");
    assert!(temp.path().join("content/configured.md").exists());

    blog(temp.path())
        .args(["path", "configured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configured.md"));
}

#[cfg(unix)]
#[test]
fn edit_runs_editor_from_environment() {
    let temp = TempDir::new().unwrap();
    new_post(temp.path(), "Editable", "");

    blog(temp.path())
        .env("EDITOR", "true")
        .args(["edit", "editable"])
        .assert()
        .success();
}
