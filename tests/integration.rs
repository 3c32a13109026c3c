//! Integration tests for the papaya CLI


use assert_cmd::Command;
use harness::{TestTree, listed, run_papaya};
use predicates::prelude::*;

/// a.txt, b/c.txt, b/d/ (empty), e.txt
fn policy_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");
    tree.add_file("b/c.txt", "c");
    tree.add_dir("b/d");
    tree.add_file("e.txt", "e");
    tree
}

fn run_relative(tree: &TestTree, extra: &[&str]) -> Vec<String> {
    let mut args = vec!["-r", "--no-summary"];
    args.extend_from_slice(extra);
    let (stdout, stderr, success) = run_papaya(tree.path(), &args);
    assert!(success, "papaya should succeed: {}", stderr);
    listed(&stdout).into_iter().map(String::from).collect()
}

#[test]
fn test_default_pre_order() {
    let tree = TestTree::sample();
    assert_eq!(run_relative(&tree, &[]), vec![".", "sub", "sub/y.txt", "x.txt"]);
}

#[test]
fn test_absolute_paths_by_default() {
    let tree = TestTree::sample();
    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_papaya(tree.path(), &[&root, "--no-summary"]);
    assert!(success);

    let lines = listed(&stdout);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], root);
    assert!(lines.iter().all(|l| l.starts_with(&root)));
}

#[test]
fn test_policies() {
    let tree = policy_tree();
    assert_eq!(
        run_relative(&tree, &["--policy", "post-order"]),
        vec!["a.txt", "b/c.txt", "b/d", "b", "e.txt", "."]
    );
    assert_eq!(
        run_relative(&tree, &["--policy", "files-only"]),
        vec!["a.txt", "b/c.txt", "e.txt"]
    );
    assert_eq!(
        run_relative(&tree, &["--policy", "dirs-only"]),
        vec![".", "b", "b/d"]
    );
    assert_eq!(
        run_relative(&tree, &["--policy", "leaves-only"]),
        vec!["a.txt", "b/c.txt", "b/d", "e.txt"]
    );
}

#[test]
fn test_sort_dirs_first() {
    let tree = policy_tree();
    assert_eq!(
        run_relative(&tree, &["--sort", "dirs-first"]),
        vec![".", "b", "b/d", "b/c.txt", "a.txt", "e.txt"]
    );
}

#[test]
fn test_level_flag() {
    let tree = policy_tree();
    assert_eq!(run_relative(&tree, &["-L", "1"]), vec![".", "a.txt", "b", "e.txt"]);
}

#[test]
fn test_hidden_files_need_all_flag() {
    let tree = TestTree::sample();
    tree.add_file(".secret", "s");

    let without = run_relative(&tree, &[]);
    assert!(!without.contains(&".secret".to_string()));

    let with = run_relative(&tree, &["-a"]);
    assert!(with.contains(&".secret".to_string()));
}

#[test]
fn test_ignore_pattern() {
    let tree = policy_tree();
    assert_eq!(
        run_relative(&tree, &["-I", "*.txt"]),
        vec![".", "b", "b/d"]
    );
    assert_eq!(
        run_relative(&tree, &["-I", "b", "-I", "e.txt"]),
        vec![".", "a.txt"]
    );
}

#[test]
fn test_summary_line() {
    let tree = TestTree::sample();
    let (stdout, _stderr, success) = run_papaya(tree.path(), &[]);
    assert!(success);
    assert!(
        stdout.ends_with("2 directories, 2 files\n"),
        "should end with summary: {}",
        stdout
    );
}

#[test]
fn test_json_output() {
    let tree = TestTree::sample();
    let (stdout, _stderr, success) = run_papaya(tree.path(), &["--json", "-r"]);
    assert!(success);

    let entries: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line should be JSON"))
        .collect();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["path"], ".");
    assert_eq!(entries[0]["kind"], "directory");
    assert_eq!(entries[0]["depth"], 0);
    assert_eq!(entries[2]["path"], "sub/y.txt");
    assert_eq!(entries[2]["kind"], "file");
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let tree = TestTree::sample();
    let (stdout, stderr, success) = run_papaya(tree.path(), &["-r", "--no-summary", "-vv"]);
    assert!(success);
    assert_eq!(listed(&stdout), vec![".", "sub", "sub/y.txt", "x.txt"]);
    assert!(stderr.contains("expanded directory"), "debug logs expected: {}", stderr);
}

#[test]
fn test_missing_path_fails() {
    let tree = TestTree::new();
    Command::cargo_bin("papaya")
        .unwrap()
        .current_dir(tree.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_file_path_fails() {
    let tree = TestTree::sample();
    Command::cargo_bin("papaya")
        .unwrap()
        .current_dir(tree.path())
        .arg("x.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_invalid_pattern_fails() {
    let tree = TestTree::sample();
    Command::cargo_bin("papaya")
        .unwrap()
        .current_dir(tree.path())
        .args(["-I", "["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ignore pattern"));
}

#[test]
fn test_fail_on_cycle_requires_follow_links() {
    let tree = TestTree::sample();
    Command::cargo_bin("papaya")
        .unwrap()
        .current_dir(tree.path())
        .arg("--fail-on-cycle")
        .assert()
        .failure();
}
