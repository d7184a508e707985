use super::test_helpers::{assert_output_contains, stderr, stdout, TestEnv};

#[test]
fn test_help_exits_successfully() {
    let env = TestEnv::new();

    for args in [&["help"][..], &[][..], &["--help"][..]] {
        let output = env.run(args);
        assert!(output.status.success(), "{args:?} should exit 0");
        assert_output_contains(&output, "Mark a stash as favorite", "help output");
    }
}

#[test]
fn test_commands_require_stash_id() {
    let env = TestEnv::new();

    for command in ["mark", "unmark", "toggle", "apply", "pop", "drop"] {
        let output = env.run(&[command]);
        assert_eq!(output.status.code(), Some(1), "{command} without id");
        assert_output_contains(&output, "Please provide a stash ID", command);
    }
}

#[test]
fn test_invalid_stash_id_is_usage_error() {
    let env = TestEnv::new();

    let output = env.run(&["mark", "not-a-stash"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!env.favorites_file().exists());
}

#[test]
fn test_mark_then_list_shows_star() {
    let env = TestEnv::new();
    env.stash("older work");
    env.stash("newer work");

    let mark = env.run(&["mark", "stash@{1}"]);
    assert!(mark.status.success());
    assert_output_contains(&mark, "Marked stash@{1} as favorite", "mark");

    let list = env.run(&["list"]);
    assert!(list.status.success());
    let out = stdout(&list);
    assert!(out.contains("All stashes (★ = favorite):"), "{out}");
    assert!(out.contains("  stash@{0}: "), "{out}");
    assert!(out.contains("★ stash@{1}: "), "{out}");
    assert!(out.find("stash@{0}").unwrap() < out.find("stash@{1}").unwrap());

    let favorites = env.run(&["favorites"]);
    let out = stdout(&favorites);
    assert!(out.contains("Favorite stashes:"), "{out}");
    assert!(out.contains("older work"), "{out}");
    assert!(!out.contains("newer work"), "{out}");
}

#[test]
fn test_empty_favorites_message() {
    let env = TestEnv::new();
    env.stash("something");

    let output = env.run(&["favorites"]);

    assert!(output.status.success());
    assert_output_contains(&output, "No favorite stashes found.", "favorites");
}

#[test]
fn test_unmark_non_favorite_is_informational() {
    let env = TestEnv::new();

    let output = env.run(&["unmark", "stash@{4}"]);

    assert!(output.status.success());
    assert_output_contains(&output, "stash@{4} is not marked as favorite", "unmark");
    assert!(!env.favorites_file().exists(), "nothing should be written");
}

#[test]
fn test_pop_evicts_favorite() {
    let env = TestEnv::new();
    env.stash("keep me");

    assert!(env.run(&["mark", "stash@{0}"]).status.success());
    let output = env.run(&["pop", "stash@{0}"]);

    assert!(output.status.success());
    assert_output_contains(&output, "Popped stash@{0}", "pop");
    assert_eq!(env.stash_count(), 0);
    assert_eq!(env.read_favorites(), serde_json::json!({ "stashes": {} }));
}

#[test]
fn test_drop_evicts_favorite() {
    let env = TestEnv::new();
    env.stash("throw away");

    assert!(env.run(&["mark", "0"]).status.success());
    let output = env.run(&["drop", "0"]);

    assert!(output.status.success());
    assert_output_contains(&output, "Dropped stash@{0}", "drop");
    assert_eq!(env.read_favorites(), serde_json::json!({ "stashes": {} }));
}

#[test]
fn test_apply_keeps_favorite() {
    let env = TestEnv::new();
    env.stash("apply me");

    assert!(env.run(&["mark", "stash@{0}"]).status.success());
    let output = env.run(&["apply", "stash@{0}"]);

    assert!(output.status.success());
    assert_output_contains(&output, "Applied stash@{0}", "apply");
    assert_eq!(env.stash_count(), 1);
    assert_eq!(
        env.read_favorites(),
        serde_json::json!({ "stashes": { "stash@{0}": true } })
    );
}

#[test]
fn test_backend_failure_exits_zero_and_keeps_favorite() {
    let env = TestEnv::new();

    assert!(env.run(&["mark", "stash@{3}"]).status.success());

    for command in ["apply", "pop", "drop"] {
        let output = env.run(&[command, "stash@{3}"]);
        assert!(output.status.success(), "{command} failure should still exit 0");
        assert_output_contains(&output, &format!("Failed to {command} stash@{{3}}"), command);
    }

    assert_eq!(
        env.read_favorites(),
        serde_json::json!({ "stashes": { "stash@{3}": true } })
    );
}

#[test]
fn test_libgit2_backend_is_selectable() {
    let env = TestEnv::new();
    env.stash("first");
    env.stash("second");

    assert!(env.run(&["mark", "stash@{0}"]).status.success());

    let list = env.run(&["list", "--backend", "libgit2"]);
    let out = stdout(&list);
    assert!(out.contains("★ stash@{0}: "), "{out}");
    assert!(out.contains("second"), "{out}");

    let dropped = env.run(&["drop", "stash@{0}", "--backend", "libgit2"]);
    assert_output_contains(&dropped, "Dropped stash@{0}", "libgit2 drop");
    assert_eq!(env.stash_count(), 1);
    assert_eq!(env.read_favorites(), serde_json::json!({ "stashes": {} }));
}

#[test]
fn test_default_backend_applies_with_staged_changes() {
    let env = TestEnv::new();
    env.stash("stashed readme");
    std::fs::write(env.repo_path().join("other.txt"), "staged\n").unwrap();
    env.git(&["add", "other.txt"]);

    let apply = env.run(&["apply", "stash@{0}"]);
    assert_output_contains(&apply, "Applied stash@{0}", "apply with staged index");
    let readme = std::fs::read_to_string(env.repo_path().join("README.md")).unwrap();
    assert!(readme.contains("stashed readme"), "{readme}");

    // Restore the readme so pop applies onto a clean file
    env.git(&["checkout", "--", "README.md"]);
    assert!(env.run(&["mark", "stash@{0}"]).status.success());
    let pop = env.run(&["pop", "stash@{0}"]);
    assert_output_contains(&pop, "Popped stash@{0}", "pop with staged index");
    assert_eq!(env.stash_count(), 0);
    assert_eq!(env.read_favorites(), serde_json::json!({ "stashes": {} }));
}

#[test]
fn test_json_listing() {
    let env = TestEnv::new();
    env.stash("A");
    env.stash("B");
    assert!(env.run(&["mark", "stash@{1}"]).status.success());

    let output = env.run(&["list", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let entries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "stash@{0}");
    assert_eq!(entries[0]["isFavorite"], false);
    assert_eq!(entries[1]["id"], "stash@{1}");
    assert_eq!(entries[1]["index"], 1);
    assert_eq!(entries[1]["isFavorite"], true);

    let output = env.run(&["favorites", "--json"]);
    let favorites: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(favorites.as_array().unwrap().len(), 1);
}

#[test]
fn test_json_mutation_report() {
    let env = TestEnv::new();

    let output = env.run(&["unmark", "stash@{0}", "--json"]);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        report,
        serde_json::json!({ "success": false, "message": "stash@{0} is not marked as favorite" })
    );
}

#[test]
fn test_outside_repository() {
    let env = TestEnv::new();
    let elsewhere = tempfile::TempDir::new().unwrap();

    // Listing reports the backend error but does not fail the process
    let list = env.run_in(elsewhere.path(), &["list"]);
    assert!(list.status.success());
    assert_output_contains(&list, "Error getting stashes", "list outside repo");

    let favorites = env.run_in(elsewhere.path(), &["favorites"]);
    assert!(!stdout(&favorites).contains("No favorite stashes found."));

    // Marking needs no repository
    let mark = env.run_in(elsewhere.path(), &["mark", "stash@{0}"]);
    assert!(mark.status.success());
    assert_eq!(
        env.read_favorites(),
        serde_json::json!({ "stashes": { "stash@{0}": true } })
    );
}

#[test]
fn test_toggle_round_trip() {
    let env = TestEnv::new();

    let first = env.run(&["toggle", "stash@{2}"]);
    assert_output_contains(&first, "Marked stash@{2} as favorite", "toggle on");

    let second = env.run(&["toggle", "stash@{2}"]);
    assert_output_contains(&second, "Removed stash@{2} from favorites", "toggle off");
    assert_eq!(env.read_favorites(), serde_json::json!({ "stashes": {} }));
}
