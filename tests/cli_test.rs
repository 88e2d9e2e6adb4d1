//! End-to-end tests driving the vaultscope binary against temporary vaults.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Build a small vault with a mix of visible, ignored, and hidden entries.
fn setup_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Projects")).unwrap();
    fs::write(dir.path().join("inbox.md"), "capture everything\n").unwrap();
    fs::write(
        dir.path().join("Projects/plan.md"),
        "alpha\nproject plan\nomega\n",
    )
    .unwrap();
    fs::write(dir.path().join("scratch.tmp"), "ignored scratch\n").unwrap();
    fs::create_dir(dir.path().join(".obsidian")).unwrap();
    fs::write(dir.path().join(".obsidian/app.json"), "{\"plan\": true}\n").unwrap();
    dir
}

/// Run the vaultscope CLI and return (stdout, stderr, exit code).
fn run_vaultscope(vault: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_vaultscope");

    let output = Command::new(binary)
        .arg("--vault")
        .arg(vault)
        .args(args)
        .output()
        .expect("Failed to execute vaultscope");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

mod list_command {
    use super::*;

    #[test]
    fn list_root_filters_and_sorts() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["list"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 2"));
        // Directory before file
        let dir_pos = stdout.find("Projects").unwrap();
        let file_pos = stdout.find("inbox.md").unwrap();
        assert!(dir_pos < file_pos);
        // Ignored and hidden entries never appear
        assert!(!stdout.contains("scratch.tmp"));
        assert!(!stdout.contains(".obsidian"));
    }

    #[test]
    fn list_subdirectory() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["list", "Projects"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("plan.md"));
        assert!(stdout.contains("\"total\": 1"));
    }

    #[test]
    fn list_unreadable_directory_is_empty_not_fatal() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["list", "no-such-dir"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 0"));
    }

    #[test]
    fn unconfigured_vault_exits_with_code_2() {
        let (_, stderr, code) = run_vaultscope(Path::new(""), &["list"]);
        assert_eq!(code, 2);
        assert!(stderr.contains("not configured"));
    }

    #[test]
    fn missing_vault_exits_with_code_3() {
        let (_, stderr, code) = run_vaultscope(Path::new("/nonexistent/vault"), &["list"]);
        assert_eq!(code, 3);
        assert!(stderr.contains("not found"));
    }
}

mod search_command {
    use super::*;

    #[test]
    fn search_finds_match_with_context() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["--quiet", "search", "project"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("plan.md"));
        assert!(stdout.contains("\"line\": 2"));
        assert!(stdout.contains("alpha\\nproject plan\\nomega"));
    }

    #[test]
    fn search_is_case_insensitive() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["--quiet", "search", "PROJECT"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 1"));
    }

    #[test]
    fn search_skips_ignored_subtrees() {
        let vault = setup_vault();
        // "plan" appears in .obsidian/app.json too, but that subtree is
        // ignored; only the two visible files match.
        let (stdout, _, code) = run_vaultscope(vault.path(), &["--quiet", "search", "plan"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("plan.md"));
        assert!(!stdout.contains("app.json"));
    }

    #[test]
    fn search_no_results() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["--quiet", "search", "zzznothing"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 0"));
    }

    #[test]
    fn search_reports_progress_on_stderr() {
        let vault = setup_vault();
        let (_, stderr, code) = run_vaultscope(vault.path(), &["search", "project"]);
        assert_eq!(code, 0);
        assert!(stderr.contains("Searching... (1/2)"));
        assert!(stderr.contains("Searching... (2/2)"));
    }

    #[test]
    fn search_limit_truncates_output_but_not_total() {
        let vault = setup_vault();
        fs::write(vault.path().join("extra.md"), "project one\nproject two\n").unwrap();

        let (stdout, _, code) =
            run_vaultscope(vault.path(), &["--quiet", "search", "project", "--limit", "1"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 3"));
        assert_eq!(stdout.matches("\"line\":").count(), 1);
    }

    #[test]
    fn invalid_pattern_exits_with_code_5() {
        let vault = setup_vault();
        let (_, stderr, code) = run_vaultscope(vault.path(), &["search", "[unclosed"]);
        assert_eq!(code, 5);
        assert!(stderr.contains("Invalid search pattern"));
    }
}

mod mutation_commands {
    use super::*;

    #[test]
    fn create_appends_md_and_lists() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["create", "ideas"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("ideas.md"));
        assert!(vault.path().join("ideas.md").is_file());

        let (stdout, _, _) = run_vaultscope(vault.path(), &["list"]);
        assert!(stdout.contains("ideas.md"));
    }

    #[test]
    fn create_keeps_explicit_extension() {
        let vault = setup_vault();
        let (_, _, code) = run_vaultscope(vault.path(), &["create", "data.csv"]);
        assert_eq!(code, 0);
        assert!(vault.path().join("data.csv").is_file());
    }

    #[test]
    fn create_in_subdirectory() {
        let vault = setup_vault();
        let (_, _, code) = run_vaultscope(vault.path(), &["create", "status", "--dir", "Projects"]);
        assert_eq!(code, 0);
        assert!(vault.path().join("Projects/status.md").is_file());
    }

    #[test]
    fn create_existing_exits_with_code_4() {
        let vault = setup_vault();
        let (_, stderr, code) = run_vaultscope(vault.path(), &["create", "inbox"]);
        assert_eq!(code, 4);
        assert!(stderr.contains("Already exists"));
    }

    #[test]
    fn mkdir_creates_folder() {
        let vault = setup_vault();
        let (_, _, code) = run_vaultscope(vault.path(), &["mkdir", "Archive"]);
        assert_eq!(code, 0);
        assert!(vault.path().join("Archive").is_dir());
    }

    #[test]
    fn delete_permanent_then_list_excludes_item() {
        let vault = setup_vault();
        let (_, _, code) = run_vaultscope(vault.path(), &["delete", "inbox.md", "--permanent"]);
        assert_eq!(code, 0);
        assert!(!vault.path().join("inbox.md").exists());

        let (stdout, _, _) = run_vaultscope(vault.path(), &["list"]);
        assert!(!stdout.contains("inbox.md"));
    }

    #[test]
    fn delete_folder_recursively() {
        let vault = setup_vault();
        let (_, _, code) = run_vaultscope(vault.path(), &["delete", "Projects", "--permanent"]);
        assert_eq!(code, 0);
        assert!(!vault.path().join("Projects").exists());
    }

    #[test]
    fn rename_reflects_in_listing() {
        let vault = setup_vault();
        let (_, _, code) = run_vaultscope(vault.path(), &["rename", "inbox.md", "outbox.md"]);
        assert_eq!(code, 0);

        let (stdout, _, _) = run_vaultscope(vault.path(), &["list"]);
        assert!(stdout.contains("outbox.md"));
        assert!(!stdout.contains("inbox.md"));
    }

    #[test]
    fn rename_collision_exits_with_code_4() {
        let vault = setup_vault();
        fs::write(vault.path().join("other.md"), "other\n").unwrap();

        let (_, stderr, code) = run_vaultscope(vault.path(), &["rename", "inbox.md", "other.md"]);
        assert_eq!(code, 4);
        assert!(stderr.contains("Already exists"));
        assert!(vault.path().join("inbox.md").exists());
    }
}

mod config_command {
    use super::*;

    #[test]
    fn config_shows_effective_settings() {
        let vault = setup_vault();
        let (stdout, _, code) = run_vaultscope(vault.path(), &["config"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("root_path"));
        assert!(stdout.contains(".obsidian/**"));
    }

    #[test]
    fn config_file_settings_are_honored() {
        let vault = setup_vault();
        let config_dir = TempDir::new().unwrap();
        let config_path = config_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "show_hidden_files = true\nignore_patterns = [\"*.tmp\"]\n",
        )
        .unwrap();

        let binary = env!("CARGO_BIN_EXE_vaultscope");
        let output = Command::new(binary)
            .arg("--vault")
            .arg(vault.path())
            .arg("--config")
            .arg(&config_path)
            .args(["list"])
            .output()
            .expect("Failed to execute vaultscope");

        let stdout = String::from_utf8_lossy(&output.stdout);
        // Hidden entries are visible now, while the configured ignore
        // pattern still hides the scratch file.
        assert!(stdout.contains(".obsidian"));
        assert!(!stdout.contains("scratch.tmp"));
    }
}
