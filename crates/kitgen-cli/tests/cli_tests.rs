//! Integration tests for the `kitgen` binary.
//!
//! Answers are piped through stdin, one per line. Every run gets its own
//! templates root, config home and working directory, and real package
//! managers and git are switched off unless a test says otherwise.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    templates: TempDir,
    home: TempDir,
    work: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let templates = TempDir::new().unwrap();
        for kind in ["basic-crud", "dashboard", "plugin"] {
            let dir = templates.path().join(kind);
            fs::create_dir_all(dir.join("src")).unwrap();
            fs::write(
                dir.join("package.json"),
                format!(
                    "{{\n  \"name\": \"template\",\n  \"version\": \"0.1.0\",\n  \"description\": \"\",\n  \"private\": true,\n  \"x-kind\": \"{kind}\"\n}}\n"
                ),
            )
            .unwrap();
            fs::write(
                dir.join("README.md"),
                "# {{PROJECT_NAME}}\n\n{{PROJECT_DESCRIPTION}}\n",
            )
            .unwrap();
            fs::write(dir.join("src/index.ts"), "export {};\n").unwrap();
        }

        Self {
            templates,
            home: TempDir::new().unwrap(),
            work: TempDir::new().unwrap(),
        }
    }

    fn project(&self, name: &str) -> std::path::PathBuf {
        self.work.path().join(name)
    }

    /// `kitgen` with isolated config and no external programs.
    fn kitgen(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("kitgen");
        cmd.current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("KITGEN_TEMPLATES__ROOT", self.templates.path())
            .env("KITGEN_INSTALL__ENABLED", "false")
            .env("KITGEN_GIT__ENABLED", "false")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    Sandbox::new()
        .kitgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kitgen"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    Sandbox::new()
        .kitgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_usage_error() {
    Sandbox::new()
        .kitgen()
        .arg("--lang")
        .assert()
        .code(2);
}

// ── scaffolding ───────────────────────────────────────────────────────────────

#[test]
fn helper_app_end_to_end() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .write_stdin("helper-app\nTest\n1\n1\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project name"))
        .stdout(predicate::str::contains("Project 'helper-app' created"))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("cd helper-app"))
        .stdout(predicate::str::contains("npm run dev"));

    let project = sandbox.project("helper-app");
    let manifest = read_json(&project.join("package.json"));
    assert_eq!(manifest["name"], "helper-app");
    assert_eq!(manifest["description"], "Test");
    assert_eq!(manifest["x-kind"], "basic-crud");

    assert_eq!(
        fs::read_to_string(project.join("README.md")).unwrap(),
        "# helper-app\n\nTest\n"
    );
    assert_eq!(
        fs::read_to_string(project.join("src/index.ts")).unwrap(),
        "export {};\n"
    );
}

#[test]
fn new_subcommand_is_the_same_flow() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .arg("new")
        .write_stdin("board\n\n2\n3\nn\n")
        .assert()
        .success();

    let manifest = read_json(&sandbox.project("board").join("package.json"));
    assert_eq!(manifest["x-kind"], "dashboard");
    assert_eq!(manifest["description"], "");
}

#[test]
fn second_run_with_same_name_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .write_stdin("helper-app\nFirst\n1\n1\ny\n")
        .assert()
        .success();
    let first = fs::read_to_string(sandbox.project("helper-app/package.json")).unwrap();

    sandbox
        .kitgen()
        .write_stdin("helper-app\nSecond\n2\n2\nn\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(sandbox.project("helper-app/package.json")).unwrap(),
        first
    );
}

#[test]
fn end_of_input_takes_every_default() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'my-app' created"));

    let manifest = read_json(&sandbox.project("my-app").join("package.json"));
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["x-kind"], "basic-crud");
}

#[test]
fn unusable_choices_fall_back_to_defaults() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .write_stdin("odd\n\n9\nabc\nmaybe\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("database: supabase, auth: on"));

    let manifest = read_json(&sandbox.project("odd").join("package.json"));
    assert_eq!(manifest["x-kind"], "basic-crud");
}

#[test]
fn name_with_path_separator_is_rejected() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .write_stdin("../escape\n\n1\n1\ny\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!sandbox.work.path().parent().unwrap().join("escape").exists());
}

#[test]
fn custom_template_is_a_warning_not_an_error() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .write_stdin("blank\n\n4\n3\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished with warnings"))
        .stdout(predicate::str::contains("custom"));

    let project = sandbox.project("blank");
    assert!(project.is_dir());
    assert_eq!(fs::read_dir(project).unwrap().count(), 0);
}

#[test]
fn missing_package_managers_only_warn() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .env("KITGEN_INSTALL__ENABLED", "true")
        .env("KITGEN_INSTALL__PRIMARY", "kitgen-test-no-such-pm")
        .env("KITGEN_INSTALL__FALLBACK", "kitgen-test-no-such-pm-either")
        .write_stdin("offline\n\n1\n1\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished with warnings"))
        .stdout(predicate::str::contains("kitgen-test-no-such-pm install"));

    assert!(sandbox.project("offline/package.json").exists());
}

#[test]
fn quiet_run_prints_nothing_on_stdout_but_prompts() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .arg("-q")
        .write_stdin("hush\n\n1\n1\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("created").not());

    assert!(sandbox.project("hush").is_dir());
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn config_init_then_refuses_overwrite() {
    let sandbox = Sandbox::new();
    let path = sandbox.home.path().join("kit/config.toml");

    sandbox
        .kitgen()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[git]"));

    sandbox
        .kitgen()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    sandbox
        .kitgen()
        .args(["config", "init", "--force", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn config_path_prints_explicit_file() {
    let sandbox = Sandbox::new();
    let path = sandbox.home.path().join("elsewhere.toml");

    sandbox
        .kitgen()
        .args(["config", "path", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere.toml"));
}

#[test]
fn config_list_shows_environment_overrides() {
    Sandbox::new()
        .kitgen()
        .env("KITGEN_INSTALL__PRIMARY", "pnpm")
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("primary = \"pnpm\""))
        .stdout(predicate::str::contains("enabled = false"));
}

#[test]
fn config_file_drives_the_run() {
    let sandbox = Sandbox::new();
    let path = sandbox.home.path().join("kitgen.toml");
    fs::write(
        &path,
        format!(
            "[templates]\nroot = {:?}\n\n[install]\nenabled = false\n\n[git]\nenabled = false\n",
            sandbox.templates.path()
        ),
    )
    .unwrap();

    sandbox
        .kitgen()
        .env_remove("KITGEN_TEMPLATES__ROOT")
        .arg("--config")
        .arg(&path)
        .write_stdin("ext\n\n3\n3\nn\n")
        .assert()
        .success();

    let manifest = read_json(&sandbox.project("ext").join("package.json"));
    assert_eq!(manifest["x-kind"], "plugin");
}

#[test]
fn broken_config_file_exits_with_configuration_code() {
    let sandbox = Sandbox::new();
    let path = sandbox.home.path().join("broken.toml");
    fs::write(&path, "[install\nprimary =").unwrap();

    sandbox
        .kitgen()
        .arg("--config")
        .arg(&path)
        .write_stdin("")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn missing_explicit_config_file_is_configuration_error() {
    let sandbox = Sandbox::new();

    sandbox
        .kitgen()
        .args(["--config", "does-not-exist.toml"])
        .write_stdin("")
        .assert()
        .code(4);
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_for_bash() {
    Sandbox::new()
        .kitgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_kitgen"));
}
