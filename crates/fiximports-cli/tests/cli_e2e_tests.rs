//! CLI end-to-end tests that invoke the compiled `fiximports` binary.
//!
//! The Go toolchain is replaced by shell scripts written into the test
//! module, so these tests only run on Unix.
#![cfg(unix)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use fiximports_test_utils::TestModule;
use predicates::prelude::*;

const DISJOINT: &str = "package main\n\nimport (\n\t\"fmt\"\n\n\t\"os\"\n)\n\nfunc main() {\n\tfmt.Println(os.Args)\n}\n";
const COMPACTED: &str = "package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n\nfunc main() {\n\tfmt.Println(os.Args)\n}\n";

/// A module with stand-in `go` and `goimports` scripts.
struct Fixture {
    module: TestModule,
    go: PathBuf,
    goimports: PathBuf,
}

impl Fixture {
    /// `goimports_body` is the formatter script body; it receives the
    /// source on stdin.
    fn new(goimports_body: &str) -> Self {
        let module = TestModule::new("example.com/app");
        let go = module.write_script("bin/go", "echo example.com/app");
        let goimports = module.write_script("bin/goimports", goimports_body);
        Self {
            module,
            go,
            goimports,
        }
    }

    fn cmd(&self) -> Command {
        self.cmd_with_go(&self.go)
    }

    fn cmd_with_go(&self, go: &Path) -> Command {
        let mut cmd = Command::cargo_bin("fiximports").unwrap();
        cmd.env_remove("RUST_LOG")
            .env_remove("FIXIMPORTS_LOCAL")
            .arg("--go")
            .arg(go)
            .arg("--goimports")
            .arg(&self.goimports);
        cmd
    }
}

#[test]
fn test_help_mentions_verbose() {
    Command::cargo_bin("fiximports")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_no_files_exits_with_error() {
    let fixture = Fixture::new("cat");

    fixture
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Error: no files specified"));
}

#[test]
fn test_missing_file_exits_with_error() {
    let fixture = Fixture::new("cat");

    fixture
        .cmd()
        .arg(fixture.module.path("missing.go"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: file not found"))
        .stdout(predicate::str::contains("missing.go"));
}

#[test]
fn test_rewrites_changed_file_with_local_prefix() {
    let fixture = Fixture::new(
        "printf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"; cat; echo '// formatted'",
    );
    let main = fixture.module.write_file("main.go", DISJOINT);

    fixture.cmd().arg(&main).assert().success().stdout("");

    fixture
        .module
        .assert_file_content("main.go", &format!("{}// formatted\n", COMPACTED));
    let args = fixture.module.read_file("bin/args.txt");
    assert!(args.contains("-local\nexample.com/app\n"), "{}", args);
}

#[test]
fn test_unchanged_output_is_not_written() {
    let fixture = Fixture::new("cat");
    let main = fixture.module.write_file("main.go", DISJOINT);

    fixture.cmd().arg(&main).assert().success();

    // Formatter output equals the compacted source, so the file stays as is
    fixture.module.assert_file_content("main.go", DISJOINT);
}

#[test]
fn test_generated_file_is_left_alone() {
    let fixture = Fixture::new("cat; echo '// formatted'");
    let source = "// Code generated by protoc-gen-go. DO NOT EDIT.\n\npackage pb\n\nimport (\n\t\"os\"\n\n\t\"fmt\"\n)\n";
    let generated = fixture.module.write_file("pb/api.pb.go", source);

    fixture
        .cmd()
        .arg("--verbose")
        .arg(&generated)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping generated file"));

    fixture.module.assert_file_content("pb/api.pb.go", source);
}

#[test]
fn test_verbose_reports_progress() {
    let fixture = Fixture::new("cat; echo '// formatted'");
    let main = fixture.module.write_file("main.go", DISJOINT);

    fixture
        .cmd()
        .arg("-v")
        .arg(&main)
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected module"))
        .stdout(predicate::str::contains("example.com/app"))
        .stdout(predicate::str::contains("Checking imports"))
        .stdout(predicate::str::contains("Fixed imports"));
}

#[test]
fn test_formatter_failure_exits_with_error() {
    let fixture = Fixture::new("cat > /dev/null; echo 'main.go:3:6: expected IDENT' >&2; exit 2");
    let main = fixture.module.write_file("main.go", "package main\n\nfunc {\n");

    fixture
        .cmd()
        .arg(&main)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: failed formatting"))
        .stdout(predicate::str::contains("expected IDENT"));
}

#[test]
fn test_discovery_failure_exits_with_error() {
    let fixture = Fixture::new("cat");
    let go = fixture
        .module
        .write_script("bin/broken-go", "echo 'go: not in a module' >&2; exit 1");
    let main = fixture.module.write_file("main.go", DISJOINT);

    fixture
        .cmd_with_go(&go)
        .arg(&main)
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed detecting go module"))
        .stdout(predicate::str::contains("go: not in a module"));
}

#[test]
fn test_local_prefix_from_environment_skips_discovery() {
    let fixture = Fixture::new(
        "printf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"; cat",
    );
    let go = fixture.module.write_script("bin/broken-go", "exit 1");
    let main = fixture.module.write_file("main.go", DISJOINT);

    fixture
        .cmd_with_go(&go)
        .env("FIXIMPORTS_LOCAL", "example.com/override")
        .arg(&main)
        .assert()
        .success();

    let args = fixture.module.read_file("bin/args.txt");
    assert!(args.contains("-local\nexample.com/override\n"), "{}", args);
}
