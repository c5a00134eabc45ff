use assert_cmd::Command;

fn oc_facl() -> Command {
    let mut command = Command::cargo_bin("oc-facl").expect("oc-facl binary is built");
    command.env_remove("OC_FACL_LOG").env_remove("OC_FACL_NUMERIC");
    command
}

#[test]
fn help_lists_subcommands() {
    let output = oc_facl().arg("--help").output().expect("run oc-facl");
    assert!(output.status.success(), "--help should succeed");
    assert!(output.stderr.is_empty(), "help output should not write to stderr");
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    for subcommand in ["get", "set", "add", "remove", "check", "from-mode", "to-mode"] {
        assert!(stdout.contains(subcommand), "help should list {subcommand}");
    }
}

#[test]
fn without_subcommand_shows_usage() {
    let output = oc_facl().output().expect("run oc-facl");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("Usage:"));
}

#[test]
fn from_mode_prints_long_form() {
    oc_facl()
        .args(["from-mode", "0751"])
        .assert()
        .success()
        .stdout("user::rwx\ngroup::r-x\nother::--x\n")
        .stderr("");
}

#[test]
fn from_mode_output_parses_back() {
    let output = oc_facl()
        .args(["from-mode", "--short", "0604"])
        .output()
        .expect("run oc-facl");
    let text = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let acl: acl::Acl = text.trim_end().parse().expect("short form parses");
    assert!(acl.is_valid());
    assert_eq!(acl.to_unix(), 0o604);
}

#[test]
fn to_mode_prints_octal() {
    oc_facl()
        .args(["to-mode", "u:1000:rw-,m::rwx,u::rwx,g::r-x,o::---"])
        .assert()
        .success()
        .stdout("0750\n");
}

#[test]
fn check_reports_violation_with_exit_one() {
    oc_facl()
        .args(["check", "u::rwx,g::r-x"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("oc-facl: invalid ACL: missing other entry\n");
}

#[test]
fn verbose_logging_keeps_stdout_clean() {
    let output = oc_facl()
        .args(["-vvv", "check", "u::rwx,g::r-x,o::---"])
        .output()
        .expect("run oc-facl");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
