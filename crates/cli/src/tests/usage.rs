use super::common::*;

#[test]
fn missing_subcommand_is_usage_error() {
    let outcome = run_cli(&store(), []);
    assert_eq!(outcome.status, crate::EXIT_USAGE);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains("Usage"));
}

#[test]
fn help_goes_to_stdout() {
    let outcome = run_cli(&store(), ["--help"]);
    assert_eq!(outcome.status, 0);
    assert!(outcome.stdout.contains("from-mode"));
    assert!(outcome.stderr.is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let outcome = run_cli(&store(), ["--version"]);
    assert_eq!(outcome.status, 0);
    assert!(outcome.stdout.starts_with("oc-facl "));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let outcome = run_cli(&store(), ["frobnicate"]);
    assert_eq!(outcome.status, crate::EXIT_USAGE);
    assert!(outcome.stderr.contains("frobnicate"));
}

#[test]
fn exit_code_from_clamps() {
    use std::process::ExitCode;

    let debug = |code: ExitCode| format!("{code:?}");
    assert_eq!(debug(crate::exit_code_from(-3)), debug(ExitCode::from(0)));
    assert_eq!(debug(crate::exit_code_from(2)), debug(ExitCode::from(2)));
    assert_eq!(debug(crate::exit_code_from(999)), debug(ExitCode::from(255)));
}
