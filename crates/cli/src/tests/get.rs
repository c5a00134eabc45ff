use super::common::*;

#[test]
fn get_prints_header_and_long_form() {
    let outcome = run_cli(&store(), ["get", "--numeric", SHARED]);
    assert_eq!(outcome.status, 0);
    assert_eq!(
        outcome.stdout,
        "# file: /srv/shared\nuser::rwx\ngroup::r-x\nother::---\n"
    );
    assert!(outcome.stderr.is_empty());
}

#[test]
fn get_separates_paths_with_blank_line() {
    let outcome = run_cli(&store(), ["get", "-s", "-n", SHARED, PRIVATE]);
    assert_eq!(outcome.status, 0);
    assert_eq!(
        outcome.stdout,
        "# file: /srv/shared\nu::rwx,g::r-x,o::---\n\n# file: /srv/private\nu::rw-,g::---,o::---\n"
    );
}

#[test]
fn get_annotates_entries_limited_by_mask() {
    let store = store();
    assert_eq!(run_cli(&store, ["add", SHARED, "u:1000:rwx,m::r--"]).status, 0);

    let outcome = run_cli(&store, ["get", "--numeric", "--omit-header", SHARED]);
    assert_eq!(
        outcome.stdout,
        "user:1000:rwx       #effective:r--\n\
         mask::r--\n\
         user::rwx\n\
         group::r-x          #effective:r--\n\
         other::---\n"
    );
}

#[test]
fn get_continues_after_failing_path() {
    let outcome = run_cli(&store(), ["get", "-n", "/missing", SHARED]);
    assert_eq!(outcome.status, crate::EXIT_STORAGE);
    assert!(outcome.stderr.starts_with("oc-facl: failed to read ACL '/missing'"));
    assert_eq!(
        outcome.stdout,
        "# file: /srv/shared\nuser::rwx\ngroup::r-x\nother::---\n"
    );
}

#[test]
fn get_default_without_default_acl_prints_header_only() {
    let outcome = run_cli(&store(), ["get", "--default", SHARED]);
    assert_eq!(outcome.status, 0);
    assert_eq!(outcome.stdout, "# file: /srv/shared\n");
}

#[test]
fn get_resolves_names_unless_numeric() {
    let store = store();
    assert_eq!(run_cli(&store, ["add", SHARED, "u:0:r--"]).status, 0);

    let numeric = run_cli(&store, ["get", "-s", "-n", "--omit-header", SHARED]);
    assert_eq!(numeric.stdout, "u:0:r--,m::r-x,u::rwx,g::r-x,o::---\n");
    #[cfg(unix)]
    {
        let named = run_cli(&store, ["get", "-s", "--omit-header", SHARED]);
        assert_eq!(named.stdout, "u:root:r--,m::r-x,u::rwx,g::r-x,o::---\n");
    }
}

#[test]
fn get_passes_unresolvable_qualifiers_through() {
    let store = store();
    assert_eq!(run_cli(&store, ["add", SHARED, "g:no-such-group:r--"]).status, 0);

    let named = run_cli(&store, ["get", "-s", "--omit-header", SHARED]);
    assert_eq!(named.status, 0);
    assert_eq!(named.stdout, "g:no-such-group:r--,m::r-x,u::rwx,g::r-x,o::---\n");
}
