use super::common::*;

#[test]
fn add_merges_entries_and_computes_mask() {
    let store = store();
    let outcome = run_cli(&store, ["add", SHARED, "u:1000:rw-"]);
    assert_eq!(outcome.status, 0);
    assert!(outcome.stdout.is_empty());
    assert_eq!(
        short_acl(&store, SHARED),
        "u:1000:rw-,m::rwx,u::rwx,g::r-x,o::---"
    );
}

#[test]
fn add_replaces_existing_slot_in_place() {
    let store = store();
    run_cli(&store, ["add", SHARED, "u:1000:rw-"]);
    run_cli(&store, ["add", SHARED, "u:1000:r--,g::---"]);
    assert_eq!(
        short_acl(&store, SHARED),
        "u:1000:r--,m::r--,u::rwx,g::---,o::---"
    );
}

#[test]
fn add_rejects_unparsable_entries() {
    let store = store();
    let outcome = run_cli(&store, ["add", SHARED, "u:1000:rwz"]);
    assert_eq!(outcome.status, crate::EXIT_USAGE);
    assert!(outcome.stderr.starts_with("oc-facl: invalid ACL entry 'u:1000:rwz'"));
    assert_eq!(short_acl(&store, SHARED), "u::rwx,g::r-x,o::---");
}

#[test]
fn add_to_default_acl_leaves_access_acl() {
    let store = store();
    assert_eq!(
        run_cli(&store, ["set", "--default", SHARED, "u::rwx,g::r-x,o::---"]).status,
        0
    );
    assert_eq!(run_cli(&store, ["add", "-d", SHARED, "g:100:rwx"]).status, 0);

    let outcome = run_cli(&store, ["get", "-d", "-s", "-n", "--omit-header", SHARED]);
    assert_eq!(outcome.stdout, "g:100:rwx,m::rwx,u::rwx,g::r-x,o::---\n");
    assert_eq!(short_acl(&store, SHARED), "u::rwx,g::r-x,o::---");
}

#[test]
fn remove_drops_slots_and_recomputes_mask() {
    let store = store();
    run_cli(&store, ["add", SHARED, "u:1000:rwx,g:100:r--"]);
    let outcome = run_cli(&store, ["remove", SHARED, "u:1000"]);
    assert_eq!(outcome.status, 0);
    assert_eq!(
        short_acl(&store, SHARED),
        "g:100:r--,m::r-x,u::rwx,g::r-x,o::---"
    );
}

#[test]
fn remove_of_required_mask_is_a_storage_failure() {
    let store = store();
    run_cli(&store, ["add", SHARED, "u:1000:rwx"]);
    let outcome = run_cli(&store, ["remove", SHARED, "m"]);
    assert_eq!(outcome.status, crate::EXIT_STORAGE);
    assert!(outcome.stderr.starts_with("oc-facl: failed to write ACL '/srv/shared'"));
    assert!(short_acl(&store, SHARED).contains("m::rwx"));
}

#[test]
fn set_replaces_acl() {
    let store = store();
    let outcome = run_cli(&store, ["set", PRIVATE, "user::rw-\ngroup::r--\nother::r--"]);
    assert_eq!(outcome.status, 0);
    assert_eq!(short_acl(&store, PRIVATE), "u::rw-,g::r--,o::r--");
}

#[test]
fn set_refuses_invalid_acl_before_writing() {
    let store = store();
    let outcome = run_cli(&store, ["set", PRIVATE, "u::rw-,g::r--,o::r--,u:7:rwx"]);
    assert_eq!(outcome.status, crate::EXIT_USAGE);
    assert_eq!(
        outcome.stderr,
        "oc-facl: invalid ACL: missing mask entry required by named user or group entries\n"
    );
    assert_eq!(short_acl(&store, PRIVATE), "u::rw-,g::---,o::---");
}

#[test]
fn set_empty_default_removes_it() {
    let store = store();
    run_cli(&store, ["set", "-d", SHARED, "u::rwx,g::r-x,o::---"]);
    assert_eq!(run_cli(&store, ["set", "-d", SHARED, ""]).status, 0);
    let outcome = run_cli(&store, ["get", "-d", "--omit-header", SHARED]);
    assert_eq!(outcome.stdout, "");
}

#[test]
fn unknown_path_is_a_storage_failure() {
    let outcome = run_cli(&store(), ["add", "/nowhere", "u:1:r--"]);
    assert_eq!(outcome.status, crate::EXIT_STORAGE);
    assert!(outcome.stderr.contains("failed to read ACL '/nowhere'"));
}
