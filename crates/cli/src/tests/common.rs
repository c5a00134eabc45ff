use metadata::MemoryStore;

pub(super) const SHARED: &str = "/srv/shared";
pub(super) const PRIVATE: &str = "/srv/private";

pub(super) struct Outcome {
    pub(super) status: i32,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

pub(super) fn store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(SHARED, 0o750);
    store.insert(PRIVATE, 0o600);
    store
}

pub(super) fn run_cli<const N: usize>(store: &MemoryStore, args: [&str; N]) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = crate::run_with_store(
        std::iter::once("oc-facl").chain(args),
        store,
        &mut stdout,
        &mut stderr,
    );
    Outcome {
        status,
        stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
        stderr: String::from_utf8(stderr).expect("stderr is UTF-8"),
    }
}

pub(super) fn short_acl(store: &MemoryStore, path: &str) -> String {
    let outcome = run_cli(store, ["get", "--short", "--numeric", "--omit-header", path]);
    assert_eq!(outcome.status, 0, "{}", outcome.stderr);
    outcome.stdout.trim_end().to_owned()
}
