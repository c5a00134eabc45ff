//! Identity lookup for platforms without Unix user and group databases.
//!
//! Every lookup returns `None` and qualifiers print as stored.

use acl::{NameResolver, Tag};

/// Resolver that falls back to numeric ids on this platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

/// Looks up the user name for a given UID.
///
/// Always `None` on this platform.
pub fn lookup_user_name(_uid: u32) -> Option<String> {
    None
}

/// Looks up the group name for a given GID.
///
/// Always `None` on this platform.
pub fn lookup_group_name(_gid: u32) -> Option<String> {
    None
}

impl NameResolver for SystemResolver {
    fn resolve_name(&self, qualifier: &str, _tag: Tag) -> String {
        qualifier.to_owned()
    }
}
