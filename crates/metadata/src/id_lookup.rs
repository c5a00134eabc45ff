//! User and group name lookup through the system databases.

use acl::{NameResolver, Tag};
use nix::unistd::{Gid, Group, Uid, User};

/// Resolves numeric qualifiers to user and group names via NSS.
///
/// Qualifiers that are not numeric, ids without a database entry and lookup
/// failures all fall back to the qualifier itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

/// Looks up the user name for `uid`.
pub fn lookup_user_name(uid: u32) -> Option<String> {
    User::from_uid(Uid::from_raw(uid))
        .ok()
        .flatten()
        .map(|user| user.name)
}

/// Looks up the group name for `gid`.
pub fn lookup_group_name(gid: u32) -> Option<String> {
    Group::from_gid(Gid::from_raw(gid))
        .ok()
        .flatten()
        .map(|group| group.name)
}

impl NameResolver for SystemResolver {
    fn resolve_name(&self, qualifier: &str, tag: Tag) -> String {
        let Ok(id) = qualifier.parse::<u32>() else {
            return qualifier.to_owned();
        };
        let name = match tag {
            Tag::User => lookup_user_name(id),
            Tag::Group => lookup_group_name(id),
            _ => None,
        };
        name.unwrap_or_else(|| qualifier.to_owned())
    }
}
