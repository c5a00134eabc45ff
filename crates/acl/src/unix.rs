//! Conversion between ACLs and traditional `rwxrwxrwx` mode bits.

use crate::{Acl, Entry, Slot};

impl Acl {
    /// Builds the minimal ACL equivalent to the permission bits of `mode`.
    ///
    /// Only the low nine bits are consulted; file type, setuid, setgid and
    /// sticky bits are ignored.
    #[must_use]
    pub fn from_unix(mode: u32) -> Self {
        Self::from([
            Entry::user_obj(mode >> 6),
            Entry::group_obj(mode >> 3),
            Entry::other(mode),
        ])
    }

    /// Packs the permissions of the first three entries into mode bits.
    ///
    /// The projection is positional: it assumes the canonical owner, owning
    /// group, other ordering produced by [`from_unix`](Self::from_unix) and by
    /// storage backends, and reads fewer groups when the ACL is shorter. Use
    /// [`to_unix_by_tag`](Self::to_unix_by_tag) for ACLs whose order is not
    /// known.
    #[must_use]
    pub fn to_unix(&self) -> u32 {
        self.iter()
            .take(3)
            .fold(0, |mode, entry| (mode << 3) | u32::from(entry.perms()))
    }

    /// Packs the owner, owning group and other permissions looked up by tag.
    ///
    /// Returns `None` when any of the three entries is missing.
    #[must_use]
    pub fn to_unix_by_tag(&self) -> Option<u32> {
        let bits = |slot: &Slot| self.find(slot).map(|entry| u32::from(entry.perms()));
        Some((bits(&Slot::UserObj)? << 6) | (bits(&Slot::GroupObj)? << 3) | bits(&Slot::Other)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unix_splits_groups() {
        let acl = Acl::from_unix(0o754);
        assert_eq!(
            acl,
            Acl::from([Entry::user_obj(7), Entry::group_obj(5), Entry::other(4)])
        );
    }

    #[test]
    fn from_unix_ignores_type_and_special_bits() {
        assert_eq!(Acl::from_unix(0o104_640), Acl::from_unix(0o640));
        assert_eq!(Acl::from_unix(0o7640).to_unix(), 0o640);
    }

    #[test]
    fn to_unix_is_positional() {
        let acl = Acl::from([Entry::other(1), Entry::user_obj(7), Entry::group_obj(5)]);
        assert_eq!(acl.to_unix(), 0o175);
        assert_eq!(acl.to_unix_by_tag(), Some(0o751));
    }

    #[test]
    fn to_unix_handles_short_lists() {
        assert_eq!(Acl::new().to_unix(), 0);
        assert_eq!(Acl::from([Entry::user_obj(6)]).to_unix(), 0o6);
        assert_eq!(Acl::from([Entry::user_obj(6)]).to_unix_by_tag(), None);
    }
}
