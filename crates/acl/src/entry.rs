use std::fmt;

use crate::Perms;

/// Role of an ACL entry.
///
/// The discriminants match the `acl_tag_t` values used by libacl so storage
/// backends can convert without a lookup table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Tag {
    /// Placeholder tag (`ACL_UNDEFINED_TAG`); never valid in a well-formed ACL.
    Undefined = 0x00,
    /// Permissions of the file owner.
    UserObj = 0x01,
    /// Permissions of the user named by the entry's qualifier.
    User = 0x02,
    /// Permissions of the file group.
    GroupObj = 0x04,
    /// Permissions of the group named by the entry's qualifier.
    Group = 0x08,
    /// Upper bound for every `User`, `GroupObj` and `Group` entry.
    Mask = 0x10,
    /// Permissions of processes matching no other entry.
    Other = 0x20,
}

impl Tag {
    /// Converts a raw libacl tag value, mapping unknown values to [`Tag::Undefined`].
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0x01 => Self::UserObj,
            0x02 => Self::User,
            0x04 => Self::GroupObj,
            0x08 => Self::Group,
            0x10 => Self::Mask,
            0x20 => Self::Other,
            _ => Self::Undefined,
        }
    }

    /// Returns the raw libacl tag value.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Short text form tag (`u`, `g`, `o`, `m`).
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::UserObj | Self::User => "u",
            Self::GroupObj | Self::Group => "g",
            Self::Other => "o",
            Self::Mask => "m",
            Self::Undefined => "?",
        }
    }

    /// Long text form tag (`user`, `group`, `other`, `mask`).
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::UserObj | Self::User => "user",
            Self::GroupObj | Self::Group => "group",
            Self::Other => "other",
            Self::Mask => "mask",
            Self::Undefined => "????",
        }
    }

    /// Reports whether entries of this kind carry a qualifier.
    #[must_use]
    pub const fn is_named(self) -> bool {
        matches!(self, Self::User | Self::Group)
    }

    /// Reports whether the mask caps the effective permissions of this kind.
    #[must_use]
    pub const fn is_mask_limited(self) -> bool {
        matches!(self, Self::User | Self::GroupObj | Self::Group)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Uniqueness key of an entry within an ACL.
///
/// Singleton roles are keyed by tag alone; named users and groups by tag and
/// qualifier. The user and group namespaces are independent, so
/// `Slot::User("0")` and `Slot::Group("0")` are distinct.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Slot {
    /// The file owner entry.
    UserObj,
    /// A named user entry.
    User(String),
    /// The file group entry.
    GroupObj,
    /// A named group entry.
    Group(String),
    /// The mask entry.
    Mask,
    /// The other entry.
    Other,
}

impl Slot {
    /// Returns the tag occupying this slot.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::UserObj => Tag::UserObj,
            Self::User(_) => Tag::User,
            Self::GroupObj => Tag::GroupObj,
            Self::Group(_) => Tag::Group,
            Self::Mask => Tag::Mask,
            Self::Other => Tag::Other,
        }
    }

    /// Builds an entry for this slot carrying `perms`.
    #[must_use]
    pub fn with_perms(self, perms: Perms) -> Entry {
        match self {
            Self::User(qualifier) => Entry::user(qualifier, perms),
            Self::Group(qualifier) => Entry::group(qualifier, perms),
            singleton => Entry::new(singleton.tag(), String::new(), perms),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(qualifier) | Self::Group(qualifier) => {
                write!(f, "{}:{qualifier}", self.tag().short_name())
            }
            singleton => write!(f, "{}:", singleton.tag().short_name()),
        }
    }
}

/// A single ACL entry.
///
/// Only [`Tag::User`] and [`Tag::Group`] entries keep a qualifier. Every
/// other tag stores it empty, so equality and hashing ignore whatever
/// qualifier a singleton entry was built with.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    tag: Tag,
    qualifier: String,
    perms: Perms,
}

impl Entry {
    /// Creates an entry from its raw parts.
    ///
    /// The qualifier is discarded unless `tag` names a user or group.
    #[must_use]
    pub fn new(tag: Tag, qualifier: impl Into<String>, perms: impl Into<Perms>) -> Self {
        let qualifier = if tag.is_named() {
            qualifier.into()
        } else {
            String::new()
        };
        Self {
            tag,
            qualifier,
            perms: perms.into(),
        }
    }

    /// Creates the file owner entry.
    #[must_use]
    pub fn user_obj(perms: impl Into<Perms>) -> Self {
        Self::new(Tag::UserObj, String::new(), perms)
    }

    /// Creates a named user entry.
    #[must_use]
    pub fn user(qualifier: impl Into<String>, perms: impl Into<Perms>) -> Self {
        Self::new(Tag::User, qualifier, perms)
    }

    /// Creates the file group entry.
    #[must_use]
    pub fn group_obj(perms: impl Into<Perms>) -> Self {
        Self::new(Tag::GroupObj, String::new(), perms)
    }

    /// Creates a named group entry.
    #[must_use]
    pub fn group(qualifier: impl Into<String>, perms: impl Into<Perms>) -> Self {
        Self::new(Tag::Group, qualifier, perms)
    }

    /// Creates the mask entry.
    #[must_use]
    pub fn mask(perms: impl Into<Perms>) -> Self {
        Self::new(Tag::Mask, String::new(), perms)
    }

    /// Creates the other entry.
    #[must_use]
    pub fn other(perms: impl Into<Perms>) -> Self {
        Self::new(Tag::Other, String::new(), perms)
    }

    /// Returns the entry's tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the qualifier for named user and group entries.
    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.tag.is_named().then_some(self.qualifier.as_str())
    }

    /// Returns the nominal permissions.
    #[must_use]
    pub const fn perms(&self) -> Perms {
        self.perms
    }

    /// Replaces the nominal permissions.
    pub fn set_perms(&mut self, perms: impl Into<Perms>) {
        self.perms = perms.into();
    }

    /// Returns the slot this entry occupies, or `None` for an undefined tag.
    #[must_use]
    pub fn slot(&self) -> Option<Slot> {
        Some(match self.tag {
            Tag::UserObj => Slot::UserObj,
            Tag::User => Slot::User(self.qualifier.clone()),
            Tag::GroupObj => Slot::GroupObj,
            Tag::Group => Slot::Group(self.qualifier.clone()),
            Tag::Mask => Slot::Mask,
            Tag::Other => Slot::Other,
            Tag::Undefined => return None,
        })
    }

    /// Reports whether both entries occupy the same slot.
    ///
    /// Entries with an undefined tag never share a slot with anything.
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        if self.tag != other.tag || self.tag == Tag::Undefined {
            return false;
        }
        !self.tag.is_named() || self.qualifier == other.qualifier
    }

    /// Reports whether this entry occupies `slot`.
    #[must_use]
    pub fn occupies(&self, slot: &Slot) -> bool {
        match slot {
            Slot::User(qualifier) | Slot::Group(qualifier) => {
                self.tag == slot.tag() && self.qualifier == *qualifier
            }
            singleton => self.tag == singleton.tag(),
        }
    }

    /// Renders the entry in the long text form, e.g. `user:1000:r-x`.
    #[must_use]
    pub fn to_long_string(&self) -> String {
        format!(
            "{}:{}:{}",
            self.tag.long_name(),
            self.qualifier().unwrap_or(""),
            self.perms
        )
    }
}

impl fmt::Display for Entry {
    /// Renders the entry in the short text form, e.g. `u:1000:r-x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.tag.short_name(),
            self.qualifier().unwrap_or(""),
            self.perms
        )
    }
}
