//! POSIX.1e structural well-formedness checks.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Acl, Tag};

/// First structural rule an ACL violates.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    /// An entry carries [`Tag::Undefined`].
    #[error("entry {index} has an undefined tag")]
    UndefinedTag {
        /// Position of the offending entry.
        index: usize,
    },
    /// Two named user entries share a qualifier.
    #[error("duplicate entry for user {0}")]
    DuplicateUser(String),
    /// Two named group entries share a qualifier.
    #[error("duplicate entry for group {0}")]
    DuplicateGroup(String),
    /// A singleton role (owner, owning group, other) is missing.
    #[error("missing {} entry", .0.long_name())]
    MissingEntry(Tag),
    /// A singleton role appears more than once.
    #[error("duplicate {} entry", .0.long_name())]
    DuplicateEntry(Tag),
    /// Named entries are present but no mask entry is.
    #[error("missing mask entry required by named user or group entries")]
    MissingMask,
}

#[derive(Default)]
struct Counts {
    user_obj: usize,
    group_obj: usize,
    other: usize,
    mask: usize,
    named: usize,
}

impl Acl {
    /// Reports whether the ACL satisfies the POSIX.1e structural rules.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the POSIX.1e structural rules, reporting the first violation.
    ///
    /// Undefined tags and duplicate qualifiers are reported at the position
    /// they are encountered; missing or duplicated singleton roles are
    /// reported after the whole list has been scanned, owner first, then
    /// owning group, other, mask.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut counts = Counts::default();
        let mut users = HashSet::new();
        let mut groups = HashSet::new();

        for (index, entry) in self.iter().enumerate() {
            match entry.tag() {
                Tag::UserObj => counts.user_obj += 1,
                Tag::GroupObj => counts.group_obj += 1,
                Tag::Other => counts.other += 1,
                Tag::Mask => counts.mask += 1,
                Tag::User => {
                    counts.named += 1;
                    let qualifier = entry.qualifier().unwrap_or_default();
                    if !users.insert(qualifier) {
                        return Err(ValidationError::DuplicateUser(qualifier.to_owned()));
                    }
                }
                Tag::Group => {
                    counts.named += 1;
                    let qualifier = entry.qualifier().unwrap_or_default();
                    if !groups.insert(qualifier) {
                        return Err(ValidationError::DuplicateGroup(qualifier.to_owned()));
                    }
                }
                Tag::Undefined => return Err(ValidationError::UndefinedTag { index }),
            }
        }

        for (tag, count) in [
            (Tag::UserObj, counts.user_obj),
            (Tag::GroupObj, counts.group_obj),
            (Tag::Other, counts.other),
        ] {
            match count {
                0 => return Err(ValidationError::MissingEntry(tag)),
                1 => {}
                _ => return Err(ValidationError::DuplicateEntry(tag)),
            }
        }

        if counts.mask > 1 {
            return Err(ValidationError::DuplicateEntry(Tag::Mask));
        }
        if counts.mask == 0 && counts.named > 0 {
            return Err(ValidationError::MissingMask);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;

    fn base() -> Vec<Entry> {
        vec![Entry::user_obj(7), Entry::group_obj(5), Entry::other(4)]
    }

    #[test]
    fn minimal_acl_is_valid() {
        assert_eq!(Acl::from(base()).validate(), Ok(()));
    }

    #[test]
    fn reports_undefined_tag_position() {
        let mut entries = base();
        entries.push(Entry::new(Tag::Undefined, "", 0));
        assert_eq!(
            Acl::from(entries).validate(),
            Err(ValidationError::UndefinedTag { index: 3 })
        );
    }

    #[test]
    fn reports_duplicate_qualifiers_per_namespace() {
        let mut entries = base();
        entries.extend([Entry::user("0", 4), Entry::group("0", 4), Entry::mask(4)]);
        assert!(Acl::from(entries.clone()).is_valid());

        entries.push(Entry::group("0", 1));
        assert_eq!(
            Acl::from(entries).validate(),
            Err(ValidationError::DuplicateGroup("0".into()))
        );
    }

    #[test]
    fn reports_missing_singletons_in_order() {
        let acl = Acl::from([Entry::other(0)]);
        assert_eq!(
            acl.validate(),
            Err(ValidationError::MissingEntry(Tag::UserObj))
        );
        let acl = Acl::from([Entry::user_obj(0), Entry::other(0)]);
        assert_eq!(
            acl.validate(),
            Err(ValidationError::MissingEntry(Tag::GroupObj))
        );
    }

    #[test]
    fn reports_mask_violations() {
        let mut entries = base();
        entries.push(Entry::user("1", 4));
        assert_eq!(
            Acl::from(entries.clone()).validate(),
            Err(ValidationError::MissingMask)
        );

        entries.extend([Entry::mask(4), Entry::mask(4)]);
        assert_eq!(
            Acl::from(entries).validate(),
            Err(ValidationError::DuplicateEntry(Tag::Mask))
        );
    }

    #[test]
    fn messages_name_the_role() {
        assert_eq!(
            ValidationError::MissingEntry(Tag::Other).to_string(),
            "missing other entry"
        );
        assert_eq!(
            ValidationError::DuplicateUser("42".into()).to_string(),
            "duplicate entry for user 42"
        );
    }
}
