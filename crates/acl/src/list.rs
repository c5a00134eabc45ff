use std::collections::HashMap;
use std::ops::Index;

use crate::{Entry, Perms, Slot, Tag};

/// An ordered access control list.
///
/// Entry order is preserved exactly as supplied: it determines how the ACL is
/// printed and where the merge engine inserts new entries. Validity and
/// [`set_eq`](Self::set_eq) comparisons ignore order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Acl {
    entries: Vec<Entry>,
}

impl Acl {
    /// Creates an empty ACL.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the ACL has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their stored order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates over the entries in their stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Appends an entry without any merging.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Consumes the ACL and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<Entry> {
        &mut self.entries
    }

    /// Returns the first entry occupying `slot`.
    #[must_use]
    pub fn find(&self, slot: &Slot) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.occupies(slot))
    }

    /// Returns the permissions of the first mask entry, if any.
    #[must_use]
    pub fn mask(&self) -> Option<Perms> {
        self.find(&Slot::Mask).map(Entry::perms)
    }

    /// Returns the permissions `entry` actually grants under this ACL.
    ///
    /// Entries limited by the mask are intersected with it; an ACL without a
    /// mask behaves as if the mask were `rwx`.
    #[must_use]
    pub fn effective(&self, entry: &Entry) -> Perms {
        if entry.tag().is_mask_limited() {
            entry.perms() & self.mask().unwrap_or(Perms::ALL)
        } else {
            entry.perms()
        }
    }

    /// Reports whether the ACL contains named user or group entries.
    #[must_use]
    pub fn has_named_entries(&self) -> bool {
        self.entries.iter().any(|entry| entry.tag().is_named())
    }

    /// Compares two ACLs as multisets of entries, ignoring order.
    ///
    /// Qualifiers of singleton entries are not significant.
    #[must_use]
    pub fn set_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut counts: HashMap<(Tag, Option<&str>, Perms), isize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(Self::key(entry)).or_default() += 1;
        }
        for entry in &other.entries {
            *counts.entry(Self::key(entry)).or_default() -= 1;
        }
        counts.values().all(|&count| count == 0)
    }

    fn key(entry: &Entry) -> (Tag, Option<&str>, Perms) {
        (entry.tag(), entry.qualifier(), entry.perms())
    }
}

impl From<Vec<Entry>> for Acl {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl<const N: usize> From<[Entry; N]> for Acl {
    fn from(entries: [Entry; N]) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

impl FromIterator<Entry> for Acl {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Entry> for Acl {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Acl {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Acl {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Index<usize> for Acl {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}
