//! Entry merging with `setfacl -m` style mask maintenance.
//!
//! Merging is slot based: a new entry replaces the permissions of whatever
//! entry already occupies its slot, keeping that entry's position. Entries
//! without a counterpart are inserted where the mask currently sits (or at the
//! front when there is no mask), and the mask itself is then recomputed as the
//! union of every named user, named group and owning group entry, unless the
//! caller supplied a mask explicitly.

use crate::debug_merge::{
    trace_entries_inserted, trace_entries_removed, trace_entry_replaced, trace_mask,
};
use crate::{Acl, Entry, Perms, Slot, Tag};

impl Acl {
    /// Merges `entries` into this ACL.
    ///
    /// The operation never validates its input or output; run
    /// [`validate`](Self::validate) afterwards when the result must be
    /// well-formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use acl::{Acl, Entry, Perms};
    ///
    /// let mut acl = Acl::from([Entry::user_obj(7), Entry::group_obj(0), Entry::other(0)]);
    /// acl.add([Entry::user("0", 4), Entry::group("0", 2)]);
    ///
    /// assert_eq!(acl.to_string(), "u:0:r--,g:0:-w-,m::rw-,u::rwx,g::---,o::---");
    /// assert_eq!(acl.mask(), Some(Perms::new(6)));
    /// ```
    pub fn add<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut explicit_mask = false;
        let mut pending: Vec<Entry> = Vec::new();

        for entry in entries {
            explicit_mask |= entry.tag() == Tag::Mask;

            let existing = self.iter().position(|current| current.same_slot(&entry));
            if let Some(position) = existing {
                trace_entry_replaced(&entry, position);
                self.entries_mut()[position] = entry;
            } else if let Some(queued) = pending.iter_mut().find(|queued| queued.same_slot(&entry))
            {
                *queued = entry;
            } else {
                pending.push(entry);
            }
        }

        let insert_at = self
            .iter()
            .position(|entry| entry.tag() == Tag::Mask)
            .unwrap_or(0);
        let inserted = pending.len();
        trace_entries_inserted(inserted, insert_at);
        let entries = self.entries_mut();
        let tail = entries.split_off(insert_at);
        entries.extend(pending);
        entries.extend(tail);

        if explicit_mask {
            trace_mask(self.mask(), true, false);
            return;
        }

        let computed = self.union_of_limited();
        match self.iter().position(|entry| entry.tag() == Tag::Mask) {
            Some(position) => {
                self.entries_mut()[position].set_perms(computed);
                trace_mask(Some(computed), false, false);
            }
            None => {
                self.entries_mut()
                    .insert(insert_at + inserted, Entry::mask(computed));
                trace_mask(Some(computed), false, true);
            }
        }
    }

    /// Returns a copy of this ACL with `entries` merged in.
    ///
    /// See [`add`](Self::add).
    #[must_use]
    pub fn with_added<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        self.add(entries);
        self
    }

    /// Removes every entry occupying one of `slots`, then recomputes the mask.
    ///
    /// Removing the mask slot explicitly leaves the ACL without a mask; the
    /// recomputation only runs when the mask was not among the removed slots.
    /// Returns the number of entries removed.
    pub fn remove<'a, I>(&mut self, slots: I) -> usize
    where
        I: IntoIterator<Item = &'a Slot>,
    {
        let slots: Vec<&Slot> = slots.into_iter().collect();
        let before = self.len();
        self.entries_mut()
            .retain(|entry| !slots.iter().any(|slot| entry.occupies(slot)));
        let removed = before - self.len();
        trace_entries_removed(removed);

        if !slots.contains(&&Slot::Mask) {
            self.recalculate_mask();
        }
        removed
    }

    /// Sets the mask to the union of every entry it limits.
    ///
    /// An existing mask is updated in place. When there is no mask and the ACL
    /// has named entries, one is inserted in front of the `other` entry (or
    /// appended when there is none). An ACL with neither a mask nor named
    /// entries is left untouched.
    pub fn recalculate_mask(&mut self) {
        let computed = self.union_of_limited();
        if let Some(position) = self.iter().position(|entry| entry.tag() == Tag::Mask) {
            self.entries_mut()[position].set_perms(computed);
            trace_mask(Some(computed), false, false);
        } else if self.has_named_entries() {
            let position = self
                .iter()
                .position(|entry| entry.tag() == Tag::Other)
                .unwrap_or(self.len());
            self.entries_mut().insert(position, Entry::mask(computed));
            trace_mask(Some(computed), false, true);
        }
    }

    fn union_of_limited(&self) -> Perms {
        self.iter()
            .filter(|entry| entry.tag().is_mask_limited())
            .fold(Perms::NONE, |mask, entry| mask | entry.perms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Acl {
        Acl::from([Entry::user_obj(7), Entry::group_obj(0), Entry::other(0)])
    }

    fn with_front(front: impl IntoIterator<Item = Entry>) -> Acl {
        front.into_iter().chain(base()).collect()
    }

    #[test]
    fn generates_mask_after_inserted_entries() {
        let acl = base().with_added([Entry::user("0", 4), Entry::group("0", 2)]);
        assert_eq!(
            acl,
            with_front([Entry::user("0", 4), Entry::group("0", 2), Entry::mask(6)])
        );
    }

    #[test]
    fn explicit_mask_is_authoritative() {
        let acl = base().with_added([
            Entry::user("0", 4),
            Entry::group("0", 2),
            Entry::mask(1),
        ]);
        assert_eq!(
            acl,
            with_front([Entry::user("0", 4), Entry::group("0", 2), Entry::mask(1)])
        );
    }

    #[test]
    fn existing_mask_is_recomputed_not_duplicated() {
        let acl = with_front([Entry::mask(7)])
            .with_added([Entry::user("0", 4), Entry::group("0", 2)]);
        assert_eq!(
            acl,
            with_front([Entry::user("0", 4), Entry::group("0", 2), Entry::mask(6)])
        );
    }

    #[test]
    fn untouched_entries_contribute_to_mask() {
        let acl = with_front([Entry::user("0", 4), Entry::mask(0)])
            .with_added([Entry::group("0", 2), Entry::group_obj(1)]);
        let expected = Acl::from([
            Entry::user("0", 4),
            Entry::group("0", 2),
            Entry::mask(7),
            Entry::user_obj(7),
            Entry::group_obj(1),
            Entry::other(0),
        ]);
        assert_eq!(acl, expected);
    }

    #[test]
    fn overwritten_entries_do_not_leak_old_perms() {
        let acl = with_front([Entry::user("0", 7), Entry::mask(0)])
            .with_added([Entry::user("0", 4), Entry::group("0", 2)]);
        assert_eq!(
            acl,
            with_front([Entry::user("0", 4), Entry::group("0", 2), Entry::mask(6)])
        );
    }

    #[test]
    fn explicit_mask_overwrites_existing_mask_in_place() {
        let acl = with_front([Entry::user("0", 7), Entry::mask(7)])
            .with_added([Entry::mask(2)]);
        assert_eq!(acl, with_front([Entry::user("0", 7), Entry::mask(2)]));
    }

    #[test]
    fn adding_nothing_recomputes_same_mask() {
        let original = with_front([Entry::user("0", 5), Entry::mask(5)]);
        assert_eq!(original.clone().with_added(Vec::<Entry>::new()), original);
    }

    #[test]
    fn adding_nothing_to_minimal_acl_creates_mask_at_front() {
        let acl = base().with_added(Vec::<Entry>::new());
        assert_eq!(acl, with_front([Entry::mask(0)]));
    }

    #[test]
    fn repeated_new_slot_keeps_last_value() {
        let acl = base().with_added([Entry::user("9", 1), Entry::user("9", 6)]);
        assert_eq!(acl, with_front([Entry::user("9", 6), Entry::mask(6)]));
    }

    #[test]
    fn remove_recomputes_mask() {
        let mut acl = with_front([Entry::user("0", 4), Entry::group("0", 2), Entry::mask(6)]);
        let removed = acl.remove([&Slot::Group("0".into())]);
        assert_eq!(removed, 1);
        assert_eq!(acl, with_front([Entry::user("0", 4), Entry::mask(4)]));
    }

    #[test]
    fn remove_mask_slot_skips_recomputation() {
        let mut acl = with_front([Entry::user("0", 4), Entry::mask(6)]);
        acl.remove([&Slot::Mask]);
        assert_eq!(acl, with_front([Entry::user("0", 4)]));
        assert!(!acl.is_valid());
    }

    #[test]
    fn recalculate_inserts_mask_before_other() {
        let mut acl = base();
        acl.push(Entry::user("5", 5));
        acl.recalculate_mask();
        assert_eq!(
            acl,
            Acl::from([
                Entry::user_obj(7),
                Entry::group_obj(0),
                Entry::mask(5),
                Entry::other(0),
                Entry::user("5", 5),
            ])
        );
        assert!(acl.is_valid());
    }
}
