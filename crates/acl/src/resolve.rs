//! Presentation-time qualifier substitution.

use crate::Tag;

/// Maps a user or group qualifier to the name shown in rendered text.
///
/// Resolution is total: an implementation that cannot find a name returns the
/// qualifier unchanged. Resolvers only affect rendering and never alter the
/// ACL they are asked to print.
pub trait NameResolver {
    /// Returns the display name for `qualifier`, looked up in the namespace
    /// selected by `tag` ([`Tag::User`] or [`Tag::Group`]).
    fn resolve_name(&self, qualifier: &str, tag: Tag) -> String;
}

/// Resolver that prints qualifiers as they are stored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NumericIds;

impl NameResolver for NumericIds {
    fn resolve_name(&self, qualifier: &str, _tag: Tag) -> String {
        qualifier.to_owned()
    }
}

impl<F> NameResolver for F
where
    F: Fn(&str, Tag) -> String,
{
    fn resolve_name(&self, qualifier: &str, tag: Tag) -> String {
        self(qualifier, tag)
    }
}
