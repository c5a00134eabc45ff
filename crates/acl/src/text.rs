//! Short and long text renderings.
//!
//! Both forms walk the entries in their stored order. The long form puts one
//! entry per line and annotates every mask-limited entry whose nominal
//! permissions exceed the mask with its effective permissions, the comment
//! starting at column [`EFFECTIVE_COLUMN`].

use std::borrow::Cow;
use std::fmt;

use crate::{Acl, Entry, NameResolver, NumericIds};

/// Column at which `#effective:` annotations start in the long form.
pub const EFFECTIVE_COLUMN: usize = 20;

fn qualifier_with<'a, R>(entry: &'a Entry, resolver: &R) -> Cow<'a, str>
where
    R: NameResolver + ?Sized,
{
    match entry.qualifier() {
        Some(qualifier) => Cow::Owned(resolver.resolve_name(qualifier, entry.tag())),
        None => Cow::Borrowed(""),
    }
}

/// Short form rendering returned by [`Acl::display_with`].
pub struct DisplayWith<'a, R: ?Sized> {
    acl: &'a Acl,
    resolver: &'a R,
}

impl<R> fmt::Display for DisplayWith<'_, R>
where
    R: NameResolver + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.acl.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(
                f,
                "{}:{}:{}",
                entry.tag().short_name(),
                qualifier_with(entry, self.resolver),
                entry.perms()
            )?;
        }
        Ok(())
    }
}

impl Acl {
    /// Renders the short form with qualifiers passed through `resolver`.
    pub fn display_with<'a, R>(&'a self, resolver: &'a R) -> DisplayWith<'a, R>
    where
        R: NameResolver + ?Sized,
    {
        DisplayWith {
            acl: self,
            resolver,
        }
    }

    /// Renders the long form, one entry per line, without a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use acl::{Acl, Entry};
    ///
    /// let acl = Acl::from([
    ///     Entry::user_obj(7),
    ///     Entry::group_obj(6),
    ///     Entry::other(0),
    ///     Entry::mask(4),
    /// ]);
    /// assert_eq!(
    ///     acl.to_long_string(),
    ///     "user::rwx\ngroup::rw-          #effective:r--\nother::---\nmask::r--"
    /// );
    /// ```
    #[must_use]
    pub fn to_long_string(&self) -> String {
        self.to_long_string_with(&NumericIds)
    }

    /// Renders the long form with qualifiers passed through `resolver`.
    #[must_use]
    pub fn to_long_string_with<R>(&self, resolver: &R) -> String
    where
        R: NameResolver + ?Sized,
    {
        let mask = self.mask().unwrap_or(crate::Perms::ALL);
        let lines: Vec<String> = self
            .iter()
            .map(|entry| {
                let line = format!(
                    "{}:{}:{}",
                    entry.tag().long_name(),
                    qualifier_with(entry, resolver),
                    entry.perms()
                );
                let effective = entry.perms() & mask;
                if entry.tag().is_mask_limited() && effective != entry.perms() {
                    format!("{line:<width$}#effective:{effective}", width = EFFECTIVE_COLUMN)
                } else {
                    line
                }
            })
            .collect();
        lines.join("\n")
    }
}

impl fmt::Display for Acl {
    /// Renders the short form, e.g. `u::rwx,g::r-x,o::---`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&NumericIds), f)
    }
}
