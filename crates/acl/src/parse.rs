//! Text parser accepting both the short and the long form.

use std::str::FromStr;

use thiserror::Error;

use crate::{Acl, Entry, Perms, Slot, Tag};

/// Reason a piece of ACL text was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The entry does not have the `tag:qualifier:perms` shape.
    #[error("expected tag:qualifier:perms")]
    MalformedEntry,
    /// The tag is not one of `u`, `g`, `m`, `o` or their long spellings.
    #[error("unknown tag")]
    UnknownTag,
    /// A mask or other entry carries a qualifier.
    #[error("mask and other entries take no qualifier")]
    UnexpectedQualifier,
    /// The permission field is neither `rwx` positional text nor an octal digit.
    #[error("invalid permissions")]
    InvalidPerms,
    /// The entry is prefixed with `default:`; the ACL kind is chosen separately.
    #[error("default: prefix is not accepted here")]
    DefaultPrefix,
}

/// Error returned when ACL text cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid ACL entry '{entry}': {kind}")]
pub struct ParseAclError {
    entry: String,
    kind: ParseErrorKind,
}

impl ParseAclError {
    pub(crate) fn new(entry: &str, kind: ParseErrorKind) -> Self {
        Self {
            entry: entry.to_owned(),
            kind,
        }
    }

    /// The offending entry text.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Why the entry was rejected.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Splits ACL text into trimmed, non-empty entry fragments.
///
/// Entries are separated by commas or newlines; everything after a `#` up to
/// the end of its line is a comment.
fn fragments(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(body, _)| body))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}

/// Resolves a tag spelling and qualifier to a tag.
fn tag_for(raw: &str, name: &str, qualifier: &str) -> Result<Tag, ParseAclError> {
    let tag = match name {
        "u" | "user" if qualifier.is_empty() => Tag::UserObj,
        "u" | "user" => Tag::User,
        "g" | "group" if qualifier.is_empty() => Tag::GroupObj,
        "g" | "group" => Tag::Group,
        "m" | "mask" => Tag::Mask,
        "o" | "other" => Tag::Other,
        "d" | "default" => return Err(ParseAclError::new(raw, ParseErrorKind::DefaultPrefix)),
        _ => return Err(ParseAclError::new(raw, ParseErrorKind::UnknownTag)),
    };

    if matches!(tag, Tag::Mask | Tag::Other) && !qualifier.is_empty() {
        return Err(ParseAclError::new(raw, ParseErrorKind::UnexpectedQualifier));
    }
    Ok(tag)
}

impl FromStr for Entry {
    type Err = ParseAclError;

    /// Parses one entry such as `u:1000:r-x`, `group::rw-` or `m::7`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let raw = text.trim();
        let mut fields = raw.split(':').map(str::trim);
        let (Some(name), Some(qualifier), Some(perms), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            if raw.starts_with("d:") || raw.starts_with("default:") {
                return Err(ParseAclError::new(raw, ParseErrorKind::DefaultPrefix));
            }
            return Err(ParseAclError::new(raw, ParseErrorKind::MalformedEntry));
        };

        let tag = tag_for(raw, name, qualifier)?;
        let perms: Perms = perms
            .parse()
            .map_err(|_| ParseAclError::new(raw, ParseErrorKind::InvalidPerms))?;
        Ok(Self::new(tag, qualifier, perms))
    }
}

impl FromStr for Acl {
    type Err = ParseAclError;

    /// Parses a short or long form ACL.
    ///
    /// The result is not validated; entries keep the order they appear in.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        fragments(text).map(str::parse).collect()
    }
}

impl FromStr for Slot {
    type Err = ParseAclError;

    /// Parses a slot such as `u:1000`, `g:`, `m` or `o::`.
    ///
    /// A trailing permission field is tolerated only when it is empty.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let raw = text.trim();
        let mut fields = raw.split(':').map(str::trim);
        let name = fields.next().unwrap_or_default();
        let qualifier = fields.next().unwrap_or_default();
        if fields.next().is_some_and(|perms| !perms.is_empty()) || fields.next().is_some() {
            return Err(ParseAclError::new(raw, ParseErrorKind::MalformedEntry));
        }

        Ok(match tag_for(raw, name, qualifier)? {
            Tag::UserObj => Self::UserObj,
            Tag::User => Self::User(qualifier.to_owned()),
            Tag::GroupObj => Self::GroupObj,
            Tag::Group => Self::Group(qualifier.to_owned()),
            Tag::Mask => Self::Mask,
            Tag::Other | Tag::Undefined => Self::Other,
        })
    }
}

/// Parses a comma or newline separated list of slots.
pub fn parse_slots(text: &str) -> Result<Vec<Slot>, ParseAclError> {
    fragments(text).map(str::parse).collect()
}
