use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use crate::parse::{ParseAclError, ParseErrorKind};

/// Read/write/execute permission bits carried by a single ACL entry.
///
/// Only the low three bits are meaningful. Every constructor masks its input
/// with `0o7`, so callers may pass a full mode or a libacl permset value and
/// the higher bits are dropped rather than rejected.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Perms(u8);

impl Perms {
    /// No access.
    pub const NONE: Self = Self(0);
    /// Execute (or search, for directories).
    pub const EXECUTE: Self = Self(0o1);
    /// Write.
    pub const WRITE: Self = Self(0o2);
    /// Read.
    pub const READ: Self = Self(0o4);
    /// Read, write and execute.
    pub const ALL: Self = Self(0o7);

    /// Creates a permission set from the low three bits of `bits`.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self((bits & 0o7) as u8)
    }

    /// Returns the permission bits in the range `0..=7`.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Reports whether every bit in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Reports whether no permission bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the three-character `rwx` rendering, `-` marking a cleared bit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        const TABLE: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];
        TABLE[self.0 as usize]
    }
}

impl From<u32> for Perms {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

impl From<Perms> for u32 {
    fn from(perms: Perms) -> Self {
        Self::from(perms.0)
    }
}

impl BitOr for Perms {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Perms {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Perms {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for Perms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Perms {
    type Err = ParseAclError;

    /// Parses either the positional `rwx` form (`r-x`, `rw-`) or a single
    /// octal digit.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseAclError::new(text, ParseErrorKind::InvalidPerms);
        let bytes = text.as_bytes();

        if let [digit @ b'0'..=b'7'] = bytes {
            return Ok(Self::new(u32::from(digit - b'0')));
        }

        if bytes.len() != 3 {
            return Err(invalid());
        }

        let mut bits = 0;
        for (found, (flag, bit)) in bytes
            .iter()
            .copied()
            .zip([(b'r', 0o4), (b'w', 0o2), (b'x', 0o1)])
        {
            match found {
                b'-' => {}
                c if c == flag => bits |= bit,
                _ => return Err(invalid()),
            }
        }

        Ok(Self::new(bits))
    }
}
