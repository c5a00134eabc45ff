//! Storage backends that read and write ACLs attached to paths.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use acl::Acl;

use crate::{StoreError, StoreErrorKind};

/// Which of a path's two ACLs an operation targets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AclKind {
    /// The ACL governing access to the path itself.
    Access,
    /// The ACL inherited by objects created inside a directory.
    Default,
}

impl AclKind {
    pub(crate) const fn read_context(self) -> &'static str {
        match self {
            Self::Access => "read ACL",
            Self::Default => "read default ACL",
        }
    }

    pub(crate) const fn write_context(self) -> &'static str {
        match self {
            Self::Access => "write ACL",
            Self::Default => "write default ACL",
        }
    }
}

impl fmt::Display for AclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Access => "access",
            Self::Default => "default",
        })
    }
}

/// Reads and writes the ACLs attached to filesystem paths.
///
/// Implementations report failures through [`StoreError`] and never retry or
/// reinterpret them. An empty default ACL means the directory has none.
pub trait AclStore {
    /// Reads the ACL of `kind` attached to `path`.
    fn read(&self, path: &Path, kind: AclKind) -> Result<Acl, StoreError>;

    /// Replaces the ACL of `kind` attached to `path`.
    fn write(&self, path: &Path, kind: AclKind, acl: &Acl) -> Result<(), StoreError>;
}

impl<S: AclStore + ?Sized> AclStore for &S {
    fn read(&self, path: &Path, kind: AclKind) -> Result<Acl, StoreError> {
        (**self).read(path, kind)
    }

    fn write(&self, path: &Path, kind: AclKind, acl: &Acl) -> Result<(), StoreError> {
        (**self).write(path, kind, acl)
    }
}

impl<S: AclStore + ?Sized> AclStore for Box<S> {
    fn read(&self, path: &Path, kind: AclKind) -> Result<Acl, StoreError> {
        (**self).read(path, kind)
    }

    fn write(&self, path: &Path, kind: AclKind, acl: &Acl) -> Result<(), StoreError> {
        (**self).write(path, kind, acl)
    }
}

/// Backend for builds and platforms without ACL support.
///
/// Every call fails with [`StoreErrorKind::NotSupported`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedStore;

impl UnsupportedStore {
    fn unsupported(context: &'static str, path: &Path) -> StoreError {
        StoreError::with_kind(
            context,
            path,
            StoreErrorKind::NotSupported,
            io::Error::new(
                io::ErrorKind::Unsupported,
                "ACLs are not supported by this build",
            ),
        )
    }
}

impl AclStore for UnsupportedStore {
    fn read(&self, path: &Path, kind: AclKind) -> Result<Acl, StoreError> {
        Err(Self::unsupported(kind.read_context(), path))
    }

    fn write(&self, path: &Path, kind: AclKind, _acl: &Acl) -> Result<(), StoreError> {
        Err(Self::unsupported(kind.write_context(), path))
    }
}

#[derive(Clone, Debug, Default)]
struct StoredAcls {
    access: Acl,
    default: Acl,
}

impl StoredAcls {
    fn get(&self, kind: AclKind) -> &Acl {
        match kind {
            AclKind::Access => &self.access,
            AclKind::Default => &self.default,
        }
    }

    fn get_mut(&mut self, kind: AclKind) -> &mut Acl {
        match kind {
            AclKind::Access => &mut self.access,
            AclKind::Default => &mut self.default,
        }
    }
}

/// In-process backend keyed by path.
///
/// Paths must be registered with [`insert`](Self::insert) before use; other
/// paths report [`StoreErrorKind::NotFound`]. Writes are checked with
/// [`Acl::validate`] and rejected as [`StoreErrorKind::InvalidArgument`],
/// matching how the kernel refuses ill-formed ACLs. Writing an empty default
/// ACL removes it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    paths: Mutex<HashMap<PathBuf, StoredAcls>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` with the minimal access ACL for `mode` and no default
    /// ACL, replacing anything stored for it before.
    pub fn insert(&self, path: impl Into<PathBuf>, mode: u32) {
        let stored = StoredAcls {
            access: Acl::from_unix(mode),
            default: Acl::new(),
        };
        self.lock().insert(path.into(), stored);
    }

    /// Reports whether `path` has been registered.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, StoredAcls>> {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(context: &'static str, path: &Path) -> StoreError {
        StoreError::new(context, path, io::Error::from(io::ErrorKind::NotFound))
    }
}

impl AclStore for MemoryStore {
    fn read(&self, path: &Path, kind: AclKind) -> Result<Acl, StoreError> {
        self.lock()
            .get(path)
            .map(|stored| stored.get(kind).clone())
            .ok_or_else(|| Self::not_found(kind.read_context(), path))
    }

    fn write(&self, path: &Path, kind: AclKind, acl: &Acl) -> Result<(), StoreError> {
        let context = kind.write_context();
        let removes_default = kind == AclKind::Default && acl.is_empty();
        if !removes_default {
            acl.validate().map_err(|error| {
                StoreError::with_kind(
                    context,
                    path,
                    StoreErrorKind::InvalidArgument,
                    io::Error::new(io::ErrorKind::InvalidInput, error),
                )
            })?;
        }

        let mut paths = self.lock();
        let stored = paths
            .get_mut(path)
            .ok_or_else(|| Self::not_found(context, path))?;
        *stored.get_mut(kind) = acl.clone();
        Ok(())
    }
}

/// Returns the best backend compiled into this build.
///
/// With the `libacl` feature on Linux this is the libacl backend; everywhere
/// else it is [`UnsupportedStore`].
#[must_use]
pub fn default_store() -> Box<dyn AclStore> {
    #[cfg(all(feature = "libacl", target_os = "linux"))]
    {
        Box::new(crate::PosixAclStore::new())
    }

    #[cfg(not(all(feature = "libacl", target_os = "linux")))]
    {
        Box::new(UnsupportedStore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acl::Entry;

    #[test]
    fn memory_store_reads_registered_paths() {
        let store = MemoryStore::new();
        store.insert("/srv/file", 0o640);

        let access = store.read(Path::new("/srv/file"), AclKind::Access).unwrap();
        assert_eq!(access, Acl::from_unix(0o640));
        let default = store.read(Path::new("/srv/file"), AclKind::Default).unwrap();
        assert!(default.is_empty());
    }

    #[test]
    fn memory_store_reports_unknown_paths() {
        let store = MemoryStore::new();
        let err = store
            .read(Path::new("/missing"), AclKind::Access)
            .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::NotFound);
        assert_eq!(err.context(), "read ACL");

        let err = store
            .write(Path::new("/missing"), AclKind::Access, &Acl::from_unix(0))
            .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::NotFound);
    }

    #[test]
    fn memory_store_rejects_invalid_acls() {
        let store = MemoryStore::new();
        store.insert("/srv/dir", 0o755);

        let mut acl = Acl::from_unix(0o755);
        acl.push(Entry::user("1000", 7));
        let err = store
            .write(Path::new("/srv/dir"), AclKind::Access, &acl)
            .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidArgument);
        assert!(err.to_string().contains("missing mask entry"));
        assert_eq!(
            store.read(Path::new("/srv/dir"), AclKind::Access).unwrap(),
            Acl::from_unix(0o755)
        );
    }

    #[test]
    fn memory_store_clears_default_with_empty_acl() {
        let store = MemoryStore::new();
        store.insert("/srv/dir", 0o755);
        let path = Path::new("/srv/dir");

        store
            .write(path, AclKind::Default, &Acl::from_unix(0o750))
            .unwrap();
        assert_eq!(
            store.read(path, AclKind::Default).unwrap(),
            Acl::from_unix(0o750)
        );

        store.write(path, AclKind::Default, &Acl::new()).unwrap();
        assert!(store.read(path, AclKind::Default).unwrap().is_empty());
        assert!(store.write(path, AclKind::Access, &Acl::new()).is_err());
    }

    #[test]
    fn unsupported_store_fails_every_call() {
        let path = Path::new("/srv/file");
        let err = UnsupportedStore.read(path, AclKind::Default).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::NotSupported);
        assert_eq!(err.context(), "read default ACL");
        let err = UnsupportedStore
            .write(path, AclKind::Access, &Acl::from_unix(0o644))
            .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::NotSupported);
    }

    #[test]
    fn boxed_and_borrowed_stores_delegate() {
        let store = MemoryStore::new();
        store.insert("/a", 0o600);
        let borrowed: &dyn AclStore = &store;
        assert_eq!(
            borrowed.read(Path::new("/a"), AclKind::Access).unwrap(),
            Acl::from_unix(0o600)
        );
        let boxed: Box<dyn AclStore> = Box::new(UnsupportedStore);
        assert!(boxed.read(Path::new("/a"), AclKind::Access).is_err());
    }
}
