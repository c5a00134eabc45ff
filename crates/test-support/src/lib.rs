#![deny(unsafe_code)]

//! Shared helpers for integration tests that need real files.
//!
//! Every helper works inside a [`tempfile::TempDir`] so fixtures disappear
//! when the test ends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use tempfile::TempDir;

/// Creates a fresh temporary directory.
pub fn scratch_dir() -> io::Result<TempDir> {
    tempfile::Builder::new().prefix("oc-facl-").tempdir()
}

/// Creates a file named `name` under `dir` with permission bits `mode`.
pub fn create_file(dir: &Path, name: &str, mode: u32) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, b"")?;
    set_mode(&path, mode)?;
    Ok(path)
}

/// Creates a directory named `name` under `dir` with permission bits `mode`.
pub fn create_dir(dir: &Path, name: &str, mode: u32) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::create_dir(&path)?;
    set_mode(&path, mode)?;
    Ok(path)
}

/// Sets the permission bits of `path`.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

/// Sets the permission bits of `path`.
///
/// Only the owner write bit is meaningful on this platform.
#[cfg(not(unix))]
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(path, permissions)
}

/// Returns the permission bits of `path`.
#[cfg(unix)]
pub fn mode_of(path: &Path) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;

    Ok(fs::metadata(path)?.permissions().mode() & 0o7777)
}
