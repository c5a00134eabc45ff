//! Subcommand handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use acl::{Acl, NameResolver, NumericIds, Slot, parse_slots};
use clap::ArgMatches;
use metadata::{AclKind, AclStore, SystemResolver, ops};
use tracing::info;

use crate::error::{CliError, EXIT_OK, EXIT_STORAGE};
use crate::options::GlobalOptions;

const TARGET: &str = "oc_facl";

fn kind_of(matches: &ArgMatches) -> AclKind {
    if matches.get_flag("default") {
        AclKind::Default
    } else {
        AclKind::Access
    }
}

fn path_of(matches: &ArgMatches) -> &Path {
    matches
        .get_one::<PathBuf>("path")
        .map_or_else(|| Path::new(""), PathBuf::as_path)
}

fn text_of<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map_or("", String::as_str)
}

/// Parses an octal permission argument such as `750`, `0750` or `0o750`.
///
/// Values above `0o7777` are rejected; the special bits are accepted and
/// later ignored by the projection.
pub(crate) fn parse_mode(text: &str) -> Result<u32, CliError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| matches!(byte, b'0'..=b'7')) {
        return Err(CliError::Mode(text.to_owned()));
    }
    u32::from_str_radix(digits, 8)
        .ok()
        .filter(|mode| *mode <= 0o7777)
        .ok_or_else(|| CliError::Mode(text.to_owned()))
}

fn render<R>(acl: &Acl, short: bool, resolver: &R) -> String
where
    R: NameResolver + ?Sized,
{
    if short {
        acl.display_with(resolver).to_string()
    } else {
        acl.to_long_string_with(resolver)
    }
}

/// Prints the ACL of every path, continuing past paths that fail.
///
/// Returns the exit status: storage failures on any path yield
/// [`EXIT_STORAGE`] after the remaining paths have been listed.
pub(crate) fn get<S, Out, Err>(
    store: &S,
    options: GlobalOptions,
    matches: &ArgMatches,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<i32, CliError>
where
    S: AclStore + ?Sized,
    Out: Write,
    Err: Write,
{
    let kind = kind_of(matches);
    let short = matches.get_flag("short");
    let header = !matches.get_flag("omit-header");
    let resolver: &dyn NameResolver = if matches.get_flag("numeric") || options.numeric_default {
        &NumericIds
    } else {
        &SystemResolver
    };

    let mut status = EXIT_OK;
    let mut printed = 0usize;
    for path in matches.get_many::<PathBuf>("paths").into_iter().flatten() {
        let acl = match kind {
            AclKind::Access => ops::get(store, path),
            AclKind::Default => ops::get_default(store, path),
        };
        let acl = match acl {
            Ok(acl) => acl,
            Err(error) => {
                writeln!(stderr, "oc-facl: {error}")?;
                status = EXIT_STORAGE;
                continue;
            }
        };

        if printed > 0 {
            writeln!(stdout)?;
        }
        printed += 1;
        if header {
            writeln!(stdout, "# file: {}", path.display())?;
        }
        if !acl.is_empty() {
            writeln!(stdout, "{}", render(&acl, short, resolver))?;
        }
    }
    Ok(status)
}

/// Replaces the ACL of a path after checking it is well formed.
pub(crate) fn set<S>(store: &S, matches: &ArgMatches) -> Result<i32, CliError>
where
    S: AclStore + ?Sized,
{
    let path = path_of(matches);
    let kind = kind_of(matches);
    let acl: Acl = text_of(matches, "acl").parse()?;
    match kind {
        AclKind::Default if acl.is_empty() => {}
        _ => acl.validate()?,
    }
    match kind {
        AclKind::Access => ops::set(store, path, &acl)?,
        AclKind::Default => ops::set_default(store, path, &acl)?,
    }
    info!(target: TARGET, path = %path.display(), %kind, acl = %acl, "replaced ACL");
    Ok(EXIT_OK)
}

/// Merges entries into the ACL of a path.
pub(crate) fn add<S>(store: &S, matches: &ArgMatches) -> Result<i32, CliError>
where
    S: AclStore + ?Sized,
{
    let path = path_of(matches);
    let kind = kind_of(matches);
    let entries: Acl = text_of(matches, "entries").parse()?;
    let written = ops::add(store, path, kind, entries)?;
    info!(target: TARGET, path = %path.display(), %kind, acl = %written, "merged entries");
    Ok(EXIT_OK)
}

/// Removes slots from the ACL of a path.
pub(crate) fn remove<S>(store: &S, matches: &ArgMatches) -> Result<i32, CliError>
where
    S: AclStore + ?Sized,
{
    let path = path_of(matches);
    let kind = kind_of(matches);
    let slots: Vec<Slot> = parse_slots(text_of(matches, "slots"))?;
    let written = ops::remove(store, path, kind, &slots)?;
    info!(target: TARGET, path = %path.display(), %kind, acl = %written, "removed entries");
    Ok(EXIT_OK)
}

/// Validates ACL text; the first violated rule becomes the error.
pub(crate) fn check(matches: &ArgMatches) -> Result<i32, CliError> {
    let acl: Acl = text_of(matches, "acl").parse()?;
    acl.validate()?;
    Ok(EXIT_OK)
}

/// Prints the minimal ACL for an octal mode.
pub(crate) fn from_mode<Out>(matches: &ArgMatches, stdout: &mut Out) -> Result<i32, CliError>
where
    Out: Write,
{
    let mode = parse_mode(text_of(matches, "mode"))?;
    let acl = Acl::from_unix(mode);
    writeln!(stdout, "{}", render(&acl, matches.get_flag("short"), &NumericIds))?;
    Ok(EXIT_OK)
}

/// Prints the octal permission bits an ACL projects to.
pub(crate) fn to_mode<Out>(matches: &ArgMatches, stdout: &mut Out) -> Result<i32, CliError>
where
    Out: Write,
{
    let acl: Acl = text_of(matches, "acl").parse()?;
    let mode = if matches.get_flag("positional") {
        acl.to_unix()
    } else {
        acl.to_unix_by_tag().ok_or(CliError::Projection)?
    };
    writeln!(stdout, "{mode:04o}")?;
    Ok(EXIT_OK)
}
