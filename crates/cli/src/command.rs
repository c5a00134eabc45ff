//! `clap` definition of the command-line surface.

use clap::{Arg, ArgAction, Command};

/// Environment variable that makes `--numeric` the default for `get`.
pub const NUMERIC_ENV: &str = "OC_FACL_NUMERIC";

fn default_flag() -> Arg {
    Arg::new("default")
        .long("default")
        .short('d')
        .help("Operate on the default ACL of a directory instead of the access ACL.")
        .action(ArgAction::SetTrue)
}

fn short_flag() -> Arg {
    Arg::new("short")
        .long("short")
        .short('s')
        .help("Print the comma-separated short text form.")
        .action(ArgAction::SetTrue)
}

fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .help("File or directory whose ACL is changed.")
        .required(true)
        .value_parser(clap::value_parser!(std::path::PathBuf))
}

/// Builds the `clap` command used for parsing.
pub fn clap_command() -> Command {
    Command::new("oc-facl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect, validate and edit POSIX.1e access control lists.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more detail.")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("get")
                .about("Print the ACL of each PATH.")
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .help("Files or directories to list.")
                        .required(true)
                        .num_args(1..)
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(short_flag())
                .arg(default_flag())
                .arg(
                    Arg::new("numeric")
                        .long("numeric")
                        .short('n')
                        .help("Print numeric user and group ids instead of names.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("omit-header")
                        .long("omit-header")
                        .help("Do not print the '# file:' header.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Replace the ACL of PATH.")
                .arg(path_arg())
                .arg(
                    Arg::new("acl")
                        .value_name("ACL")
                        .help("Complete ACL in short or long text form.")
                        .required(true),
                )
                .arg(default_flag()),
        )
        .subcommand(
            Command::new("add")
                .about("Merge ENTRIES into the ACL of PATH and recompute the mask.")
                .arg(path_arg())
                .arg(
                    Arg::new("entries")
                        .value_name("ENTRIES")
                        .help("Entries to add, e.g. 'u:1000:rw-,g:100:r--'. An 'm::' entry fixes the mask.")
                        .required(true),
                )
                .arg(default_flag()),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove the entries occupying SLOTS from the ACL of PATH.")
                .arg(path_arg())
                .arg(
                    Arg::new("slots")
                        .value_name("SLOTS")
                        .help("Slots to remove, e.g. 'u:1000,g:100'.")
                        .required(true),
                )
                .arg(default_flag()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate ACL text and report the first violated rule.")
                .arg(
                    Arg::new("acl")
                        .value_name("ACL")
                        .help("ACL in short or long text form.")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("from-mode")
                .about("Print the minimal ACL equivalent to an octal MODE.")
                .arg(
                    Arg::new("mode")
                        .value_name("MODE")
                        .help("Octal permission bits, e.g. 0750.")
                        .required(true),
                )
                .arg(short_flag()),
        )
        .subcommand(
            Command::new("to-mode")
                .about("Print the octal permission bits an ACL projects to.")
                .arg(
                    Arg::new("acl")
                        .value_name("ACL")
                        .help("ACL in short or long text form.")
                        .required(true),
                )
                .arg(
                    Arg::new("positional")
                        .long("positional")
                        .help("Read the first three entries in order instead of looking them up by tag. Shorter ACLs pack into the low octal digits.")
                        .action(ArgAction::SetTrue),
                ),
        )
}
