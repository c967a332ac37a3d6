//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("portalkit")
        .about("Text helpers for portal sites: ids, versions, generated-id checks")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Site config file (portal.toml)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare values, no type prefixes)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_normalize())
        .subcommand(build_version())
        .subcommand(build_autogen())
}

fn build_normalize() -> Command {
    Command::new("normalize")
        .about("Turn display text into an id-safe string")
        .arg(
            Arg::new("text")
                .required(true)
                .value_name("TEXT")
                .help("Text to normalize ('-' reads raw bytes from stdin)"),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .short('e')
                .value_name("ENC")
                .help("Charset of stdin bytes (default: site charset, else utf-8)"),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .short('l')
                .value_name("LANG")
                .help("Language for locale-specific folding (e.g. de, da)"),
        )
}

fn build_version() -> Command {
    Command::new("version")
        .about("Parse a loose version string")
        .arg(
            Arg::new("text")
                .value_name("TEXT")
                .help("Version string (default: the site's version file)")
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .help("Read the version from a file"),
        )
}

fn build_autogen() -> Command {
    Command::new("autogen")
        .about("Check whether an id was generated by the site")
        .arg(
            Arg::new("id")
                .required(true)
                .value_name("ID")
                .help("Object id, e.g. document.2020-01-01.12345"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .value_name("NAME")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Registered content type (default: content_types from the config)"),
        )
}
