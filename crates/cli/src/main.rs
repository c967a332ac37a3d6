//! portalkit CLI — text helpers for portal sites.
//!
//! `portalkit [--config portal.toml] [--json|--raw] COMMAND`
//! - `normalize TEXT` — display text → id
//! - `version [TEXT | --file PATH]` — loose version string → version
//! - `autogen ID [--type NAME...]` — generated-id check
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod commands;
mod format;
mod parse;

use std::io::Read;
use std::path::Path;
use std::process;

use portalkit_core::{Error, Result};
use portalkit_engine::{
    is_auto_generated_id, normalize_string, parse_version, read_version_file, AsciiFolding,
    NormalizeContext,
};
use portalkit_site::SiteConfig;
use tracing::debug;

use commands::build_cli;
use format::{format_error, format_output, Output, OutputMode};
use parse::{matches_to_action, CliAction, NormalizeInput, VersionSource};

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let config = match matches.get_one::<String>("config") {
        Some(path) => match SiteConfig::from_file(Path::new(path)) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("{}", format_error(&e, output_mode));
                process::exit(1);
            }
        },
        None => None,
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    match execute(action, config.as_ref(), std::io::stdin()) {
        Ok(output) => {
            let formatted = format_output(&output, output_mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Drop the line ending a shell pipe adds
fn strip_line_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !matches!(b, b'\n' | b'\r'))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

fn execute(
    action: CliAction,
    config: Option<&SiteConfig>,
    mut stdin: impl Read,
) -> Result<Output> {
    match action {
        CliAction::Normalize {
            input,
            encoding,
            locale,
        } => {
            let folding = match locale.as_deref() {
                Some(lang) => AsciiFolding::for_locale(lang),
                None => AsciiFolding::new(),
            };
            let mut ctx = NormalizeContext::default().unicode(&folding);
            match (encoding.as_deref(), config) {
                (Some(enc), _) => ctx = ctx.encoding(enc),
                (None, Some(site)) => ctx = ctx.site(site),
                (None, None) => ctx = ctx.encoding(portalkit_core::limits::DEFAULT_CHARSET),
            }
            debug!(?ctx, "normalizing");

            let id = match input {
                NormalizeInput::Text(text) => normalize_string(text.as_str(), &ctx)?,
                NormalizeInput::Stdin => {
                    let mut bytes = Vec::new();
                    stdin.read_to_end(&mut bytes)?;
                    normalize_string(strip_line_end(&bytes), &ctx)?
                }
            };
            Ok(Output::Normalized { id })
        }
        CliAction::ParseVersion(source) => {
            let version = match source {
                VersionSource::Text(text) => parse_version(&text),
                VersionSource::File(path) => read_version_file(&path)?,
                VersionSource::Site => config
                    .ok_or_else(|| {
                        Error::config("version needs TEXT, --file or --config")
                    })?
                    .fs_version()?,
            };
            Ok(Output::Version { version })
        }
        CliAction::CheckAutogen { id, types } => {
            let generated = if !types.is_empty() {
                is_auto_generated_id(&id, &types)
            } else if let Some(site) = config {
                is_auto_generated_id(&id, site)
            } else {
                return Err(Error::config("autogen needs --type or --config"));
            };
            Ok(Output::AutoGenerated { id, generated })
        }
    }
}
