//! ArgMatches → CliAction conversion.

use std::path::PathBuf;

use clap::ArgMatches;

/// What to normalize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeInput {
    /// Text given on the command line
    Text(String),
    /// Raw bytes read from stdin
    Stdin,
}

/// Where a version string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Given on the command line
    Text(String),
    /// Read from a file
    File(PathBuf),
    /// The configured site's version file
    Site,
}

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Normalize text into an id
    Normalize {
        input: NormalizeInput,
        encoding: Option<String>,
        locale: Option<String>,
    },
    /// Parse a version string
    ParseVersion(VersionSource),
    /// Check an id against the generated-id heuristic.
    /// An empty `types` list means "use the site's content types".
    CheckAutogen { id: String, types: Vec<String> },
}

/// Convert top-level matches into a `CliAction`.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "normalize" => parse_normalize(sub_matches),
        "version" => Ok(parse_version_cmd(sub_matches)),
        "autogen" => parse_autogen(sub_matches),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_normalize(matches: &ArgMatches) -> Result<CliAction, String> {
    let text = matches
        .get_one::<String>("text")
        .ok_or_else(|| "Missing TEXT".to_string())?;
    let input = if text == "-" {
        NormalizeInput::Stdin
    } else {
        NormalizeInput::Text(text.clone())
    };
    Ok(CliAction::Normalize {
        input,
        encoding: matches.get_one::<String>("encoding").cloned(),
        locale: matches.get_one::<String>("locale").cloned(),
    })
}

fn parse_version_cmd(matches: &ArgMatches) -> CliAction {
    let source = if let Some(path) = matches.get_one::<String>("file") {
        VersionSource::File(PathBuf::from(path))
    } else if let Some(text) = matches.get_one::<String>("text") {
        VersionSource::Text(text.clone())
    } else {
        VersionSource::Site
    };
    CliAction::ParseVersion(source)
}

fn parse_autogen(matches: &ArgMatches) -> Result<CliAction, String> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| "Missing ID".to_string())?
        .clone();
    let types = matches
        .get_many::<String>("type")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    Ok(CliAction::CheckAutogen { id, types })
}
