//! Command-line arguments and usage text.

use clap::Parser;
use clap::error::ErrorKind;
use mvnreps_core::MAVEN_SEARCH_BASE;
use std::io::{self, Write};

pub const USAGE: &str = "\
Maven Central search tool

Usage:
  mvnreps <query> [format]

Examples:
  mvnreps okhttp                (library search)
  mvnreps g:a                   (latest 5 versions of a library)
  mvnreps g:a,10 gradle         (latest 10 versions as Gradle lines)
  mvnreps g:a,10 gradle.kts     (latest 10 versions as Kotlin DSL lines)

Formats:
  default    - g:a:v (default)
  pom        - Maven XML
  gradle     - Gradle
  gradle.kts - Kotlin DSL
  format     - table";

#[derive(Debug, Parser)]
#[command(name = "mvnreps", version, about = "Search Maven Central from the terminal")]
#[command(after_help = USAGE)]
pub struct Cli {
    /// Search keywords or groupId:artifactId, optionally followed by ,<rows>
    pub query: Option<String>,

    /// Output format: default, pom, gradle, gradle.kts or format
    pub format: Option<String>,

    /// Solr select endpoint to query
    #[arg(long, env = "MVNREPS_ENDPOINT", default_value = MAVEN_SEARCH_BASE)]
    pub endpoint: String,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Anything after the format is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub verbose: bool,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            endpoint: cli.endpoint.clone(),
            verbose: cli.verbose,
        }
    }
}

/// Prints the missing-query error followed by the usage text.
pub fn print_missing_query<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ Error: please provide a search keyword or G:A coordinate")?;
    writeln!(out)?;
    writeln!(out, "{USAGE}")
}

/// Writes a clap failure to `out` instead of letting clap exit with code 2.
///
/// `--help` and `--version` are written as-is; anything else becomes a single
/// `❌` line followed by the usage text.
pub fn print_parse_error<W: Write>(out: &mut W, err: &clap::Error) -> io::Result<()> {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return write!(out, "{err}");
    }

    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    writeln!(out, "❌ {message}")?;
    writeln!(out)?;
    writeln!(out, "{USAGE}")
}
