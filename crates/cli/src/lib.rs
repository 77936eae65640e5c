use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::commands::{AlignArgs, handle_align};

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "bomalign",
    author,
    version,
    about = "Align Gradle dependency versions with a BOM",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    /// The BOM to align with (filesystem path or URL)
    #[arg(short, long)]
    bom: String,

    /// The libraries file to update; when omitted every .gradle file under
    /// the current directory is updated
    #[arg(short, long)]
    lib: Option<PathBuf>,
}

/// # Errors
/// Returns error if loading the BOM or aligning any target file fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    handle_align(&AlignArgs {
        bom: cli.bom,
        lib: cli.lib,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_bom_only() {
        let cli = Cli::parse_from(["bomalign", "--bom", "bom.xml"]);
        assert_eq!(cli.bom, "bom.xml");
        assert!(cli.lib.is_none());
    }

    #[test]
    fn test_cli_parsing_short_flags() {
        let cli = Cli::parse_from(["bomalign", "-b", "bom.xml", "-l", "build.gradle"]);
        assert_eq!(cli.bom, "bom.xml");
        assert_eq!(cli.lib, Some(PathBuf::from("build.gradle")));
    }

    #[test]
    fn test_cli_parsing_requires_bom() {
        let result = Cli::try_parse_from(["bomalign"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_url_bom() {
        let cli = Cli::parse_from(["bomalign", "--bom", "https://repo.example.com/bom.xml"]);
        assert!(cli.bom.starts_with("https"));
    }
}
