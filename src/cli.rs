//! CLI argument parsing for next-metadata.
//!
//! Uses clap derive macros for declarative argument definitions. Actual
//! implementations live in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// next-metadata: scaffold a Next.js SEO metadata module and wire it into
/// the app layout.
#[derive(Parser, Debug)]
#[command(name = "next-metadata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Running with no subcommand is equivalent to `init` with defaults.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the metadata configuration module and update the layout.
    ///
    /// Prompts for any site values not supplied as flags when run on a
    /// terminal; otherwise falls back to defaults.
    Init(InitArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug, Default)]
pub struct InitArgs {
    /// Website name (default: the project directory name).
    #[arg(long)]
    pub site_name: Option<String>,

    /// Website URL.
    #[arg(long)]
    pub site_url: Option<String>,

    /// Short description of the website.
    #[arg(long)]
    pub site_description: Option<String>,

    /// Render from a custom template file instead of the bundled one.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Do not touch the layout file.
    #[arg(long)]
    pub skip_layout: bool,

    /// Generate a TypeScript module regardless of project detection.
    #[arg(long, conflicts_with = "javascript")]
    pub typescript: bool,

    /// Generate a JavaScript module regardless of project detection.
    #[arg(long)]
    pub javascript: bool,

    /// Accept all defaults; never prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_subcommand() {
        let cli = Cli::try_parse_from(["next-metadata"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_init_minimal() {
        let cli = Cli::try_parse_from(["next-metadata", "init"]).unwrap();
        let Some(Command::Init(args)) = cli.command else {
            panic!("Expected Init command");
        };
        assert!(args.site_name.is_none());
        assert!(!args.skip_layout);
        assert!(!args.yes);
    }

    #[test]
    fn parse_init_full() {
        let cli = Cli::try_parse_from([
            "next-metadata",
            "init",
            "--site-name",
            "Acme",
            "--site-url",
            "https://acme.dev",
            "--site-description",
            "Acme site",
            "--skip-layout",
            "--yes",
        ])
        .unwrap();
        let Some(Command::Init(args)) = cli.command else {
            panic!("Expected Init command");
        };
        assert_eq!(args.site_name.as_deref(), Some("Acme"));
        assert_eq!(args.site_url.as_deref(), Some("https://acme.dev"));
        assert_eq!(args.site_description.as_deref(), Some("Acme site"));
        assert!(args.skip_layout);
        assert!(args.yes);
    }

    #[test]
    fn parse_dialect_overrides() {
        let cli = Cli::try_parse_from(["next-metadata", "init", "--typescript"]).unwrap();
        let Some(Command::Init(args)) = cli.command else {
            panic!("Expected Init command");
        };
        assert!(args.typescript);

        let cli = Cli::try_parse_from(["next-metadata", "init", "--javascript"]).unwrap();
        let Some(Command::Init(args)) = cli.command else {
            panic!("Expected Init command");
        };
        assert!(args.javascript);
    }

    #[test]
    fn dialect_overrides_conflict() {
        let result =
            Cli::try_parse_from(["next-metadata", "init", "--typescript", "--javascript"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_template_path() {
        let cli =
            Cli::try_parse_from(["next-metadata", "init", "--template", "custom.js"]).unwrap();
        let Some(Command::Init(args)) = cli.command else {
            panic!("Expected Init command");
        };
        assert_eq!(args.template, Some(PathBuf::from("custom.js")));
    }
}
