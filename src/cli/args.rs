//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// portfolio-term: the levkany.com terminal, in your terminal.
///
/// Starts an interactive session unless `--exec` is given.
#[derive(Parser, Debug)]
#[command(name = "portfolio-term")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file.
    ///
    /// Defaults to `portfolio-term/config.toml` in the platform config directory.
    #[arg(short, long, env = "PORTFOLIO_TERM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Process this input and exit. May be repeated.
    #[arg(short, long = "exec", value_name = "INPUT")]
    pub exec: Vec<String>,

    /// Print responses of `--exec` inputs as JSON lines.
    #[arg(long, requires = "exec")]
    pub json: bool,

    /// Log links and downloads instead of performing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exec_inputs() {
        let cli = Cli::try_parse_from([
            "portfolio-term",
            "-e",
            "projects",
            "--exec",
            "open project 1",
            "--json",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.exec, vec!["projects", "open project 1"]);
        assert!(cli.json);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_json_requires_exec() {
        let result = Cli::try_parse_from(["portfolio-term", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["portfolio-term"]).unwrap();
        assert!(cli.exec.is_empty());
        assert!(!cli.verbose);
    }
}
