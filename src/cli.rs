//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "folio-tui")]
#[command(about = "A personal portfolio page for the terminal")]
#[command(version)]
pub struct Cli {
    /// Portfolio content file (YAML); overrides the config file
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Directory holding config, preferences and the log file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from(["folio-tui", "--content", "me.yaml", "--data-dir", "/tmp/folio", "-v"]);
        assert_eq!(cli.content, Some(PathBuf::from("me.yaml")));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/folio")));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["folio-tui"]);
        assert!(cli.content.is_none());
        assert_eq!(cli.log_level(), "info");
    }
}
