//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::site::{INDEX_FILE, PROJECT_FILE, VANITY_FILE};

/// Command line configuration for go-vanity.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "go-vanity",
    version,
    about = "go-vanity generates vanity assets from templates",
    long_about = "go-vanity generates vanity assets from templates. Templates are usually \
                  simple html files that contain links to repositories."
)]
pub struct Config {
    /// Directory with input files. Must contain index.tmpl, project.tmpl and vanity.yml
    #[arg(short = 'i', long = "in", default_value = ".")]
    pub input: PathBuf,

    /// Directory where output files are generated
    #[arg(short = 'o', long = "out", default_value = "./gen")]
    pub output: PathBuf,

    /// Write starter templates and config into the input directory, then exit
    #[arg(long)]
    pub init: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input directory does not exist or lacks one of
    /// the required input files.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_dir() {
            bail!("Input directory does not exist: {}", self.input.display());
        }

        for name in [INDEX_FILE, PROJECT_FILE, VANITY_FILE] {
            let path = self.input.join(name);
            if !path.is_file() {
                bail!("Template not defined: {}", path.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        // Arrange & Act
        let config = Config::try_parse_from(["go-vanity"]).unwrap();

        // Assert
        assert_eq!(config.input, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("./gen"));
        assert!(!config.init);
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_short_and_long_flags() {
        // Arrange & Act
        let short = Config::try_parse_from(["go-vanity", "-i", "site", "-o", "public"]).unwrap();
        let long = Config::try_parse_from(["go-vanity", "--in", "site", "--out", "public"]).unwrap();

        // Assert
        assert_eq!(short.input, PathBuf::from("site"));
        assert_eq!(short.output, PathBuf::from("public"));
        assert_eq!(long.input, short.input);
        assert_eq!(long.output, short.output);
    }

    #[test]
    fn test_validate_missing_directory() {
        let config = Config {
            input: PathBuf::from("/definitely/not/here"),
            output: PathBuf::from("gen"),
            init: false,
            verbose: false,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_template() {
        // Arrange
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "").unwrap();
        fs::write(dir.path().join(VANITY_FILE), "").unwrap();
        let config = Config {
            input: dir.path().to_path_buf(),
            output: PathBuf::from("gen"),
            init: false,
            verbose: false,
        };

        // Act
        let result = config.validate();

        // Assert
        let err = result.expect_err("Missing project.tmpl should fail");
        assert!(err.to_string().contains(PROJECT_FILE));
    }

    #[test]
    fn test_validate_complete_directory() {
        // Arrange
        let dir = TempDir::new().unwrap();
        for name in [INDEX_FILE, PROJECT_FILE, VANITY_FILE] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let config = Config {
            input: dir.path().to_path_buf(),
            output: PathBuf::from("gen"),
            init: false,
            verbose: false,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "All input files present should be valid");
    }
}
