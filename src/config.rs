/*!
 * Configuration handling for dumpmd
 */

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::Result;
use crate::utils::default_output_path;
use crate::{bail, ensure};

/// Command-line arguments for dumpmd
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dumpmd",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a Markdown snapshot of directory contents for LLM context",
    long_about = "Walks a directory tree and writes every non-ignored file into a single Markdown document, with placeholders for binary and context-only files."
)]
pub struct Args {
    /// Directory to process
    pub input_path: String,

    /// Output Markdown file (default: ~/Downloads/<input path>.md)
    pub output_path: Option<String>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to process
    pub target_dir: PathBuf,

    /// Output Markdown file path
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments, resolving the default
    /// output location under the home directory
    pub fn from_args(args: Args) -> Result<Self> {
        let output_file = match args.output_path {
            Some(path) => PathBuf::from(path),
            None => match dirs::home_dir() {
                Some(home) => default_output_path(&home, &args.input_path),
                None => bail!(Config, "Could not determine the home directory for the default output path"),
            },
        };

        Ok(Self::new(&args.input_path, output_file))
    }

    /// Create configuration from explicit paths
    pub fn new(target_dir: impl AsRef<Path>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.as_ref().to_path_buf(),
            output_file: output_file.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            let shown = std::path::absolute(&self.target_dir).unwrap_or_else(|_| self.target_dir.clone());
            bail!(PathNotFound, "{}", shown.display());
        }

        ensure!(
            self.target_dir.is_dir(),
            Config,
            "Target is not a directory: {}",
            self.target_dir.display()
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.exists(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DumpMdError;

    #[test]
    fn explicit_output_path_is_kept() {
        let args = Args {
            input_path: "project".to_string(),
            output_path: Some("out/context.md".to_string()),
        };
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.target_dir, PathBuf::from("project"));
        assert_eq!(config.output_file, PathBuf::from("out/context.md"));
    }

    #[test]
    fn missing_target_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("nope"), dir.path().join("out.md"));
        assert!(matches!(config.validate(), Err(DumpMdError::PathNotFound(_))));
    }

    #[test]
    fn file_target_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let config = Config::new(&file, dir.path().join("out.md"));
        assert!(matches!(config.validate(), Err(DumpMdError::Config(_))));
    }

    #[test]
    fn missing_output_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path(), dir.path().join("missing").join("out.md"));
        assert!(matches!(config.validate(), Err(DumpMdError::Config(_))));
    }

    #[test]
    fn bare_output_name_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path(), "out.md");
        assert!(config.validate().is_ok());
    }
}
