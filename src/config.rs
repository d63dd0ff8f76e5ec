//! # Configuration Logic
//!
//! ## Role
//! CLI argument parsing and validation.
//!
//! ## Example CLI
//! ```bash
//! genval --geno dosages.tsv.gz --effects effects.tsv --out gv.tsv --nthreads 8
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::data::storage::DEFAULT_PLOIDY;
use crate::error::{GenvalError, Result};

/// Genetic values from marker dosages and additive/dominance effects
#[derive(Parser, Debug, Clone)]
#[command(name = "genval", version, about)]
pub struct Config {
    /// Dosage table (individuals x markers), optionally gzipped
    #[arg(long)]
    pub geno: PathBuf,

    /// Effects table: marker, additive[, dominance]
    #[arg(long)]
    pub effects: PathBuf,

    /// Output table of genetic values
    #[arg(long)]
    pub out: PathBuf,

    /// Value added to every individual
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub intercept: f64,

    /// Ploidy; dosages must lie in 0..=ploidy
    #[arg(long, default_value_t = DEFAULT_PLOIDY)]
    pub ploidy: u8,

    /// Ignore the dominance column of the effects table
    #[arg(long)]
    pub additive_only: bool,

    /// Number of worker threads (default: all cores)
    #[arg(long)]
    pub nthreads: Option<usize>,

    /// Print span timings to stderr
    #[arg(long)]
    pub profile: bool,
}

impl Config {
    /// Parse command line arguments and validate them
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check argument values and that input files exist
    pub fn validate(&self) -> Result<()> {
        if self.ploidy == 0 {
            return Err(GenvalError::config("--ploidy must be at least 1"));
        }
        if self.nthreads == Some(0) {
            return Err(GenvalError::config("--nthreads must be at least 1"));
        }
        if !self.intercept.is_finite() {
            return Err(GenvalError::config("--intercept must be finite"));
        }
        for path in [&self.geno, &self.effects] {
            if !path.exists() {
                return Err(GenvalError::config(format!(
                    "input file not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Number of threads to use
    pub fn nthreads(&self) -> usize {
        self.nthreads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn parse(extra: &[&str], geno: &NamedTempFile, effects: &NamedTempFile) -> Config {
        let mut args = vec![
            "genval".to_string(),
            "--geno".to_string(),
            geno.path().display().to_string(),
            "--effects".to_string(),
            effects.path().display().to_string(),
            "--out".to_string(),
            "gv.tsv".to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Config::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let geno = NamedTempFile::new().unwrap();
        let effects = NamedTempFile::new().unwrap();
        let config = parse(&[], &geno, &effects);

        assert_eq!(config.ploidy, 2);
        assert_eq!(config.intercept, 0.0);
        assert!(!config.additive_only);
        assert!(config.nthreads() >= 1);
        config.validate().unwrap();
    }

    #[test]
    fn test_explicit_values() {
        let geno = NamedTempFile::new().unwrap();
        let effects = NamedTempFile::new().unwrap();
        let config = parse(
            &["--intercept", "-2.5", "--ploidy", "4", "--nthreads", "3", "--additive-only"],
            &geno,
            &effects,
        );

        assert_eq!(config.intercept, -2.5);
        assert_eq!(config.ploidy, 4);
        assert_eq!(config.nthreads(), 3);
        assert!(config.additive_only);
    }

    #[test]
    fn test_invalid_values() {
        let geno = NamedTempFile::new().unwrap();
        let effects = NamedTempFile::new().unwrap();

        let config = parse(&["--nthreads", "0"], &geno, &effects);
        assert!(matches!(config.validate(), Err(GenvalError::Config { .. })));

        let config = parse(&["--ploidy", "0"], &geno, &effects);
        assert!(matches!(config.validate(), Err(GenvalError::Config { .. })));
    }

    #[test]
    fn test_missing_input() {
        let geno = NamedTempFile::new().unwrap();
        let effects = NamedTempFile::new().unwrap();
        let mut config = parse(&[], &geno, &effects);
        config.geno = PathBuf::from("/nonexistent/dosages.tsv");
        assert!(matches!(config.validate(), Err(GenvalError::Config { .. })));
    }
}
