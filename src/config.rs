use std::path::PathBuf;

use crate::cli::{CliArgs, StartScreen};
use crate::error::ConfigError;

/// Share of the monthly income the first installment may take before the
/// commitment chart is flagged.
pub const DEFAULT_COMMITMENT_THRESHOLD: f64 = 0.30;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

pub const PDF_STUB_MESSAGE: &str = "Funcionalidade de Gerar Relatório PDF em desenvolvimento!";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub summary: Option<PathBuf>,
    pub start_screen: StartScreen,
    pub income: String,
    /// Fraction in (0, 1].
    pub commitment_threshold: f64,
    pub rows_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary: None,
            start_screen: StartScreen::Dashboard,
            income: String::new(),
            commitment_threshold: DEFAULT_COMMITMENT_THRESHOLD,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Config {
    pub fn from_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let pct = args.commitment_threshold;
        if !pct.is_finite() || pct <= 0.0 || pct > 100.0 {
            return Err(ConfigError::ThresholdOutOfRange { value: pct });
        }
        if args.rows_per_page == 0 {
            return Err(ConfigError::ZeroRowsPerPage);
        }

        let income = match &args.income {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.parse::<f64>().is_err() {
                    return Err(ConfigError::InvalidIncome {
                        value: raw.clone(),
                    });
                }
                trimmed.to_string()
            }
            None => String::new(),
        };

        Ok(Self {
            summary: args.summary.clone(),
            start_screen: args.screen,
            income,
            commitment_threshold: pct / 100.0,
            rows_per_page: args.rows_per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["loandash"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn threshold_is_stored_as_fraction() {
        let config = Config::from_args(&args(&["--commitment-threshold", "35"])).unwrap();
        assert!((config.commitment_threshold - 0.35).abs() < 1e-12);
    }

    #[test]
    fn default_args_match_default_config() {
        let config = Config::from_args(&args(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        assert_eq!(
            Config::from_args(&args(&["--commitment-threshold", "0"])),
            Err(ConfigError::ThresholdOutOfRange { value: 0.0 })
        );
        assert!(Config::from_args(&args(&["--commitment-threshold", "150"])).is_err());
    }

    #[test]
    fn rejects_zero_rows_per_page() {
        assert_eq!(
            Config::from_args(&args(&["--rows-per-page", "0"])),
            Err(ConfigError::ZeroRowsPerPage)
        );
    }

    #[test]
    fn rejects_non_numeric_income() {
        assert!(Config::from_args(&args(&["--income", "muito"])).is_err());
        let config = Config::from_args(&args(&["--income", " 4500.50 "])).unwrap();
        assert_eq!(config.income, "4500.50");
    }
}
