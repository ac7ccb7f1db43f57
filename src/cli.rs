use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    Dashboard,
    Company,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "loandash",
    version,
    about = "Terminal dashboard for loan simulations",
    long_about = "loandash renders the charts and amortization table of a pre-computed loan simulation and hosts the add-company form.\n\nExamples:\n  loandash --summary simulation.json\n  loandash --summary simulation.json --income 8500\n  loandash --screen company"
)]
pub struct CliArgs {
    #[arg(
        short = 's',
        long = "summary",
        value_name = "FILE",
        help_heading = "Input",
        help = "JSON summary produced by the simulation server."
    )]
    pub summary: Option<PathBuf>,

    #[arg(
        long = "screen",
        value_enum,
        default_value = "dashboard",
        help_heading = "Input",
        help = "Screen shown at start-up."
    )]
    pub screen: StartScreen,

    #[arg(
        short = 'i',
        long = "income",
        value_name = "AMOUNT",
        help_heading = "Input",
        help = "Prefill the monthly income field."
    )]
    pub income: Option<String>,

    #[arg(
        long = "commitment-threshold",
        value_name = "PCT",
        default_value_t = 30.0,
        help_heading = "Dashboard",
        help = "Income commitment percentage above which the chart turns red."
    )]
    pub commitment_threshold: f64,

    #[arg(
        long = "rows-per-page",
        value_name = "N",
        default_value_t = 10,
        help_heading = "Dashboard",
        help = "Rows shown per page of the amortization table."
    )]
    pub rows_per_page: usize,

    #[arg(
        long = "log-file",
        value_name = "FILE",
        default_value = "loandash.log",
        help_heading = "Output",
        help = "File receiving log output (the terminal is used by the UI)."
    )]
    pub log_file: PathBuf,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_policy() {
        let args = CliArgs::parse_from(["loandash"]);
        assert_eq!(args.screen, StartScreen::Dashboard);
        assert_eq!(args.commitment_threshold, 30.0);
        assert_eq!(args.rows_per_page, 10);
        assert!(args.summary.is_none());
    }

    #[test]
    fn parses_summary_and_screen() {
        let args = CliArgs::parse_from([
            "loandash",
            "--summary",
            "sim.json",
            "--screen",
            "company",
            "-vv",
        ]);
        assert_eq!(args.summary, Some(PathBuf::from("sim.json")));
        assert_eq!(args.screen, StartScreen::Company);
        assert_eq!(args.verbose, 2);
    }
}
