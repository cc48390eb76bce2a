use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate task durations with PERT three-point estimates
    Estimate {
        /// Comma-separated optimistic durations, one per task
        #[arg(short, long, required_unless_present = "input")]
        optimistic: Option<String>,
        /// Comma-separated most likely durations, one per task
        #[arg(short, long, required_unless_present = "input")]
        most_likely: Option<String>,
        /// Comma-separated pessimistic durations, one per task
        #[arg(short, long, required_unless_present = "input")]
        pessimistic: Option<String>,
        /// Tasks YAML file, instead of the estimate lists
        #[arg(short, long, conflicts_with_all = ["optimistic", "most_likely", "pessimistic"])]
        input: Option<String>,
        /// Print intervals of mean +/- z standard deviations
        #[arg(short, long)]
        z_score: Option<f64>,
        /// Project completion dates from this start date (YYYY-MM-DD)
        #[arg(short, long)]
        start_date: Option<String>,
        /// Write the full report to this file (.json for JSON, YAML otherwise)
        #[arg(long)]
        report: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_accepts_estimate_lists() {
        let args = CliArgs::parse_from([
            "estimate-deadline",
            "estimate",
            "-o",
            "1,3,5",
            "-m",
            "2,5,7",
            "-p",
            "5,10,20",
        ]);

        if let Commands::Estimate {
            optimistic,
            most_likely,
            pessimistic,
            input,
            z_score,
            start_date,
            report,
        } = args.command
        {
            assert_eq!(optimistic.as_deref(), Some("1,3,5"));
            assert_eq!(most_likely.as_deref(), Some("2,5,7"));
            assert_eq!(pessimistic.as_deref(), Some("5,10,20"));
            assert_eq!(input, None);
            assert_eq!(z_score, None);
            assert_eq!(start_date, None);
            assert_eq!(report, None);
        } else {
            panic!("expected estimate command");
        }
    }

    #[test]
    fn estimate_accepts_input_file_with_options() {
        let args = CliArgs::parse_from([
            "estimate-deadline",
            "estimate",
            "-i",
            "tasks.yaml",
            "-z",
            "1.96",
            "-s",
            "2026-02-16",
            "--report",
            "report.json",
        ]);

        if let Commands::Estimate {
            input,
            z_score,
            start_date,
            report,
            ..
        } = args.command
        {
            assert_eq!(input.as_deref(), Some("tasks.yaml"));
            assert_eq!(z_score, Some(1.96));
            assert_eq!(start_date.as_deref(), Some("2026-02-16"));
            assert_eq!(report.as_deref(), Some("report.json"));
        } else {
            panic!("expected estimate command");
        }
    }

    #[test]
    fn estimate_requires_all_lists_without_input() {
        let result = CliArgs::try_parse_from([
            "estimate-deadline",
            "estimate",
            "-o",
            "1,3,5",
            "-m",
            "2,5,7",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn estimate_rejects_lists_together_with_input() {
        let result = CliArgs::try_parse_from([
            "estimate-deadline",
            "estimate",
            "-i",
            "tasks.yaml",
            "-o",
            "1,3,5",
        ]);
        assert!(result.is_err());
    }
}
