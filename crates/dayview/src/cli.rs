use clap::{Parser, Subcommand};
use dayview_layout::LayoutConfig;

use crate::check::{CheckArgs, run_check};
use crate::error::Result;
use crate::layout::{LayoutArgs, run_layout};
use crate::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "dayview",
    about = "Lay out overlapping calendar events into side-by-side columns",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level unless DAYVIEW_LOG says otherwise.
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute column positions for a day of events.
    Layout(LayoutArgs),

    /// Report malformed events and overlap groups.
    Check(CheckArgs),

    /// Print the default layout configuration as TOML.
    Defaults,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Layout(args) => run_layout(args),
        Commands::Check(args) => run_check(args),
        Commands::Defaults => {
            print!("{}", LayoutConfig::default().to_toml_string()?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::tempdir;

    use crate::check::CheckArgs;
    use crate::error::DayviewError;
    use crate::layout::{FormatArg, LayoutArgs, OrderArg, RuleArg};

    use super::{Cli, Commands, run};

    fn layout_args(input: PathBuf) -> LayoutArgs {
        LayoutArgs {
            input,
            config: None,
            total_width: None,
            margin: None,
            column_rule: None,
            order: OrderArg::Layout,
            format: FormatArg::Table,
        }
    }

    #[test]
    fn defaults_command_dispatches_successfully() {
        let result = run(Cli {
            command: Commands::Defaults,
            verbose: false,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn layout_command_dispatches_missing_path_error() {
        let temp = tempdir().expect("tempdir");
        let result = run(Cli {
            command: Commands::Layout(layout_args(temp.path().join("missing.json"))),
            verbose: false,
        });

        let error = result.expect_err("missing input should fail");
        assert!(matches!(error, DayviewError::MissingPath { .. }));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn layout_command_reads_config_file() {
        let temp = tempdir().expect("tempdir");
        let input = temp.path().join("day.json");
        let config = temp.path().join("layout.toml");
        std::fs::write(&input, r#"[{"id": "a", "start": 0, "end": 30}]"#).expect("write");
        std::fs::write(&config, "total_width = 0\n").expect("write");

        let mut args = layout_args(input);
        args.config = Some(config);
        let error = run(Cli {
            command: Commands::Layout(args),
            verbose: false,
        })
        .expect_err("zero width config");
        assert!(matches!(error, DayviewError::Config(_)));
    }

    #[test]
    fn check_command_dispatches_invalid_events_error() {
        let temp = tempdir().expect("tempdir");
        let input = temp.path().join("bad.json");
        std::fs::write(&input, "{ not json").expect("write");

        let error = run(Cli {
            command: Commands::Check(CheckArgs { input, json: true }),
            verbose: false,
        })
        .expect_err("bad json");
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn parses_layout_flags() {
        let cli = Cli::try_parse_from([
            "dayview",
            "-v",
            "layout",
            "--input",
            "-",
            "--total-width",
            "800",
            "--column-rule",
            "highest",
            "--order",
            "start",
            "--format",
            "table",
        ])
        .expect("parse");

        assert!(cli.verbose);
        let Commands::Layout(args) = cli.command else {
            panic!("expected layout command");
        };
        assert_eq!(args.input, PathBuf::from("-"));
        assert_eq!(args.total_width, Some(800));
        assert_eq!(args.margin, None);
        assert_eq!(args.column_rule, Some(RuleArg::Highest));
        assert_eq!(args.order, OrderArg::Start);
        assert_eq!(args.format, FormatArg::Table);
    }

    #[test]
    fn rejects_unknown_rule() {
        let result =
            Cli::try_parse_from(["dayview", "layout", "-i", "day.json", "--column-rule", "widest"]);
        assert!(result.is_err());
    }
}
