use std::process;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use log::{debug, info, warn};

mod config;
mod display;
mod duration;
mod timer;

use config::Settings;
use display::Terminal;
use duration::parse_duration;
use timer::{Countdown, SystemClock};

const EXIT_USAGE: i32 = 2;
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(
    name = "countdown",
    version,
    about = "Count a duration down to zero in the terminal, then ring the bell",
    after_help = "DURATION is a sequence of numbers with units, e.g. 90s, 5m, 1.5h or 2h30m15s.\nValid units are ns, us (µs), ms, s, m and h."
)]
struct Cli {
    /// Time to count down [default: 25m]
    #[arg(value_name = "DURATION", value_parser = parse_duration)]
    duration: Option<Duration>,
}

fn main() {
    let cli = parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::new();
    match serde_json::to_string(&settings) {
        Ok(json) => debug!("settings: {json}"),
        Err(err) => warn!("could not serialize settings: {err}"),
    }
    let total = cli.duration.unwrap_or(settings.default_duration);

    // Ctrl-C ends the process; it never resumes the countdown. Exiting with
    // 130 mirrors the shell status for SIGINT but is a normal exit, so a
    // caller looping on the timer sees a failed run rather than a signal.
    if let Err(err) = ctrlc::set_handler(|| {
        println!();
        info!("interrupted before the countdown finished");
        process::exit(EXIT_INTERRUPTED);
    }) {
        warn!("could not install Ctrl-C handler: {err}");
    }

    Countdown::new(settings, SystemClock, Terminal::stdout()).run(total);
}

/// Parse the command line, exiting with the usage status on bad input or an
/// explicit help request.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => {
                eprint!("{}", err.render());
                process::exit(EXIT_USAGE);
            }
            ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprint!("{}", usage_report(&err));
                process::exit(EXIT_USAGE);
            }
        },
    }
}

/// The parse error followed by the usage line.
fn usage_report(err: &clap::Error) -> String {
    format!("{}\n{}\n", err.render(), Cli::command().render_usage())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_optional() {
        let cli = Cli::try_parse_from(["countdown"]).unwrap();
        assert_eq!(cli.duration, None);
    }

    #[test]
    fn parses_compound_duration() {
        let cli = Cli::try_parse_from(["countdown", "2h30m15s"]).unwrap();
        assert_eq!(cli.duration, Some(Duration::from_secs(9015)));
    }

    #[test]
    fn malformed_duration_is_a_usage_error() {
        let err = Cli::try_parse_from(["countdown", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), EXIT_USAGE);
        assert!(err.to_string().contains(r#"invalid duration "abc""#));
    }

    #[test]
    fn rejected_duration_report_ends_with_usage() {
        let err = Cli::try_parse_from(["countdown", "abc"]).unwrap_err();
        let report = usage_report(&err);
        assert!(report.contains(r#"invalid duration "abc""#), "{report}");
        assert!(report.contains("Usage: countdown"), "{report}");
        assert!(report.trim_end().ends_with("[DURATION]"), "{report}");
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let err = Cli::try_parse_from(["countdown", "1s", "2s"]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
