//! # Felt CLI Library
//!
//! Terminal driver for the Felt Hold'em table. The library exposes [`run`], which parses
//! command-line arguments and executes a subcommand against caller-supplied streams.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["felt", "rank", "As", "Ks", "Qs", "Js", "Ts"];
//! let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against automated opponents, actions read from stdin
//! - `sim`: Let automated players play each other and check chip conservation
//! - `rank`: Rank the best five-card hand among 5 to 7 cards
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, FeltCli};
use commands::{
    SessionOverrides, handle_cfg_command, handle_play_command, handle_rank_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "rank", "cfg"];

/// Main entry point. `play` reads the process's stdin; see [`run_with_input`] to supply
/// another reader.
///
/// Returns the exit code: `0` on success, `2` on errors, `130` when input closes
/// mid-session.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FeltCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };
    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            players,
            hands,
            seed,
            ai,
            delay_ms,
            rotate_button,
        } => {
            let overrides = SessionOverrides {
                players,
                seed,
                ai,
                delay_ms,
                rotate_button,
            };
            handle_play_command(&overrides, hands, out, err, stdin)
        }
        Commands::Sim {
            players,
            hands,
            seed,
            ai,
        } => {
            let overrides = SessionOverrides {
                players,
                seed,
                ai,
                ..SessionOverrides::default()
            };
            handle_sim_command(&overrides, hands, out)
        }
        Commands::Rank { cards } => handle_rank_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    if let Err(e) = &result {
        if ui::write_error(err, &e.to_string()).is_err() {
            return exit_code::ERROR;
        }
    }
    exit_code::for_result(&result)
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let written = (|| -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err)?;
        writeln!(err, "Felt Hold'em CLI")?;
        writeln!(err, "Usage: felt <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: felt --help")
    })();
    if written.is_err() {
        tracing::debug!("could not write usage to stderr");
    }
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = [
            vec!["felt", "cfg"],
            vec!["felt", "play", "--players", "3", "--delay-ms", "0", "--rotate-button"],
            vec!["felt", "sim", "--hands", "5", "--ai", "baseline"],
            vec!["felt", "-vv", "rank", "As", "Ks", "Qs", "Js", "Ts"],
        ];
        for args in commands {
            assert!(FeltCli::try_parse_from(&args).is_ok(), "failed to parse {:?}", args);
        }
    }

    #[test]
    fn verbosity_counts_flags() {
        let cli = FeltCli::try_parse_from(["felt", "-vv", "cfg"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.cmd, Commands::Cfg));
    }

    #[test]
    fn unknown_command_prints_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["felt", "deal"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("Usage: felt <command>"));
        assert!(err.contains("  sim"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(run(["felt", "--help"], &mut out, &mut err), exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("rank"));
        assert!(err.is_empty());
    }
}
