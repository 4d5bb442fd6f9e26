//! Command-line argument definitions.

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "felt", version, about = "Felt Texas Hold'em table")]
pub struct FeltCli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against automated opponents, reading your actions from stdin
    Play {
        /// Players at the table, including you (2-6)
        #[arg(long)]
        players: Option<usize>,
        /// Hands to play before the session ends
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Opponent policy (baseline, random)
        #[arg(long)]
        ai: Option<String>,
        /// Pause before each opponent action, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Move the blinds one seat every hand
        #[arg(long)]
        rotate_button: bool,
    },
    /// Let automated players play each other and report the stacks
    Sim {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Rank the best five-card hand among 5-7 cards (e.g. `felt rank As Ks Qs Js Ts`)
    Rank {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
