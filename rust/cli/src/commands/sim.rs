//! `felt sim`: every seat automated, hands played back to back.
//!
//! After each hand the total of pot, stacks and street bets is compared with the chips
//! the table started with; any difference aborts the run.

use std::io::Write;

use felt_engine::engine::{DealOutcome, Table};
use felt_engine::game::TableConfig;

use super::{SessionOverrides, seat_opponents, session_config, take_automated_turn};
use crate::error::CliError;
use crate::formatters::format_winners;

pub const DEFAULT_SIM_HANDS: u32 = 100;

pub fn handle_sim_command(
    overrides: &SessionOverrides,
    hands: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = session_config(overrides)?;
    let hands = hands.unwrap_or(DEFAULT_SIM_HANDS);
    let table_config = TableConfig {
        user_seat: None,
        rotate_button: cfg.rotate_button,
        ..TableConfig::with_players(cfg.players)
    };
    let mut table = Table::new(table_config, cfg.seed)?;
    let mut seats = seat_opponents(&cfg, None)?;
    let expected = table.total_chips();

    writeln!(
        out,
        "Simulating {} hands: {} players, ai={}",
        hands, cfg.players, cfg.ai
    )?;

    let mut played = 0;
    for _ in 0..hands {
        if table.deal_new_hand()? == DealOutcome::GameOver {
            break;
        }
        played += 1;
        while let Some(ticket) = table.automated_turn() {
            take_automated_turn(&mut table, &mut seats, ticket)?;
        }

        let actual = table.total_chips();
        if actual != expected {
            return Err(CliError::Invariant(format!(
                "hand {} ended with {} chips in play, expected {}",
                table.hand_number(),
                actual,
                expected
            )));
        }
        let snapshot = table.snapshot();
        writeln!(out, "Hand {}: {}", snapshot.hand_number, format_winners(&snapshot).replace('\n', "; "))?;
    }

    if table.is_game_over() {
        writeln!(out, "Game over after {} hands", played)?;
    }
    writeln!(out, "Final stacks:")?;
    for p in table.players() {
        writeln!(out, "  {:<9} {:>6}", p.name(), p.stack())?;
    }
    tracing::info!(hands = played, "simulation finished");
    Ok(())
}
