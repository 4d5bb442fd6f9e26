//! Command handlers.
//!
//! Each subcommand lives in its own module and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>` taking its output streams
//! as `&mut dyn Write`. Helpers shared by the table-driving commands (`play`, `sim`) live
//! here.

mod cfg;
mod play;
mod rank;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;

use felt_ai::{Opponent, create_ai};
use felt_engine::engine::{Table, TurnTicket};
use felt_engine::player::Action;

use crate::config::{self, Config};
use crate::error::CliError;

/// Command-line flags that take precedence over the resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
    pub delay_ms: Option<u64>,
    pub rotate_button: bool,
}

pub(crate) fn session_config(overrides: &SessionOverrides) -> Result<Config, CliError> {
    let mut cfg = config::load_with_sources()?.config;
    if let Some(players) = overrides.players {
        cfg.players = players;
    }
    if let Some(seed) = overrides.seed {
        cfg.seed = Some(seed);
    }
    if let Some(ai) = &overrides.ai {
        cfg.ai = ai.clone();
    }
    if let Some(delay) = overrides.delay_ms {
        cfg.ai_delay_ms = delay;
    }
    if overrides.rotate_button {
        cfg.rotate_button = true;
    }
    config::validate(&cfg)?;
    Ok(cfg)
}

/// One policy per seat; `None` for the user's seat. Randomized policies get a per-seat
/// seed derived from the session seed.
pub(crate) fn seat_opponents(
    cfg: &Config,
    user_seat: Option<usize>,
) -> Result<Vec<Option<Box<dyn Opponent>>>, CliError> {
    (0..cfg.players)
        .map(|seat| {
            if user_seat == Some(seat) {
                return Ok(None);
            }
            let seed = cfg.seed.map(|s| s.wrapping_add(seat as u64 + 1));
            create_ai(&cfg.ai, seed)
                .map(Some)
                .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))
        })
        .collect()
}

/// Lets the seat named by `ticket` act. A refused decision is replaced by a call, which is
/// always legal for a seat that can act.
pub(crate) fn take_automated_turn(
    table: &mut Table,
    opponents: &mut [Option<Box<dyn Opponent>>],
    ticket: TurnTicket,
) -> Result<(), CliError> {
    let snapshot = table.snapshot();
    let action = match opponents.get_mut(ticket.player_id) {
        Some(Some(ai)) => ai.decide(&snapshot, ticket.player_id),
        _ => Action::Call,
    };
    if let Err(e) = table.apply_automated(ticket, action) {
        tracing::warn!(player_id = ticket.player_id, ?action, error = %e, "automated action refused, calling instead");
        table.apply_automated(ticket, Action::Call)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::game::TableConfig;

    #[test]
    fn user_seat_has_no_policy() {
        let cfg = Config {
            players: 3,
            seed: Some(1),
            ..Config::default()
        };
        let seats = seat_opponents(&cfg, Some(0)).unwrap();
        assert!(seats[0].is_none());
        assert!(seats[1..].iter().all(Option::is_some));
        assert_eq!(seat_opponents(&cfg, None).unwrap().len(), 3);
    }

    #[test]
    fn automated_turns_finish_a_hand() {
        let cfg = Config {
            players: 3,
            seed: Some(8),
            ..Config::default()
        };
        let table_config = TableConfig {
            user_seat: None,
            ..TableConfig::with_players(3)
        };
        let mut table = Table::new(table_config, cfg.seed).unwrap();
        let mut seats = seat_opponents(&cfg, None).unwrap();
        table.deal_new_hand().unwrap();
        while let Some(ticket) = table.automated_turn() {
            take_automated_turn(&mut table, &mut seats, ticket).unwrap();
        }
        assert!(!table.street().is_betting());
        assert_eq!(table.total_chips(), 3000);
    }
}
