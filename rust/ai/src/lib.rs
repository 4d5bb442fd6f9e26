//! # felt-ai: Automated Opponents
//!
//! Policies for the seats a human isn't driving. A policy only ever sees a read-only
//! [`TableSnapshot`] and answers with an [`Action`]; the table validates and applies it.
//!
//! ## Core Components
//!
//! - [`Opponent`] - Trait every policy implements
//! - [`random`] - Coin-flip opponent that folds, calls, or makes small bets
//! - [`baseline`] - Deterministic hand-strength heuristic
//! - [`create_ai`] - Factory resolving a policy by name
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::create_ai;
//! use felt_engine::engine::Table;
//! use felt_engine::game::TableConfig;
//!
//! let config = TableConfig { user_seat: None, ..TableConfig::with_players(3) };
//! let mut table = Table::new(config, Some(42)).unwrap();
//! table.deal_new_hand().unwrap();
//!
//! let mut ai = create_ai("baseline", Some(7)).expect("known policy");
//! let ticket = table.automated_turn().expect("automated seat to act");
//! let action = ai.decide(&table.snapshot(), ticket.player_id);
//! table.apply_automated(ticket, action).unwrap();
//! ```

use felt_engine::events::TableSnapshot;
use felt_engine::player::Action;

pub mod baseline;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 2] = ["baseline", "random"];

/// A decision policy for an automated seat.
///
/// `decide` must return an action that is legal for `player_id` in `snapshot`; the table
/// still validates it, and drivers fall back to [`Action::Call`] if it is refused.
pub trait Opponent: Send {
    fn decide(&mut self, snapshot: &TableSnapshot, player_id: usize) -> Action;

    fn name(&self) -> &str;
}

/// Builds a policy by name. `seed` fixes the random source of randomized policies.
///
/// ```rust
/// use felt_ai::create_ai;
///
/// assert_eq!(create_ai("random", Some(1)).unwrap().name(), "RandomAI");
/// assert!(create_ai("shark", None).is_none());
/// ```
pub fn create_ai(name: &str, seed: Option<u64>) -> Option<Box<dyn Opponent>> {
    match name.to_ascii_lowercase().as_str() {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "random" => Some(Box::new(random::RandomAI::new(seed))),
        _ => None,
    }
}

/// Chips owed by `player_id` and their stack, or `None` if the seat is unknown.
pub(crate) fn facing(snapshot: &TableSnapshot, player_id: usize) -> Option<(u32, u32)> {
    let player = snapshot.player(player_id)?;
    Some((snapshot.to_call(player_id), player.stack()))
}

/// Turns a desired chip amount into a legal action: rounded down to the increment, at
/// least the call, and an all-in once it reaches the stack.
pub(crate) fn sized_bet(chips: u32, to_call: u32, stack: u32, increment: u32) -> Action {
    let increment = increment.max(1);
    let rounded = chips - chips % increment;
    if rounded >= stack {
        Action::AllIn
    } else if rounded <= to_call || rounded == 0 {
        if to_call == 0 { Action::Check } else { Action::Call }
    } else {
        Action::Bet(rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_bet_stays_legal() {
        assert_eq!(sized_bet(37, 0, 1000, 5), Action::Bet(35));
        assert_eq!(sized_bet(3, 0, 1000, 5), Action::Check);
        assert_eq!(sized_bet(30, 40, 1000, 5), Action::Call);
        assert_eq!(sized_bet(500, 40, 300, 5), Action::AllIn);
    }

    #[test]
    fn factory_is_case_insensitive() {
        assert_eq!(create_ai("Baseline", None).unwrap().name(), "BaselineAI");
        for name in AI_NAMES {
            assert!(create_ai(name, Some(0)).is_some());
        }
    }
}
