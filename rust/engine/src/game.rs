use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_STACK;

pub const SMALL_BLIND: u32 = 10;
pub const BIG_BLIND: u32 = 20;
/// Smallest chip unit a bet may be sized in.
pub const MIN_INCREMENT: u32 = 5;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Phase of the table. PreFlop through River are betting streets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    Setup,
    Dealing,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    pub fn is_betting(self) -> bool {
        matches!(
            self,
            Street::PreFlop | Street::Flop | Street::Turn | Street::River
        )
    }

    /// Next betting street and the number of community cards it deals.
    /// `None` once the river betting is over.
    pub fn next_betting(self) -> Option<(Street, usize)> {
        match self {
            Street::PreFlop => Some((Street::Flop, 3)),
            Street::Flop => Some((Street::Turn, 1)),
            Street::Turn => Some((Street::River, 1)),
            _ => None,
        }
    }
}

/// Engine-level table parameters. These are fixed for a session, never negotiated per hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub player_count: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub min_increment: u32,
    /// Seat driven by a human; every other seat is automated.
    pub user_seat: Option<usize>,
    /// Advance the blinds one dealt seat per hand.
    pub rotate_button: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            min_increment: MIN_INCREMENT,
            user_seat: Some(0),
            rotate_button: false,
        }
    }
}

impl TableConfig {
    pub fn with_players(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.player_count
            )));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting stack must be positive".into(),
            ));
        }
        if self.small_blind == 0 || self.small_blind > self.big_blind {
            return Err(GameError::InvalidConfig(format!(
                "blinds must satisfy 0 < small ({}) <= big ({})",
                self.small_blind, self.big_blind
            )));
        }
        if self.min_increment == 0 {
            return Err(GameError::InvalidConfig(
                "minimum bet increment must be positive".into(),
            ));
        }
        if let Some(seat) = self.user_seat {
            if seat >= self.player_count {
                return Err(GameError::InvalidConfig(format!(
                    "user seat {} is outside a {}-player table",
                    seat, self.player_count
                )));
            }
        }
        Ok(())
    }
}

/// Blind and first-to-act positions for one hand, as indices into the seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seating {
    pub small_blind: usize,
    pub big_blind: usize,
    pub first_preflop: usize,
    /// First seat considered when a post-flop street opens.
    pub first_postflop: usize,
}

impl Seating {
    /// `dealt` lists the seat indices receiving cards, in seating order. The small blind
    /// is the first dealt seat after `previous_small_blind`, wrapping; with no previous
    /// small blind it is the first dealt seat.
    ///
    /// Heads-up the small blind acts first pre-flop, otherwise the seat after the big blind.
    pub fn for_hand(dealt: &[usize], previous_small_blind: Option<usize>) -> Option<Self> {
        let n = dealt.len();
        if n < MIN_PLAYERS {
            return None;
        }
        let start = previous_small_blind
            .and_then(|prev| dealt.iter().position(|&seat| seat > prev))
            .unwrap_or(0);
        let at = |offset: usize| dealt[(start + offset) % n];
        let first_preflop = if n == 2 { at(0) } else { at(2) };
        Some(Self {
            small_blind: at(0),
            big_blind: at(1),
            first_preflop,
            first_postflop: at(0),
        })
    }
}
