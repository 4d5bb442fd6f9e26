use thiserror::Error;

use crate::game::Street;

/// Why an action was refused. A refused action never changes table state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("no betting round in progress (street: {street:?})")]
    NoBettingRound { street: Street },
    #[error("unknown player {player_id}")]
    UnknownPlayer { player_id: usize },
    #[error("it's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("player {player_id} cannot act again this hand")]
    PlayerInactive { player_id: usize },
    #[error("cannot check facing a bet, {to_call} to call")]
    CheckWhenBehind { to_call: u32 },
    #[error("bet amount must be positive")]
    NonPositiveAmount,
    #[error("bet amount {amount} must be a multiple of {increment}")]
    WrongIncrement { amount: u32, increment: u32 },
    #[error("bet amount {amount} is below the minimum of {minimum}")]
    BelowMinimum { amount: u32, minimum: u32 },
    #[error("bet amount {amount} exceeds stack of {stack}")]
    InsufficientStack { amount: u32, stack: u32 },
    #[error("scheduled turn is stale")]
    StaleTurn,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("deck exhausted: requested {requested} cards, {remaining} remaining")]
    ExhaustedDeck { requested: usize, remaining: usize },
    #[error("need at least 5 cards to form a hand, got {available}")]
    IncompleteHand { available: usize },
    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),
}
