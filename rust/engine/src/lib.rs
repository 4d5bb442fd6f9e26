//! # felt-engine: Texas Hold'em Table Core
//!
//! An in-process no-limit Texas Hold'em table for 2 to 6 players with fixed blinds.
//! The [`engine::Table`] owns all round state; drivers submit actions and read
//! [`events::TableSnapshot`]s, never mutating state directly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Fisher–Yates shuffling over an injected random source
//! - [`hand`] - Five-card classification and total ordering of results
//! - [`select`] - Best five of up to seven cards
//! - [`rules`] - Pure betting validation
//! - [`engine`] - The table state machine
//! - [`showdown`] - Pot resolution and tie splitting
//! - [`events`] - Snapshots and their subscription bus
//! - [`game`] - Streets, table configuration, blind positions
//! - [`player`] - Seats and the actions they submit
//! - [`history`] - Actions of the hand in progress
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::cards::parse_cards;
//! use felt_engine::hand::Category;
//! use felt_engine::select::best_hand;
//!
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
//! let best = best_hand(&hole, &board).unwrap();
//! assert_eq!(best.category, Category::RoyalFlush);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use felt_engine::engine::{DealOutcome, Table};
//! use felt_engine::game::{Street, TableConfig};
//! use felt_engine::player::Action;
//!
//! let mut table = Table::new(TableConfig::with_players(2), Some(42)).unwrap();
//! assert_eq!(table.deal_new_hand().unwrap(), DealOutcome::Dealt);
//!
//! // heads-up the small blind opens
//! table.apply_action(0, Action::Call).unwrap();
//! table.apply_action(1, Action::Check).unwrap();
//! assert_eq!(table.street(), Street::Flop);
//! assert_eq!(table.pot(), 40);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod rules;
pub mod select;
pub mod showdown;
