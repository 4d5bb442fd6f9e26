//! Coin-flip opponent.
//!
//! Facing a bet it folds one time in five (unless the call would put it all-in) and
//! calls otherwise. With nothing to call it bets 20, 25 or 30 one time in five and
//! checks otherwise.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use felt_engine::events::TableSnapshot;
use felt_engine::player::Action;

use crate::{facing, Opponent};

const FOLD_CHANCE: f64 = 0.2;
const BET_CHANCE: f64 = 0.2;
const BASE_BET: u32 = 20;
const BET_STEP: u32 = 5;

#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    /// Seeded from entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomAI {
    fn decide(&mut self, snapshot: &TableSnapshot, player_id: usize) -> Action {
        let Some((to_call, stack)) = facing(snapshot, player_id) else {
            return Action::Fold;
        };
        let roll: f64 = self.rng.random();

        if to_call > 0 {
            if roll < FOLD_CHANCE && stack > to_call {
                Action::Fold
            } else {
                Action::Call
            }
        } else if roll > 1.0 - BET_CHANCE && stack > 0 {
            let steps: u32 = self.rng.random_range(0..3);
            let amount = BASE_BET + steps * BET_STEP;
            if amount >= stack {
                Action::AllIn
            } else {
                Action::Bet(amount)
            }
        } else {
            Action::Check
        }
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
