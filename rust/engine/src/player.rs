use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// An action submitted by the acting player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed this street)
    Check,
    /// Match the street's highest bet, or as much of it as the stack allows
    Call,
    /// Put `amount` more chips in this street. Also used to raise.
    Bet(u32),
    /// Bet the whole remaining stack
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1000;

/// Name given to the user-controlled seat.
pub const USER_NAME: &str = "You";

/// A seat at the table. The stack carries over between hands; every other field is reset
/// when a new hand is dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    name: String,
    stack: u32,
    hand: Vec<Card>,
    has_folded: bool,
    is_all_in: bool,
    has_acted: bool,
    bet_this_street: u32,
    user_controlled: bool,
    reveal_hand: bool,
    /// Busted (no chips) when the hand was dealt; holds no cards and never acts.
    sitting_out: bool,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, stack: u32, user_controlled: bool) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            hand: Vec::with_capacity(2),
            has_folded: false,
            is_all_in: false,
            has_acted: false,
            bet_this_street: 0,
            user_controlled,
            reveal_hand: false,
            sitting_out: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn bet_this_street(&self) -> u32 {
        self.bet_this_street
    }
    pub fn is_user_controlled(&self) -> bool {
        self.user_controlled
    }
    pub fn reveal_hand(&self) -> bool {
        self.reveal_hand
    }
    pub fn is_sitting_out(&self) -> bool {
        self.sitting_out
    }

    /// Still contesting the pot.
    pub fn in_hand(&self) -> bool {
        !self.has_folded && !self.sitting_out
    }

    /// Still able to take betting actions this hand.
    pub fn can_act(&self) -> bool {
        self.in_hand() && !self.is_all_in
    }

    /// Clears per-hand state. A player without chips is marked as sitting out and folded.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hand.clear();
        self.is_all_in = false;
        self.has_acted = false;
        self.bet_this_street = 0;
        // the user's own visibility choice survives between hands
        if !self.user_controlled {
            self.reveal_hand = false;
        }
        self.sitting_out = self.stack == 0;
        self.has_folded = self.sitting_out;
    }

    pub(crate) fn give_cards(&mut self, cards: &[Card]) {
        self.hand.extend_from_slice(cards);
    }

    /// Moves `amount` from the stack into this street's bet. Callers validate the amount.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.bet_this_street += paid;
        if self.stack == 0 {
            self.is_all_in = true;
        }
        paid
    }

    pub(crate) fn fold(&mut self) {
        self.has_folded = true;
    }

    pub(crate) fn mark_acted(&mut self, acted: bool) {
        self.has_acted = acted;
    }

    /// Returns this street's bet and clears it.
    pub(crate) fn take_street_bet(&mut self) -> u32 {
        std::mem::take(&mut self.bet_this_street)
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub(crate) fn set_reveal(&mut self, visible: bool) {
        self.reveal_hand = visible;
    }
}
