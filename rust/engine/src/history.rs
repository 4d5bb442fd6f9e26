use serde::{Deserialize, Serialize};

use crate::game::Street;
use crate::rules::ValidatedAction;

/// What a player did, with chips resolved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RecordedAction {
    SmallBlind(u32),
    BigBlind(u32),
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    AllIn(u32),
}

impl From<&ValidatedAction> for RecordedAction {
    fn from(v: &ValidatedAction) -> Self {
        match *v {
            ValidatedAction::Fold => RecordedAction::Fold,
            ValidatedAction::Check => RecordedAction::Check,
            ValidatedAction::Call(n) => RecordedAction::Call(n),
            ValidatedAction::Bet(n) => RecordedAction::Bet(n),
            ValidatedAction::AllIn(n) => RecordedAction::AllIn(n),
        }
    }
}

/// Records a single action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub hand_number: u64,
    pub player_id: usize,
    pub street: Street,
    pub action: RecordedAction,
}

/// Actions of the hand in progress, oldest first. Cleared on every deal.
#[derive(Debug, Clone, Default)]
pub struct HandHistory {
    records: Vec<ActionRecord>,
}

impl HandHistory {
    pub fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&ActionRecord> {
        self.records.last()
    }
}
