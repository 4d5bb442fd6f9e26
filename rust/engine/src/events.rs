use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::cards::Card;
use crate::game::Street;
use crate::history::ActionRecord;
use crate::player::Player;
use crate::showdown::WinnerInfo;

// Per-subscriber buffer. A subscriber that falls this far behind misses snapshots
// until it drains.
const SNAPSHOT_CHANNEL_BUFFER: usize = 256;

/// Read-only copy of the table, emitted after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hand_number: u64,
    pub players: Vec<Player>,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub street: Street,
    pub acting_player: Option<usize>,
    pub highest_bet: u32,
    pub min_increment: u32,
    pub big_blind: u32,
    pub can_user_act: bool,
    pub is_dealing: bool,
    pub game_over: bool,
    pub winners: Vec<WinnerInfo>,
    pub last_action: Option<ActionRecord>,
}

impl TableSnapshot {
    pub fn player(&self, player_id: usize) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    pub fn acting(&self) -> Option<&Player> {
        self.acting_player.and_then(|id| self.player(id))
    }

    pub fn to_call(&self, player_id: usize) -> u32 {
        self.player(player_id)
            .map(|p| self.highest_bet.saturating_sub(p.bet_this_street()))
            .unwrap_or(0)
    }

    /// Pot plus every stack and outstanding street bet.
    pub fn total_chips(&self) -> u64 {
        self.pot as u64
            + self
                .players
                .iter()
                .map(|p| p.stack() as u64 + p.bet_this_street() as u64)
                .sum::<u64>()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Receiving end handed out by [`crate::engine::Table::subscribe`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: usize,
    receiver: mpsc::Receiver<TableSnapshot>,
}

impl Subscription {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn try_next(&mut self) -> Option<TableSnapshot> {
        self.receiver.try_recv().ok()
    }

    /// Every snapshot received since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<TableSnapshot> {
        let mut out = Vec::new();
        while let Ok(s) = self.receiver.try_recv() {
            out.push(s);
        }
        out
    }
}

#[derive(Debug, Default)]
pub struct SnapshotBus {
    subscribers: Vec<(usize, mpsc::Sender<TableSnapshot>)>,
    next_id: usize,
}

impl SnapshotBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel(SNAPSHOT_CHANNEL_BUFFER);
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, tx));
        tracing::debug!(subscriber_id = id, "snapshot subscriber added");
        Subscription { id, receiver: rx }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn broadcast(&mut self, snapshot: &TableSnapshot) {
        self.subscribers.retain(|(id, sender)| {
            match sender.try_send(snapshot.clone()) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    tracing::warn!(subscriber_id = id, "subscriber lagging, snapshot dropped");
                    true
                }
                Err(TrySendError::Closed(_)) => {
                    tracing::debug!(subscriber_id = id, "snapshot subscriber gone");
                    false
                }
            }
        });
    }
}
