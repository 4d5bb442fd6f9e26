use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{GameError, InvalidAction};
use crate::events::{SnapshotBus, Subscription, TableSnapshot};
use crate::game::{Seating, Street, TableConfig, MIN_PLAYERS};
use crate::history::{ActionRecord, HandHistory, RecordedAction};
use crate::player::{Action, Player, USER_NAME};
use crate::rules::{validate_action, BetContext, ValidatedAction};
use crate::showdown::{self, WinnerInfo};

const BOARD_SIZE: usize = 5;
const HOLE_CARDS: usize = 2;

/// Result of asking the table for a new hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    Dealt,
    /// Fewer than two players have chips. The table stays in Showdown until it is reset.
    GameOver,
}

/// Permission for an automated seat to act on one specific turn.
///
/// Tickets go stale as soon as any other action is applied, a new hand is dealt, or the
/// table is reset, so an action scheduled with a delay can never land on fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTicket {
    pub hand_number: u64,
    pub turn: u64,
    pub player_id: usize,
}

/// The poker table: single owner of the session's round state.
///
/// All mutation goes through [`Table::deal_new_hand`], [`Table::apply_action`],
/// [`Table::set_show_cards`] and [`Table::reset_to_setup`]. Every mutation is followed by a
/// [`TableSnapshot`] broadcast to subscribers.
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    deck: Deck,
    community: Vec<Card>,
    pot: u32,
    street: Street,
    acting: Option<usize>,
    highest_bet: u32,
    hand_number: u64,
    turn: u64,
    /// Small-blind seat of the last completed hand, when the button rotates.
    last_small_blind: Option<usize>,
    seating: Option<Seating>,
    /// Chips each seat has put in during the current hand, refunded if the hand is abandoned.
    committed: Vec<u32>,
    game_over: bool,
    winners: Vec<WinnerInfo>,
    history: HandHistory,
    rng: Box<dyn RngCore + Send>,
    bus: SnapshotBus,
}

impl Table {
    /// Creates a table in Setup. Without a seed the shuffle source is seeded from entropy.
    pub fn new(config: TableConfig, seed: Option<u64>) -> Result<Self, GameError> {
        let seed = seed.unwrap_or_else(rand::random);
        Self::with_rng(config, Box::new(ChaCha20Rng::seed_from_u64(seed)))
    }

    pub fn with_rng(config: TableConfig, rng: Box<dyn RngCore + Send>) -> Result<Self, GameError> {
        config.validate()?;
        let players = seat_players(&config);
        Ok(Self {
            committed: vec![0; players.len()],
            players,
            config,
            deck: Deck::from_cards(Vec::new()),
            community: Vec::with_capacity(BOARD_SIZE),
            pot: 0,
            street: Street::Setup,
            acting: None,
            highest_bet: 0,
            hand_number: 0,
            turn: 0,
            last_small_blind: None,
            seating: None,
            game_over: false,
            winners: Vec::new(),
            history: HandHistory::default(),
            rng,
            bus: SnapshotBus::new(),
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: usize) -> Option<&Player> {
        self.players.get(player_id)
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn acting_player(&self) -> Option<usize> {
        self.acting
    }

    pub fn highest_bet(&self) -> u32 {
        self.highest_bet
    }

    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winners(&self) -> &[WinnerInfo] {
        &self.winners
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    /// Positions used for the hand in progress, if any.
    pub fn seating(&self) -> Option<Seating> {
        self.seating
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

    /// True when the acting seat is the human-controlled one.
    pub fn can_user_act(&self) -> bool {
        self.street.is_betting()
            && self
                .acting
                .and_then(|id| self.players.get(id))
                .is_some_and(|p| p.is_user_controlled())
    }

    pub fn subscribe(&mut self) -> Subscription {
        self.bus.subscribe()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            hand_number: self.hand_number,
            players: self.players.clone(),
            community_cards: self.community.clone(),
            pot: self.pot,
            street: self.street,
            acting_player: self.acting,
            highest_bet: self.highest_bet,
            min_increment: self.config.min_increment,
            big_blind: self.config.big_blind,
            can_user_act: self.can_user_act(),
            is_dealing: self.street == Street::Dealing,
            game_over: self.game_over,
            winners: self.winners.clone(),
            last_action: self.history.last().cloned(),
        }
    }

    /// Starts a new hand with a freshly shuffled deck.
    ///
    /// A hand still in progress is abandoned and every chip committed to it is returned.
    pub fn deal_new_hand(&mut self) -> Result<DealOutcome, GameError> {
        self.abandon_hand();
        if self.funded_players() < MIN_PLAYERS {
            return Ok(self.enter_game_over());
        }
        let deck = Deck::shuffled(self.rng.as_mut());
        self.start_hand(deck)
    }

    /// Starts a new hand dealing from `deck` exactly as given.
    pub fn deal_new_hand_from(&mut self, deck: Deck) -> Result<DealOutcome, GameError> {
        self.abandon_hand();
        if self.funded_players() < MIN_PLAYERS {
            return Ok(self.enter_game_over());
        }
        self.start_hand(deck)
    }

    /// Applies `action` for `player_id`. A rejected action leaves the table untouched.
    pub fn apply_action(&mut self, player_id: usize, action: Action) -> Result<(), GameError> {
        let validated = match self.check_action(player_id, action) {
            Ok(v) => v,
            Err(reason) => {
                tracing::warn!(player_id, ?action, %reason, "action rejected");
                return Err(reason.into());
            }
        };

        let street = self.street;
        let player = &mut self.players[player_id];
        match validated {
            ValidatedAction::Fold => player.fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call(n) | ValidatedAction::Bet(n) | ValidatedAction::AllIn(n) => {
                let paid = player.commit(n);
                self.committed[player_id] += paid;
            }
        }
        let player = &mut self.players[player_id];
        player.mark_acted(true);
        let street_bet = player.bet_this_street();

        if street_bet > self.highest_bet {
            self.highest_bet = street_bet;
            for other in self.players.iter_mut().filter(|p| p.id() != player_id) {
                if other.can_act() {
                    other.mark_acted(false);
                }
            }
        }

        tracing::debug!(
            hand_number = self.hand_number,
            player_id,
            ?street,
            action = ?validated,
            highest_bet = self.highest_bet,
            "action applied"
        );
        self.history.push(ActionRecord {
            hand_number: self.hand_number,
            player_id,
            street,
            action: RecordedAction::from(&validated),
        });
        self.turn += 1;
        self.acting = self.find_actor(player_id + 1);

        let progressed = self.progress();
        self.emit();
        progressed
    }

    /// Ticket for the acting seat when it is automated, `None` when the user (or nobody) is up.
    pub fn automated_turn(&self) -> Option<TurnTicket> {
        if !self.street.is_betting() {
            return None;
        }
        let id = self.acting?;
        if self.players[id].is_user_controlled() {
            return None;
        }
        Some(TurnTicket {
            hand_number: self.hand_number,
            turn: self.turn,
            player_id: id,
        })
    }

    /// Applies an automated action scheduled with `ticket`. Stale tickets are rejected.
    pub fn apply_automated(&mut self, ticket: TurnTicket, action: Action) -> Result<(), GameError> {
        if ticket.hand_number != self.hand_number
            || ticket.turn != self.turn
            || self.acting != Some(ticket.player_id)
        {
            tracing::warn!(?ticket, turn = self.turn, "stale automated turn dropped");
            return Err(InvalidAction::StaleTurn.into());
        }
        self.apply_action(ticket.player_id, action)
    }

    /// Shows or hides the user's own hole cards. No-op for automated seats.
    pub fn set_show_cards(&mut self, player_id: usize, visible: bool) {
        let Some(player) = self.players.get_mut(player_id) else {
            return;
        };
        if !player.is_user_controlled() || player.reveal_hand() == visible {
            return;
        }
        player.set_reveal(visible);
        self.emit();
    }

    /// Discards the session and reseats `player_count` players with the starting stack.
    pub fn reset_to_setup(&mut self, player_count: usize) -> Result<(), GameError> {
        let config = TableConfig {
            player_count,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.players = seat_players(&self.config);
        self.committed = vec![0; self.players.len()];
        self.deck = Deck::from_cards(Vec::new());
        self.community.clear();
        self.pot = 0;
        self.street = Street::Setup;
        self.acting = None;
        self.highest_bet = 0;
        self.hand_number = 0;
        // the turn counter keeps growing so tickets from the old session stay stale
        self.turn += 1;
        self.last_small_blind = None;
        self.seating = None;
        self.game_over = false;
        self.winners.clear();
        self.history.clear();
        tracing::info!(player_count, "table reset");
        self.emit();
        Ok(())
    }

    fn start_hand(&mut self, deck: Deck) -> Result<DealOutcome, GameError> {
        self.hand_number += 1;
        self.turn += 1;
        self.deck = deck;
        self.community.clear();
        self.pot = 0;
        self.highest_bet = 0;
        self.game_over = false;
        self.winners.clear();
        self.history.clear();
        self.committed.iter_mut().for_each(|c| *c = 0);
        for p in self.players.iter_mut() {
            p.reset_for_hand();
        }

        let dealt: Vec<usize> = self
            .players
            .iter()
            .filter(|p| !p.is_sitting_out())
            .map(|p| p.id())
            .collect();
        let Some(seating) = Seating::for_hand(&dealt, self.last_small_blind) else {
            return Ok(self.enter_game_over());
        };
        self.seating = Some(seating);
        self.street = Street::Dealing;
        self.acting = None;

        for &id in &dealt {
            let cards = self.draw(HOLE_CARDS)?;
            self.players[id].give_cards(&cards);
        }
        tracing::info!(
            hand_number = self.hand_number,
            players = dealt.len(),
            small_blind = seating.small_blind,
            big_blind = seating.big_blind,
            "hand dealt"
        );
        self.emit();

        self.post_blind(seating.small_blind, self.config.small_blind, true);
        self.post_blind(seating.big_blind, self.config.big_blind, false);
        self.street = Street::PreFlop;
        self.acting = self.find_actor(seating.first_preflop);

        // both blinds may already have put everyone all-in
        let progressed = self.progress();
        self.emit();
        progressed.map(|()| DealOutcome::Dealt)
    }

    fn post_blind(&mut self, player_id: usize, amount: u32, small: bool) {
        let paid = self.players[player_id].commit(amount);
        self.committed[player_id] += paid;
        self.highest_bet = self.highest_bet.max(self.players[player_id].bet_this_street());
        let action = if small {
            RecordedAction::SmallBlind(paid)
        } else {
            RecordedAction::BigBlind(paid)
        };
        self.history.push(ActionRecord {
            hand_number: self.hand_number,
            player_id,
            street: Street::PreFlop,
            action,
        });
    }

    fn check_action(&self, player_id: usize, action: Action) -> Result<ValidatedAction, InvalidAction> {
        if !self.street.is_betting() {
            return Err(InvalidAction::NoBettingRound {
                street: self.street,
            });
        }
        let player = self
            .players
            .get(player_id)
            .ok_or(InvalidAction::UnknownPlayer { player_id })?;
        if !player.can_act() {
            return Err(InvalidAction::PlayerInactive { player_id });
        }
        match self.acting {
            Some(expected) if expected == player_id => {}
            Some(expected) => {
                return Err(InvalidAction::NotPlayersTurn {
                    expected,
                    actual: player_id,
                })
            }
            None => return Err(InvalidAction::PlayerInactive { player_id }),
        }
        let ctx = BetContext {
            stack: player.stack(),
            bet_this_street: player.bet_this_street(),
            highest_bet: self.highest_bet,
            min_increment: self.config.min_increment,
        };
        validate_action(ctx, action)
    }

    /// Drives the hand forward until someone has to act or the hand is over.
    fn progress(&mut self) -> Result<(), GameError> {
        loop {
            if !self.street.is_betting() {
                return Ok(());
            }
            if self.players.iter().filter(|p| p.in_hand()).count() <= 1 {
                return self.finish_hand();
            }
            if self.acting.is_some() {
                return Ok(());
            }

            self.collect_bets();
            if self.players.iter().filter(|p| p.can_act()).count() <= 1 {
                // no betting left to do: run out the board
                self.run_out_board()?;
                return self.finish_hand();
            }
            match self.street.next_betting() {
                Some((next, cards)) => {
                    self.deal_street(next, cards)?;
                    let first = self.seating.map(|s| s.first_postflop).unwrap_or(0);
                    self.acting = self.find_actor(first);
                }
                None => return self.finish_hand(),
            }
        }
    }

    fn run_out_board(&mut self) -> Result<(), GameError> {
        while self.community.len() < BOARD_SIZE {
            let Some((next, cards)) = self.street.next_betting() else {
                break;
            };
            self.deal_street(next, cards)?;
        }
        Ok(())
    }

    fn deal_street(&mut self, next: Street, cards: usize) -> Result<(), GameError> {
        let dealt = self.draw(cards)?;
        self.community.extend(dealt);
        self.street = next;
        self.highest_bet = 0;
        for p in self.players.iter_mut() {
            p.mark_acted(false);
        }
        tracing::debug!(
            hand_number = self.hand_number,
            street = ?next,
            pot = self.pot,
            "street dealt"
        );
        Ok(())
    }

    fn collect_bets(&mut self) {
        for p in self.players.iter_mut() {
            self.pot += p.take_street_bet();
        }
    }

    fn finish_hand(&mut self) -> Result<(), GameError> {
        if self.street == Street::Showdown {
            return Ok(());
        }
        let outcome = showdown::resolve(&mut self.players, &mut self.pot, &self.community)?;
        self.street = Street::Showdown;
        self.acting = None;
        self.highest_bet = 0;
        self.winners = outcome.winners;
        self.committed.iter_mut().for_each(|c| *c = 0);
        for p in self.players.iter_mut() {
            p.mark_acted(false);
        }
        if self.config.rotate_button {
            self.last_small_blind = self.seating.map(|s| s.small_blind);
        }
        if self.funded_players() < MIN_PLAYERS {
            self.game_over = true;
            tracing::info!(hand_number = self.hand_number, "game over");
        }
        Ok(())
    }

    fn enter_game_over(&mut self) -> DealOutcome {
        self.turn += 1;
        for p in self.players.iter_mut() {
            p.reset_for_hand();
        }
        self.community.clear();
        self.street = Street::Showdown;
        self.acting = None;
        self.seating = None;
        self.highest_bet = 0;
        self.game_over = true;
        self.winners.clear();
        tracing::info!(players_with_chips = self.funded_players(), "game over");
        self.emit();
        DealOutcome::GameOver
    }

    /// Returns every chip committed to an unfinished hand to its owner.
    fn abandon_hand(&mut self) {
        if matches!(self.street, Street::Setup | Street::Showdown) {
            return;
        }
        tracing::warn!(hand_number = self.hand_number, street = ?self.street, "hand abandoned");
        for (p, committed) in self.players.iter_mut().zip(self.committed.iter_mut()) {
            p.take_street_bet();
            p.add_chips(std::mem::take(committed));
        }
        self.pot = 0;
        self.highest_bet = 0;
        self.acting = None;
        self.street = Street::Setup;
    }

    fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        self.deck.deal(n).inspect_err(|e| {
            tracing::error!(hand_number = self.hand_number, error = %e, "deck exhausted");
        })
    }

    /// First seat from `start` (wrapping) that still owes an action this street.
    fn find_actor(&self, start: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|k| (start + k) % n)
            .find(|&i| self.needs_action(&self.players[i]))
    }

    fn needs_action(&self, p: &Player) -> bool {
        p.can_act() && (!p.has_acted() || p.bet_this_street() < self.highest_bet)
    }

    fn funded_players(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }

    fn emit(&mut self) {
        if self.bus.subscriber_count() == 0 {
            return;
        }
        let snapshot = self.snapshot();
        self.bus.broadcast(&snapshot);
    }
}

fn seat_players(config: &TableConfig) -> Vec<Player> {
    (0..config.player_count)
        .map(|i| {
            let user = config.user_seat == Some(i);
            let name = if user {
                USER_NAME.to_string()
            } else {
                format!("Player {}", i + 1)
            };
            Player::new(i, name, config.starting_stack, user)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn stacked(cards: &str) -> Deck {
        Deck::from_cards(parse_cards(cards).unwrap())
    }

    #[test]
    fn abandoned_hand_refunds_committed_chips() {
        let mut table = Table::new(TableConfig::with_players(3), Some(7)).unwrap();
        table.deal_new_hand().unwrap();
        let actor = table.acting_player().unwrap();
        table.apply_action(actor, Action::Bet(100)).unwrap();
        assert!(table.pot() + table.players().iter().map(|p| p.bet_this_street()).sum::<u32>() > 0);

        table.deal_new_hand().unwrap();
        // blinds of the new hand are the only chips out
        let out: u32 = table.players().iter().map(|p| 1000 - p.stack()).sum();
        assert_eq!(out, 30);
        assert_eq!(table.hand_number(), 2);
    }

    #[test]
    fn exhausted_deck_is_reported_and_recoverable() {
        let mut table = Table::new(TableConfig::with_players(2), Some(1)).unwrap();
        let err = table.deal_new_hand_from(stacked("As Ks Qs")).unwrap_err();
        assert_eq!(
            err,
            GameError::ExhaustedDeck {
                requested: 2,
                remaining: 1
            }
        );
        assert_eq!(table.deal_new_hand().unwrap(), DealOutcome::Dealt);
        assert_eq!(table.total_chips(), 2000);
    }

    #[test]
    fn stale_ticket_after_reset() {
        let config = TableConfig {
            user_seat: None,
            ..TableConfig::with_players(2)
        };
        let mut table = Table::new(config, Some(3)).unwrap();
        table.deal_new_hand().unwrap();
        let ticket = table.automated_turn().unwrap();
        table.reset_to_setup(2).unwrap();
        table.deal_new_hand().unwrap();
        assert_eq!(
            table.apply_automated(ticket, Action::Call),
            Err(GameError::InvalidAction(InvalidAction::StaleTurn))
        );
    }
}
