//! Deterministic rule-based opponent.
//!
//! Scores the hole cards before the flop, the best made hand afterwards, and weighs the
//! score against pot odds. The same snapshot always produces the same action.

use felt_engine::cards::Card;
use felt_engine::events::TableSnapshot;
use felt_engine::game::Street;
use felt_engine::hand::Category;
use felt_engine::player::Action;
use felt_engine::select::best_hand;

use crate::{facing, sized_bet, Opponent};

/// Rule-based opponent used for simulations and as the default table companion.
///
/// **Pre-flop:** premium pairs and big aces raise, medium holdings call when cheap,
/// the rest fold to a bet and check when free.
///
/// **Post-flop:** two pair or better bets for value, one pair calls small bets, weaker
/// hands check or fold depending on pot odds.
///
/// ```rust
/// use felt_ai::baseline::BaselineAI;
/// use felt_ai::Opponent;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Pre-flop strength on a 0-10 scale.
    ///
    /// - 9-10: AA, KK, QQ, JJ, AKs
    /// - 7-8: TT-99, AK, AQ, KQs
    /// - 5-6: 88-77, AJ, KQ, good suited connectors
    /// - 3-4: small pairs, weak aces, broadway
    /// - 0-2: unconnected offsuit cards
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank.value();
        let r2 = hole[1].rank.value();
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        // suited holdings rate one point higher, except where noted
        let with_suit = |offsuit: u8| if suited { offsuit + 1 } else { offsuit };

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => if suited { 10 } else { 8 },
            (14, 12) => with_suit(7),
            (14, 11) => with_suit(6),
            (14, 10) => with_suit(5),
            (14, _) => with_suit(4),
            (13, 12) => with_suit(6),
            (13, 11) => with_suit(5),
            (13, 10) => with_suit(4),
            (12, 11) => with_suit(5),
            (12, 10) => with_suit(4),
            _ if suited && high - low <= 2 => if high >= 9 { 5 } else { 4 },
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Post-flop strength on a 0-10 scale from the best hand available so far.
    fn postflop_strength(hole: &[Card], board: &[Card]) -> Option<u8> {
        let best = best_hand(hole, board).ok()?;
        let base = match best.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        // a queen or better leading the tiebreak nudges the score up
        let kicker = u8::from(best.tiebreak.first().is_some_and(|&v| v >= 12));
        Some((base + kicker).min(10))
    }

    /// Pot odds as pot / (pot + call). Free actions score 1.0.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn decide_action(strength: u8, to_call: u32, stack: u32, pot: u32, big_blind: u32, increment: u32) -> Action {
        if to_call == 0 {
            return match strength {
                9..=10 => sized_bet((pot * 2 / 3).max(big_blind), 0, stack, increment),
                7..=8 => sized_bet((pot / 2).max(big_blind), 0, stack, increment),
                _ => Action::Check,
            };
        }

        if to_call >= stack {
            return if strength >= 7 { Action::AllIn } else { Action::Fold };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => sized_bet(to_call + (pot / 2).max(big_blind), to_call, stack, increment),
            7..=8 => Action::Call,
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => Action::Call,
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => Action::Call,
            _ => Action::Fold,
        }
    }
}

impl Opponent for BaselineAI {
    fn decide(&mut self, snapshot: &TableSnapshot, player_id: usize) -> Action {
        let Some((to_call, stack)) = facing(snapshot, player_id) else {
            return Action::Fold;
        };
        let hole: Option<[Card; 2]> = snapshot
            .player(player_id)
            .and_then(|p| p.hand().try_into().ok());
        let Some(hole) = hole else {
            return if to_call == 0 { Action::Check } else { Action::Fold };
        };

        let strength = if snapshot.street == Street::PreFlop {
            Self::preflop_strength(hole)
        } else {
            Self::postflop_strength(&hole, &snapshot.community_cards)
                .unwrap_or_else(|| Self::preflop_strength(hole))
        };
        let pot = snapshot.pot
            + snapshot
                .players
                .iter()
                .map(|p| p.bet_this_street())
                .sum::<u32>();

        let action = Self::decide_action(
            strength,
            to_call,
            stack,
            pot,
            snapshot.big_blind,
            snapshot.min_increment,
        );
        tracing::debug!(player_id, strength, to_call, ?action, "baseline decision");
        action
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
