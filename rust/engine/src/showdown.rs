//! Pot resolution at the end of a hand.
//!
//! A single pot is awarded. Side pots for players all-in for different amounts are not
//! formed; an all-in player who wins takes the whole pot.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::HandResult;
use crate::player::Player;
use crate::select::best_hand;

/// Label reported when everybody else folded.
pub const LAST_PLAYER_STANDING: &str = "as the last player left";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerInfo {
    pub player_id: usize,
    pub name: String,
    pub amount: u32,
    /// `None` when the pot was won without a showdown.
    pub hand: Option<HandResult>,
    pub hand_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShowdownOutcome {
    pub pot: u32,
    pub winners: Vec<WinnerInfo>,
}

/// Collects outstanding street bets into `pot`, picks the winner(s) among players still in
/// the hand and pays them. Every hand is revealed afterwards and `pot` is left at zero.
///
/// Ties split the pot with integer division; the odd chips go to the first tied winner in
/// seating order so no chip leaves play.
pub fn resolve(
    players: &mut [Player],
    pot: &mut u32,
    board: &[Card],
) -> Result<ShowdownOutcome, GameError> {
    for p in players.iter_mut() {
        *pot += p.take_street_bet();
    }

    let contenders: Vec<usize> = (0..players.len())
        .filter(|&i| players[i].in_hand())
        .collect();

    let winners: Vec<(usize, Option<HandResult>)> = match contenders.as_slice() {
        [] => Vec::new(),
        [only] => vec![(*only, None)],
        _ => {
            let mut results = Vec::with_capacity(contenders.len());
            for &i in &contenders {
                results.push((i, best_hand(players[i].hand(), board)?));
            }
            let Some(top) = results.iter().map(|(_, r)| r).max().cloned() else {
                return Ok(ShowdownOutcome::default());
            };
            results
                .into_iter()
                .filter(|(_, r)| *r == top)
                .map(|(i, r)| (i, Some(r)))
                .collect()
        }
    };

    for p in players.iter_mut() {
        p.set_reveal(true);
    }

    if winners.is_empty() {
        // nobody left to pay; the pot stays on the table
        tracing::warn!(pot = *pot, "showdown without contenders");
        return Ok(ShowdownOutcome {
            pot: *pot,
            winners: Vec::new(),
        });
    }

    let total = std::mem::take(pot);
    let share = total / winners.len() as u32;
    let odd_chips = total % winners.len() as u32;

    let mut paid = Vec::with_capacity(winners.len());
    for (n, (i, hand)) in winners.into_iter().enumerate() {
        let amount = if n == 0 { share + odd_chips } else { share };
        let player = &mut players[i];
        player.add_chips(amount);
        let hand_label = hand
            .as_ref()
            .map(|h| h.label.clone())
            .unwrap_or_else(|| LAST_PLAYER_STANDING.to_string());
        paid.push(WinnerInfo {
            player_id: player.id(),
            name: player.name().to_string(),
            amount,
            hand,
            hand_label,
        });
    }

    tracing::info!(
        pot = total,
        winners = ?paid.iter().map(|w| w.player_id).collect::<Vec<_>>(),
        "pot awarded"
    );

    Ok(ShowdownOutcome {
        pot: total,
        winners: paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn seat(id: usize, hole: &str) -> Player {
        let mut p = Player::new(id, format!("Player {}", id + 1), 1000, false);
        p.reset_for_hand();
        p.give_cards(&parse_cards(hole).unwrap());
        p
    }

    #[test]
    fn odd_chip_goes_to_first_winner_in_seat_order() {
        // board plays for everyone: broadway straight
        let board = parse_cards("As Kd Qh Jc Th").unwrap();
        let mut players = vec![
            seat(0, "2c 3c"),
            seat(1, "2d 3d"),
            seat(2, "4d 5d"),
        ];
        let mut pot = 100;
        let out = resolve(&mut players, &mut pot, &board).unwrap();
        let amounts: Vec<u32> = out.winners.iter().map(|w| w.amount).collect();
        assert_eq!(amounts, vec![34, 33, 33]);
        assert_eq!(pot, 0);
        assert_eq!(players.iter().map(|p| p.stack()).sum::<u32>(), 3100);
    }

    #[test]
    fn lone_player_wins_without_evaluation() {
        let mut players = vec![seat(0, "2c 7d"), seat(1, "As Ad")];
        players[1].fold();
        let mut pot = 60;
        // board is empty: no hand could be formed, none is needed
        let out = resolve(&mut players, &mut pot, &[]).unwrap();
        assert_eq!(out.winners.len(), 1);
        assert_eq!(out.winners[0].player_id, 0);
        assert_eq!(out.winners[0].hand_label, LAST_PLAYER_STANDING);
        assert!(out.winners[0].hand.is_none());
        assert_eq!(players[0].stack(), 1060);
        assert!(players.iter().all(|p| p.reveal_hand()));
    }

    #[test]
    fn street_bets_are_swept_into_the_pot() {
        let board = parse_cards("2s 7h 9d Jc Kd").unwrap();
        let mut players = vec![seat(0, "Ah Ac"), seat(1, "3c 4c")];
        players[0].commit(40);
        players[1].commit(40);
        let mut pot = 20;
        let out = resolve(&mut players, &mut pot, &board).unwrap();
        assert_eq!(out.pot, 100);
        assert_eq!(players[0].stack(), 1060);
        assert_eq!(players[1].stack(), 960);
        assert_eq!(players[0].bet_this_street(), 0);
    }
}
