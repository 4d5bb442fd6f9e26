//! Best five-card hand out of hole cards plus community cards.

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{evaluate_five, HandResult};

/// Evaluates every 5-card subset of `hole` + `board` and returns the strongest.
///
/// Among equally ranked subsets the first one enumerated is kept. Fewer than five cards
/// in total is reported as [`GameError::IncompleteHand`].
///
/// ```
/// use felt_engine::cards::parse_cards;
/// use felt_engine::hand::Category;
/// use felt_engine::select::best_hand;
///
/// let hole = parse_cards("Kh Kd").unwrap();
/// let board = parse_cards("Ks 7c 7d 2h 3s").unwrap();
/// assert_eq!(best_hand(&hole, &board).unwrap().category, Category::FullHouse);
/// ```
pub fn best_hand(hole: &[Card], board: &[Card]) -> Result<HandResult, GameError> {
    let all: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    if all.len() < 5 {
        return Err(GameError::IncompleteHand {
            available: all.len(),
        });
    }

    let mut best: Option<HandResult> = None;
    for combo in five_card_subsets(&all) {
        let result = evaluate_five(&combo);
        match &best {
            Some(current) if result <= *current => {}
            _ => best = Some(result),
        }
    }
    best.ok_or(GameError::IncompleteHand {
        available: all.len(),
    })
}

/// All C(n, 5) subsets in lexicographic index order.
pub fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    if n < 5 {
        return out;
    }
    let mut idx = [0usize, 1, 2, 3, 4];
    loop {
        out.push(idx.map(|i| cards[i]));

        // rightmost index that can still move right
        let Some(pos) = (0..5).rev().find(|&p| idx[p] < n - 5 + p) else {
            break;
        };
        idx[pos] += 1;
        for p in pos + 1..5 {
            idx[p] = idx[p - 1] + 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn subset_counts_match_binomials() {
        let cards = parse_cards("As Ks Qs Js Ts 9s 8s").unwrap();
        assert_eq!(five_card_subsets(&cards).len(), 21);
        assert_eq!(five_card_subsets(&cards[..6]).len(), 6);
        assert_eq!(five_card_subsets(&cards[..5]).len(), 1);
        assert!(five_card_subsets(&cards[..4]).is_empty());
    }

    #[test]
    fn subsets_are_distinct() {
        let cards = parse_cards("2c 3d 4h 5s 6c 7d 8h").unwrap();
        let mut subsets = five_card_subsets(&cards);
        for s in subsets.iter_mut() {
            s.sort();
        }
        subsets.sort();
        subsets.dedup();
        assert_eq!(subsets.len(), 21);
    }

    #[test]
    fn too_few_cards_is_incomplete() {
        let hole = parse_cards("As Ad").unwrap();
        let board = parse_cards("Kc Qd").unwrap();
        assert_eq!(
            best_hand(&hole, &board),
            Err(GameError::IncompleteHand { available: 4 })
        );
    }
}
