use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Classification of a five-card hand.
///
/// Ordering compares `category` first, then `tiebreak` element by element. The label is
/// derived from the category and never takes part in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    // rank values, most significant first
    pub tiebreak: Vec<u8>,
    pub label: String,
}

impl HandResult {
    fn new(category: Category, tiebreak: Vec<u8>) -> Self {
        Self {
            category,
            tiebreak,
            label: category.label().to_string(),
        }
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.tiebreak == other.tiebreak
    }
}

impl Eq for HandResult {}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.cmp(b)
}

/// Classifies exactly five cards.
///
/// ```
/// use felt_engine::cards::parse_cards;
/// use felt_engine::hand::{evaluate_five, Category};
///
/// let cards: [_; 5] = parse_cards("As 2h 3d 4c 5s").unwrap().try_into().unwrap();
/// let wheel = evaluate_five(&cards);
/// assert_eq!(wheel.category, Category::Straight);
/// assert_eq!(wheel.tiebreak, vec![5]);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> HandResult {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&values);

    // (value, count) sorted by count desc, then value desc
    let groups = multiplicity_groups(&values);
    let counts: Vec<u8> = groups.iter().map(|&(_, n)| n).collect();

    if let (true, Some(high)) = (is_flush, straight_high) {
        let category = if high == Rank::Ace.value() {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return HandResult::new(category, vec![high]);
    }

    match counts.as_slice() {
        [4, 1] => {
            return HandResult::new(Category::FourOfAKind, vec![groups[0].0, groups[1].0]);
        }
        [3, 2] => {
            return HandResult::new(Category::FullHouse, vec![groups[0].0, groups[1].0]);
        }
        _ => {}
    }

    if is_flush {
        return HandResult::new(Category::Flush, values);
    }
    if let Some(high) = straight_high {
        return HandResult::new(Category::Straight, vec![high]);
    }

    let group_values: Vec<u8> = groups.iter().map(|&(v, _)| v).collect();
    match counts.as_slice() {
        [3, 1, 1] => HandResult::new(Category::ThreeOfAKind, group_values),
        [2, 2, 1] => HandResult::new(Category::TwoPair, group_values),
        [2, 1, 1, 1] => HandResult::new(Category::OnePair, group_values),
        _ => HandResult::new(Category::HighCard, values),
    }
}

/// High card of a five-card straight, with A-2-3-4-5 counting as 5-high.
fn straight_high(desc_values: &[u8]) -> Option<u8> {
    let mut uniq = desc_values.to_vec();
    uniq.dedup();
    if uniq.len() != 5 {
        return None;
    }
    if uniq[0] - uniq[4] == 4 {
        return Some(uniq[0]);
    }
    if uniq == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn multiplicity_groups(desc_values: &[u8]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; 15];
    for &v in desc_values {
        counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (v, counts[v as usize]))
        .collect();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_order_by_count_then_value() {
        let groups = multiplicity_groups(&[13, 13, 9, 4, 4]);
        assert_eq!(groups, vec![(13, 2), (4, 2), (9, 1)]);
    }

    #[test]
    fn straight_detection_handles_wheel_and_gaps() {
        assert_eq!(straight_high(&[14, 5, 4, 3, 2]), Some(5));
        assert_eq!(straight_high(&[14, 13, 12, 11, 10]), Some(14));
        assert_eq!(straight_high(&[9, 8, 7, 6, 4]), None);
        assert_eq!(straight_high(&[9, 9, 8, 7, 6]), None);
    }

    #[test]
    fn label_ignored_by_ordering() {
        let a = HandResult::new(Category::OnePair, vec![10, 9, 8, 7]);
        let mut b = a.clone();
        b.label = "whatever".into();
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }
}
