use felt_engine::cards::parse_cards;
use felt_engine::deck::Deck;
use felt_engine::engine::Table;
use felt_engine::game::{Street, TableConfig};
use felt_engine::player::Action;

fn stacked(cards: &str) -> Deck {
    Deck::from_cards(parse_cards(cards).expect("valid cards"))
}

fn stacks(t: &Table) -> Vec<u32> {
    t.players().iter().map(|p| p.stack()).collect()
}

// Leaves stacks at [1920, 980, 100] after seat 0's aces beat seat 2.
fn three_handed_with_short_stack() -> Table {
    let mut t = Table::new(TableConfig::with_players(3), Some(4)).unwrap();
    t.deal_new_hand_from(stacked("As Ad 7c 2d 8h 3s Ac Kd 9s 5h 4c"))
        .unwrap();
    t.apply_action(2, Action::Bet(900)).unwrap();
    t.apply_action(0, Action::Call).unwrap();
    t.apply_action(1, Action::Fold).unwrap();
    assert_eq!(t.street(), Street::Flop);
    assert_eq!(t.pot(), 1820);
    while t.street().is_betting() {
        let id = t.acting_player().unwrap();
        t.apply_action(id, Action::Check).unwrap();
    }
    assert_eq!(stacks(&t), vec![1920, 980, 100]);
    t
}

#[test]
fn short_all_in_does_not_reopen_action() {
    let mut t = three_handed_with_short_stack();
    t.deal_new_hand().unwrap();
    assert_eq!(stacks(&t), vec![1910, 960, 100]);

    t.apply_action(2, Action::Call).unwrap();
    t.apply_action(0, Action::Bet(290)).unwrap();
    t.apply_action(1, Action::Call).unwrap();
    assert_eq!(t.acting_player(), Some(2));

    // 80 more is all seat 2 has left, well short of the 300 to match
    t.apply_action(2, Action::AllIn).unwrap();
    let short = &t.players()[2];
    assert!(short.is_all_in());
    assert_eq!(short.stack(), 0);

    // seats 0 and 1 already matched 300 and are not asked again
    assert_eq!(t.street(), Street::Flop);
    assert_eq!(t.pot(), 700);
    assert_eq!(t.acting_player(), Some(0));
    assert_eq!(t.total_chips(), 3000);
}

#[test]
fn all_in_for_more_reopens_action() {
    let mut t = Table::new(TableConfig::with_players(3), Some(8)).unwrap();
    t.deal_new_hand().unwrap();
    t.apply_action(2, Action::Call).unwrap();
    t.apply_action(0, Action::AllIn).unwrap();
    assert_eq!(t.highest_bet(), 1000);
    assert_eq!(t.acting_player(), Some(1));
    t.apply_action(1, Action::Fold).unwrap();
    assert_eq!(t.acting_player(), Some(2));
}

#[test]
fn heads_up_all_in_and_call_runs_out_the_board() {
    let mut t = Table::new(TableConfig::with_players(2), Some(2)).unwrap();
    t.deal_new_hand_from(stacked("As Ad 7c 2d Ac Kd 9s 5h 4c"))
        .unwrap();
    t.apply_action(0, Action::AllIn).unwrap();
    t.apply_action(1, Action::Call).unwrap();

    assert_eq!(t.street(), Street::Showdown);
    assert_eq!(t.community_cards().len(), 5);
    assert_eq!(stacks(&t), vec![2000, 0]);
    assert!(t.is_game_over());
}

#[test]
fn all_in_with_one_caller_left_deals_without_betting() {
    let mut t = three_handed_with_short_stack();
    t.deal_new_hand_from(stacked("Kc Kh 9c 9d Qs Qd 2h 7h 8c Jd 3c"))
        .unwrap();
    t.apply_action(2, Action::AllIn).unwrap();
    t.apply_action(0, Action::Fold).unwrap();
    t.apply_action(1, Action::Call).unwrap();

    // seat 1 is the only one who could still bet: no further streets are played
    assert_eq!(t.street(), Street::Showdown);
    assert_eq!(t.community_cards().len(), 5);
    // queens beat nines
    assert_eq!(t.winners()[0].player_id, 2);
    assert_eq!(stacks(&t), vec![1910, 880, 210]);
}
