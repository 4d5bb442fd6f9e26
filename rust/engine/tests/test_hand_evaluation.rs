use felt_engine::cards::parse_cards;
use felt_engine::hand::{compare_hands, evaluate_five, Category, HandResult};

fn eval(s: &str) -> HandResult {
    let cards: [_; 5] = parse_cards(s)
        .expect("valid cards")
        .try_into()
        .expect("five cards");
    evaluate_five(&cards)
}

#[test]
fn reference_table_categories() {
    let table = [
        ("As Ks Qs Js Ts", Category::RoyalFlush),
        ("9h 8h 7h 6h 5h", Category::StraightFlush),
        ("7c 7d 7h 7s 2c", Category::FourOfAKind),
        ("Kc Kd Kh 4s 4c", Category::FullHouse),
        ("Ad 9d 6d 4d 2d", Category::Flush),
        ("9c 8d 7h 6s 5c", Category::Straight),
        ("Qc Qd Qh 9s 2c", Category::ThreeOfAKind),
        ("Jc Jd 4h 4s Ac", Category::TwoPair),
        ("Tc Td 8h 4s 2c", Category::OnePair),
        ("Ac Jd 8h 4s 2c", Category::HighCard),
    ];
    for (cards, expected) in table {
        let hr = eval(cards);
        assert_eq!(hr.category, expected, "{}", cards);
        assert_eq!(hr.label, expected.label());
    }
}

#[test]
fn wheel_is_five_high_not_ace_high() {
    let wheel = eval("As 2h 3d 4c 5s");
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.tiebreak, vec![5]);
    // six-high straight beats the wheel
    assert!(eval("2c 3d 4h 5s 6c") > wheel);
}

#[test]
fn steel_wheel_is_a_straight_flush() {
    let hr = eval("Ah 2h 3h 4h 5h");
    assert_eq!(hr.category, Category::StraightFlush);
    assert_eq!(hr.tiebreak, vec![5]);
}

#[test]
fn category_ordering_is_correct() {
    let quads = eval("Ac Ad Ah As Kc");
    let full_house = eval("Kc Kd Kh Qc Qd");
    assert!(compare_hands(&quads, &full_house).is_gt());
    assert!(eval("9c 8d 7h 6s 5c") > eval("Qc Qd Qh 9s 2c"));
}

#[test]
fn kickers_break_ties_within_a_category() {
    let aces_king = eval("Ac Ad Kh 7s 2c");
    let aces_queen = eval("Ah As Qh 7d 2d");
    assert!(aces_king > aces_queen);

    let kings_up_nine = eval("Kc Kd 4h 4s 9c");
    let kings_up_eight = eval("Kh Ks 4c 4d 8c");
    assert!(kings_up_nine > kings_up_eight);

    let full_nines = eval("9c 9d 9h 2s 2c");
    let full_eights = eval("8c 8d 8h As Ac");
    assert!(full_nines > full_eights);
}

#[test]
fn identical_ranks_in_other_suits_tie() {
    let a = eval("Ac Kd 9h 7s 3c");
    let b = eval("Ad Kh 9s 7c 3d");
    assert!(compare_hands(&a, &b).is_eq());
    assert_eq!(a, b);
}

#[test]
fn ordering_is_total_over_a_sample() {
    let hands: Vec<HandResult> = [
        "As Ks Qs Js Ts",
        "7c 7d 7h 7s 2c",
        "Kc Kd Kh 4s 4c",
        "Ad 9d 6d 4d 2d",
        "As 2h 3d 4c 5s",
        "Jc Jd 4h 4s Ac",
        "Tc Td 8h 4s 2c",
        "Ac Jd 8h 4s 2c",
    ]
    .iter()
    .map(|s| eval(s))
    .collect();
    for a in &hands {
        for b in &hands {
            let ab = compare_hands(a, b);
            assert_eq!(ab, compare_hands(b, a).reverse());
            if ab.is_eq() {
                assert_eq!((a.category, &a.tiebreak), (b.category, &b.tiebreak));
            }
        }
    }
}
