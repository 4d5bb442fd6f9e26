use felt_engine::errors::InvalidAction;
use felt_engine::player::Action as A;
use felt_engine::rules::{validate_action, BetContext, ValidatedAction};

fn ctx(stack: u32, bet_this_street: u32, highest_bet: u32) -> BetContext {
    BetContext {
        stack,
        bet_this_street,
        highest_bet,
        min_increment: 5,
    }
}

#[test]
fn bet_zero_is_non_positive() {
    let err = validate_action(ctx(1000, 0, 0), A::Bet(0)).unwrap_err();
    assert_eq!(err, InvalidAction::NonPositiveAmount);
}

#[test]
fn bet_off_increment_is_rejected() {
    let err = validate_action(ctx(1000, 0, 0), A::Bet(33)).unwrap_err();
    assert_eq!(
        err,
        InvalidAction::WrongIncrement {
            amount: 33,
            increment: 5
        }
    );
}

#[test]
fn bet_must_cover_the_call() {
    let err = validate_action(ctx(980, 20, 100), A::Bet(40)).unwrap_err();
    assert_eq!(
        err,
        InvalidAction::BelowMinimum {
            amount: 40,
            minimum: 80
        }
    );
    assert_eq!(
        validate_action(ctx(980, 20, 100), A::Bet(120)),
        Ok(ValidatedAction::Bet(120))
    );
}

#[test]
fn bet_of_exactly_the_amount_owed_is_a_call() {
    assert_eq!(
        validate_action(ctx(980, 20, 100), A::Bet(80)),
        Ok(ValidatedAction::Call(80))
    );
    // owed amounts off the increment still call
    assert_eq!(
        validate_action(ctx(980, 0, 15), A::Bet(15)),
        Ok(ValidatedAction::Call(15))
    );
}

#[test]
fn bet_over_stack_is_insufficient() {
    let err = validate_action(ctx(50, 0, 0), A::Bet(100)).unwrap_err();
    assert_eq!(
        err,
        InvalidAction::InsufficientStack {
            amount: 100,
            stack: 50
        }
    );
}

#[test]
fn short_stack_bet_is_an_all_in() {
    // below the call and off increment, still fine because it is the whole stack
    let va = validate_action(ctx(33, 0, 100), A::Bet(33)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(33));
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    let va = validate_action(ctx(60, 0, 100), A::Call).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(60));
}

#[test]
fn call_with_nothing_owed_is_a_check() {
    let va = validate_action(ctx(500, 20, 20), A::Call).unwrap();
    assert_eq!(va, ValidatedAction::Check);
}

#[test]
fn check_when_behind_is_rejected() {
    let err = validate_action(ctx(500, 0, 20), A::Check).unwrap_err();
    assert_eq!(err, InvalidAction::CheckWhenBehind { to_call: 20 });
}

#[test]
fn fold_is_always_legal() {
    assert_eq!(
        validate_action(ctx(500, 0, 200), A::Fold),
        Ok(ValidatedAction::Fold)
    );
}

#[test]
fn all_in_shorthand_uses_the_whole_stack() {
    assert_eq!(
        validate_action(ctx(735, 0, 20), A::AllIn),
        Ok(ValidatedAction::AllIn(735))
    );
}
