use crate::errors::InvalidAction;
use crate::player::Action as A;

/// What the acting player is facing when they submit an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    pub stack: u32,
    pub bet_this_street: u32,
    pub highest_bet: u32,
    pub min_increment: u32,
}

impl BetContext {
    pub fn to_call(&self) -> u32 {
        self.highest_bet.saturating_sub(self.bet_this_street)
    }
}

/// An action with its chip cost resolved. Amounts are chips leaving the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    AllIn(u32),
}

/// Validates a player action against the street's betting state.
///
/// Bet amounts are the chips added by this action. A bet of the entire stack is always an
/// all-in, even when it is short of the highest bet or off the chip increment. A bet of
/// exactly the amount owed is a call. Any other bet must be positive, a multiple of
/// `min_increment`, and bring the player's street total up to at least the current
/// highest bet.
///
/// # Examples
///
/// ```
/// use felt_engine::rules::{validate_action, BetContext, ValidatedAction};
/// use felt_engine::player::Action;
/// use felt_engine::errors::InvalidAction;
///
/// let ctx = BetContext { stack: 990, bet_this_street: 10, highest_bet: 20, min_increment: 5 };
/// assert_eq!(validate_action(ctx, Action::Call), Ok(ValidatedAction::Call(10)));
/// assert_eq!(
///     validate_action(ctx, Action::Check),
///     Err(InvalidAction::CheckWhenBehind { to_call: 10 })
/// );
/// assert_eq!(
///     validate_action(ctx, Action::Bet(7)),
///     Err(InvalidAction::WrongIncrement { amount: 7, increment: 5 })
/// );
/// ```
pub fn validate_action(ctx: BetContext, action: A) -> Result<ValidatedAction, InvalidAction> {
    let to_call = ctx.to_call();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(InvalidAction::CheckWhenBehind { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if to_call >= ctx.stack {
                Ok(ValidatedAction::AllIn(ctx.stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::AllIn => {
            if ctx.stack == 0 {
                Err(InvalidAction::NonPositiveAmount)
            } else {
                Ok(ValidatedAction::AllIn(ctx.stack))
            }
        }
        A::Bet(amount) => {
            if amount > ctx.stack {
                return Err(InvalidAction::InsufficientStack {
                    amount,
                    stack: ctx.stack,
                });
            }
            if amount == 0 {
                return Err(InvalidAction::NonPositiveAmount);
            }
            if amount == ctx.stack {
                return Ok(ValidatedAction::AllIn(amount));
            }
            if amount == to_call {
                return Ok(ValidatedAction::Call(amount));
            }
            if amount % ctx.min_increment != 0 {
                return Err(InvalidAction::WrongIncrement {
                    amount,
                    increment: ctx.min_increment,
                });
            }
            if amount < to_call {
                return Err(InvalidAction::BelowMinimum {
                    amount,
                    minimum: to_call,
                });
            }
            Ok(ValidatedAction::Bet(amount))
        }
    }
}
