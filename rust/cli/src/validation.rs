//! Parsing of the commands typed at the `play` prompt.

use felt_engine::player::Action;

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(Action),
    /// Reveal your hole cards on the table
    Show,
    Hide,
    Quit,
    Invalid(String),
}

/// Parses one prompt line (case-insensitive).
///
/// - `f` / `fold`, `k` / `check`, `c` / `call`
/// - `b N` / `bet N` / `raise N` (chips added this street)
/// - `allin` / `all-in`
/// - `show`, `hide`, `q` / `quit`
///
/// ```rust
/// use felt_cli::validation::{parse_player_action, ParseResult};
/// use felt_engine::player::Action;
///
/// assert_eq!(parse_player_action("bet 40"), ParseResult::Action(Action::Bet(40)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match command {
        "q" | "quit" => ParseResult::Quit,
        "show" => ParseResult::Show,
        "hide" => ParseResult::Hide,
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "k" => ParseResult::Action(Action::Check),
        "call" | "c" => ParseResult::Action(Action::Call),
        "allin" | "all-in" => ParseResult::Action(Action::AllIn),
        "bet" | "b" | "raise" => match parts.get(1) {
            None => ParseResult::Invalid("Bet requires an amount (e.g., 'bet 40')".to_string()),
            Some(amount) => match amount.parse::<u32>() {
                Ok(n) if n > 0 => ParseResult::Action(Action::Bet(n)),
                Ok(_) => ParseResult::Invalid("Bet amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid bet amount '{}'", amount)),
            },
        },
        other => ParseResult::Invalid(format!("Unrecognized command '{}'", other)),
    }
}
