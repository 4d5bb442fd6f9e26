//! Card, table, and action formatters for terminal display.
//!
//! Pure functions from engine values to strings. Suits use the Unicode symbols
//! ♥ ♦ ♣ ♠ where the terminal supports them and fall back to `h d c s`.
//!
//! ## Example
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use std::fmt::Write as _;

use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::events::TableSnapshot;
use felt_engine::game::Street;
use felt_engine::history::RecordedAction;
use felt_engine::player::{Player, USER_NAME};
use felt_engine::showdown::WinnerInfo;

/// On Windows only modern terminals (Windows Terminal, VS Code, anything setting
/// TERM_PROGRAM) are trusted with the suit symbols.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    match (supports_unicode(), suit) {
        (true, Suit::Hearts) => "♥",
        (true, Suit::Diamonds) => "♦",
        (true, Suit::Clubs) => "♣",
        (true, Suit::Spades) => "♠",
        (false, Suit::Hearts) => "h",
        (false, Suit::Diamonds) => "d",
        (false, Suit::Clubs) => "c",
        (false, Suit::Spades) => "s",
    }
}

pub fn format_rank(rank: &Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// `"[A♠ K♥ Q♦]"`, or `"[]"` before the flop.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// `name` followed by the verb form that agrees with it: `"You call"`, `"Player 2 calls"`.
fn subject(name: &str, you: &str, they: &str) -> String {
    let verb = if name == USER_NAME { you } else { they };
    format!("{} {}", name, verb)
}

/// Notification line for a recorded action, e.g. `"Player 2 calls 20"`.
pub fn format_action(name: &str, action: &RecordedAction) -> String {
    match action {
        RecordedAction::SmallBlind(n) => {
            format!("{} small blind {}", subject(name, "post", "posts"), n)
        }
        RecordedAction::BigBlind(n) => format!("{} big blind {}", subject(name, "post", "posts"), n),
        RecordedAction::Fold => subject(name, "fold", "folds"),
        RecordedAction::Check => subject(name, "check", "checks"),
        RecordedAction::Call(n) => format!("{} {}", subject(name, "call", "calls"), n),
        RecordedAction::Bet(n) => format!("{} {}", subject(name, "bet", "bets"), n),
        RecordedAction::AllIn(n) => format!("{} all-in for {}", subject(name, "go", "goes"), n),
    }
}

/// Hole cards as the table shows them: your own always, everyone else's only once revealed.
fn format_hole(player: &Player) -> String {
    if player.hand().is_empty() {
        return "[]".to_string();
    }
    if player.is_user_controlled() || player.reveal_hand() {
        format_board(player.hand())
    } else {
        let hidden: Vec<&str> = player.hand().iter().map(|_| "??").collect();
        format!("[{}]", hidden.join(" "))
    }
}

fn status(player: &Player) -> &'static str {
    if player.is_sitting_out() {
        " (out)"
    } else if player.has_folded() {
        " (folded)"
    } else if player.is_all_in() {
        " (all-in)"
    } else {
        ""
    }
}

pub fn format_table(snapshot: &TableSnapshot) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "--- Hand #{} | {:?} | Pot {} | Board {} ---",
        snapshot.hand_number,
        snapshot.street,
        snapshot.pot,
        format_board(&snapshot.community_cards)
    );
    for p in &snapshot.players {
        let marker = if snapshot.acting_player == Some(p.id()) { ">" } else { " " };
        let _ = writeln!(
            s,
            "{} {:<9} stack {:>5}  bet {:>4}  {}{}",
            marker,
            p.name(),
            p.stack(),
            p.bet_this_street(),
            format_hole(p),
            status(p)
        );
    }
    s
}

/// One line per winner; empty until the hand reaches showdown.
pub fn format_winners(snapshot: &TableSnapshot) -> String {
    if snapshot.street != Street::Showdown {
        return String::new();
    }
    snapshot
        .winners
        .iter()
        .map(format_winner)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_winner(w: &WinnerInfo) -> String {
    let wins = subject(&w.name, "win", "wins");
    match w.hand {
        Some(_) => format!("{} {} with {}", wins, w.amount, w.hand_label),
        None => format!("{} {} {}", wins, w.amount, w.hand_label),
    }
}
