//! `felt rank`: best five-card hand out of 5 to 7 cards.

use std::collections::HashSet;
use std::io::Write;

use felt_engine::cards::parse_cards;
use felt_engine::select::best_hand;

use crate::error::CliError;
use crate::formatters::format_board;

const MAX_CARDS: usize = 7;

pub fn handle_rank_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" ")).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if cards.len() > MAX_CARDS {
        return Err(CliError::InvalidInput(format!(
            "at most {} cards can be ranked, got {}",
            MAX_CARDS,
            cards.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("card {} appears twice", dup)));
    }

    let best = best_hand(&cards, &[])?;
    writeln!(out, "Cards:    {}", format_board(&cards))?;
    writeln!(out, "Hand:     {}", best.label)?;
    writeln!(out, "Category: {:?} ({})", best.category, best.category as u8)?;
    writeln!(out, "Tiebreak: {:?}", best.tiebreak)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn ranks_seven_cards() {
        let mut out = Vec::new();
        handle_rank_command(&args("Kh Kd Ks 7c 7d 2h 3s"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Full House"));
        assert!(text.contains("Tiebreak: [13, 7]"));
    }

    #[test]
    fn rejects_bad_input() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_rank_command(&args("As Ks"), &mut out),
            Err(CliError::Engine(_))
        ));
        assert!(matches!(
            handle_rank_command(&args("As As Kd Qc Jh"), &mut out),
            Err(CliError::InvalidInput(m)) if m.contains("twice")
        ));
        assert!(matches!(
            handle_rank_command(&args("As Zz Kd Qc Jh"), &mut out),
            Err(CliError::InvalidInput(_))
        ));
    }
}
