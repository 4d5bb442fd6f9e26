//! `felt play`: you sit in seat 0 against automated opponents.
//!
//! The loop reads one prompt line whenever your seat is to act and otherwise lets the
//! opponents act, pausing `ai_delay_ms` before each of their decisions. Actions and new
//! streets are announced from the table's snapshot feed.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use felt_ai::Opponent;
use felt_engine::engine::{DealOutcome, Table};
use felt_engine::events::Subscription;
use felt_engine::game::{Street, TableConfig};

use super::{SessionOverrides, seat_opponents, session_config, take_automated_turn};
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_table, format_winners};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

pub const USER_SEAT: usize = 0;

#[derive(Debug, PartialEq, Eq)]
enum HandEnd {
    Finished,
    Quit,
}

/// Announces what happened since the last call: every new action record (read from the
/// hand history) and every street change seen on the snapshot feed.
struct Narrator {
    feed: Subscription,
    street: Street,
    announced: usize,
}

impl Narrator {
    fn new(feed: Subscription) -> Self {
        Self {
            feed,
            street: Street::Setup,
            announced: 0,
        }
    }

    fn new_hand(&mut self) {
        self.announced = 0;
    }

    fn report(&mut self, table: &Table, out: &mut dyn Write) -> std::io::Result<()> {
        let records = table.history().records();
        for record in records.iter().skip(self.announced) {
            let name = table.player(record.player_id).map_or("?", |p| p.name());
            writeln!(out, "{}", format_action(name, &record.action))?;
        }
        self.announced = records.len();

        for snapshot in self.feed.drain() {
            if snapshot.street == self.street {
                continue;
            }
            self.street = snapshot.street;
            match snapshot.street {
                Street::Flop | Street::Turn | Street::River => writeln!(
                    out,
                    "*** {:?} {} ***",
                    snapshot.street,
                    format_board(&snapshot.community_cards)
                )?,
                Street::Showdown => {
                    write!(out, "{}", format_table(&snapshot))?;
                    let winners = format_winners(&snapshot);
                    if !winners.is_empty() {
                        writeln!(out, "{}", winners)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

pub fn handle_play_command(
    overrides: &SessionOverrides,
    hands: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = session_config(overrides)?;
    let table_config = TableConfig {
        user_seat: Some(USER_SEAT),
        rotate_button: cfg.rotate_button,
        ..TableConfig::with_players(cfg.players)
    };
    let mut table = Table::new(table_config, cfg.seed)?;
    let mut seats = seat_opponents(&cfg, Some(USER_SEAT))?;
    let mut narrator = Narrator::new(table.subscribe());
    let delay = Duration::from_millis(cfg.ai_delay_ms);

    writeln!(
        out,
        "Felt Hold'em: {} players, blinds {}/{}, ai={}",
        cfg.players,
        table.config().small_blind,
        table.config().big_blind,
        cfg.ai
    )?;

    let mut played = 0;
    while hands.is_none_or(|limit| played < limit) {
        if table.player(USER_SEAT).is_some_and(|p| p.stack() == 0) {
            writeln!(out, "You are out of chips.")?;
            break;
        }
        if table.deal_new_hand()? == DealOutcome::GameOver {
            writeln!(out, "Game over.")?;
            break;
        }
        played += 1;
        narrator.new_hand();
        let end = play_hand(&mut table, &mut seats, &mut narrator, delay, out, err, stdin)?;
        if end == HandEnd::Quit {
            writeln!(out, "Leaving the table.")?;
            break;
        }
    }

    writeln!(out, "Session over after {} hands.", played)?;
    for p in table.players() {
        writeln!(out, "  {:<9} {:>6}", p.name(), p.stack())?;
    }
    Ok(())
}

fn play_hand(
    table: &mut Table,
    seats: &mut [Option<Box<dyn Opponent>>],
    narrator: &mut Narrator,
    delay: Duration,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<HandEnd, CliError> {
    loop {
        narrator.report(table, out)?;
        if !table.street().is_betting() {
            return Ok(HandEnd::Finished);
        }

        if table.can_user_act() {
            let snapshot = table.snapshot();
            write!(out, "{}", format_table(&snapshot))?;
            ui::prompt_action(out, snapshot.to_call(USER_SEAT))?;
            let Some(line) = read_stdin_line(stdin) else {
                return Err(CliError::Interrupted("input closed mid-hand".into()));
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => {
                    if let Err(e) = table.apply_action(USER_SEAT, action) {
                        ui::write_error(err, &e.to_string())?;
                    }
                }
                ParseResult::Show => table.set_show_cards(USER_SEAT, true),
                ParseResult::Hide => table.set_show_cards(USER_SEAT, false),
                ParseResult::Quit => return Ok(HandEnd::Quit),
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        } else if let Some(ticket) = table.automated_turn() {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            take_automated_turn(table, seats, ticket)?;
        } else {
            return Err(CliError::Invariant(format!(
                "{:?} has no player to act",
                table.street()
            )));
        }
    }
}
