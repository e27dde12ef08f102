//! Line-oriented front-end for pipes and terminals without raw mode.
//!
//! Every line is one command: a number guesses it, `pick N` plays a card,
//! `new` starts over, `quit` (or end of input) leaves.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand_core::RngCore;

use super::session::{CardState, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Pick(i64),
    New,
    Quit,
    Help,
}

/// Game developer controls input parsing
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    match words.next()? {
        "new" | "reset" => Some(Command::New),
        "quit" | "q" | "exit" => Some(Command::Quit),
        "help" | "?" => Some(Command::Help),
        "pick" => words.next()?.parse().ok().map(Command::Pick),
        _ => Some(Command::Guess(line.to_string())),
    }
}

pub fn run<R, I, O>(session: &mut Session<R>, input: I, out: &mut O) -> Result<()>
where
    R: RngCore,
    I: BufRead,
    O: Write,
{
    print_intro(session, out)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_line(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(out)?,
            Command::New => {
                session.reset_game();
                print_intro(session, out)?;
            }
            Command::Pick(value) => {
                if session.select_option(value).is_some() {
                    print_turn(session, out)?;
                } else if session.is_over() {
                    writeln!(out, "The game is over. Type 'new' to play again.")?;
                } else {
                    writeln!(out, "{value} is not one of the cards.")?;
                }
            }
            Command::Guess(raw) => match session.submit_text_guess(&raw) {
                Ok(Some(_)) => print_turn(session, out)?,
                Ok(None) => writeln!(out, "The game is over. Type 'new' to play again.")?,
                Err(err) => {
                    let range = session.range();
                    writeln!(
                        out,
                        "! {err}. Please enter a number between {} and {}.",
                        range.min, range.max
                    )?;
                }
            },
        }
        out.flush()?;
    }

    Ok(())
}

fn print_intro<R: RngCore, O: Write>(session: &Session<R>, out: &mut O) -> Result<()> {
    writeln!(
        out,
        "== {} · started {} ==",
        session.variant().label(),
        session.started_display()
    )?;
    writeln!(out, "{}", session.status())?;
    print_cards(session, out)?;
    Ok(())
}

fn print_turn<R: RngCore, O: Write>(session: &Session<R>, out: &mut O) -> Result<()> {
    writeln!(out, "[{}] {}", session.attempts(), session.status())?;
    print_cards(session, out)?;
    if session.is_over() {
        writeln!(out, "Finished: {}", session.finished_display())?;
        writeln!(out, "History:")?;
        for entry in session.log().entries() {
            writeln!(
                out,
                "  #{:<3} {:>6}  {}",
                entry.attempt_number,
                entry.guessed_value,
                entry.outcome.message()
            )?;
        }
        writeln!(out, "Type 'new' to play again or 'quit' to leave.")?;
    }
    Ok(())
}

fn print_cards<R: RngCore, O: Write>(session: &Session<R>, out: &mut O) -> Result<()> {
    let cards = session.cards();
    if cards.is_empty() {
        return Ok(());
    }
    let shown: Vec<String> = cards
        .iter()
        .map(|(value, state)| match state {
            CardState::Open => format!("[{value}]"),
            CardState::Winner => format!("*{value}*"),
            CardState::Disabled => format!(" {value} "),
        })
        .collect();
    writeln!(out, "Cards: {}  (pick N)", shown.join(" "))?;
    Ok(())
}

fn print_help<O: Write>(out: &mut O) -> Result<()> {
    writeln!(out, "Commands: <number> | pick <number> | new | quit")?;
    Ok(())
}
