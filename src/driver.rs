//! Line-oriented text front end.
//!
//! One command per line:
//! - `e2e4` plays a move for the side to move
//! - `undo` takes back the last move
//! - `board` prints the diagram, rank 8 first
//! - `moves <sq>` lists where the piece on `<sq>` may go
//! - `status` reports whose turn it is and the game status
//! - `new` starts over
//! - `quit` ends the loop

use std::io::{self, BufRead, Write};

use crate::board::{Move, Square};
use crate::game::{GameSession, UndoResult};

/// What the loop should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub fn run_driver_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

/// Read commands from `input` until it ends or `quit` is seen.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut game = GameSession::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match respond(&mut game, &line) {
            Reply::Quit => break,
            Reply::Text(text) => {
                writeln!(out, "{text}")?;
                out.flush()?;
            }
        }
    }
    Ok(())
}

pub fn respond(game: &mut GameSession, line: &str) -> Reply {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let text = match parts.as_slice() {
        ["quit"] => return Reply::Quit,
        ["new"] => {
            game.reset();
            "new game".to_string()
        }
        ["undo"] => match game.undo() {
            UndoResult::Undone { move_number, .. } => format!("undone, move {move_number}"),
            UndoResult::NothingToUndo => "nothing to undo".to_string(),
        },
        ["board"] => game.board().to_string().trim_end().to_string(),
        ["status"] => status_line(game),
        ["moves", square] => match square.parse::<Square>() {
            Ok(from) => {
                let dests: Vec<String> = game
                    .legal_destinations(from)
                    .iter()
                    .map(Square::to_string)
                    .collect();
                if dests.is_empty() {
                    "(none)".to_string()
                } else {
                    dests.join(" ")
                }
            }
            Err(err) => format!("error: {err}"),
        },
        [text] => match text.parse::<Move>() {
            Ok(mv) => play(game, mv),
            Err(err) => format!("error: {err}"),
        },
        _ => format!("error: unknown command '{}'", line.trim()),
    };
    Reply::Text(text)
}

fn play(game: &mut GameSession, mv: Move) -> String {
    match game.apply_move(mv.from, mv.to) {
        Ok(record) if record.status.is_terminal() => format!("ok {mv}, {}", record.status),
        Ok(_) if game.in_check() => format!("ok {mv}, check"),
        Ok(_) => format!("ok {mv}"),
        Err(err) => format!("error: {err}"),
    }
}

fn status_line(game: &GameSession) -> String {
    let status = game.status();
    if status.is_terminal() {
        return format!("move {}: {status}", game.move_number());
    }
    let check = if game.in_check() { ", in check" } else { "" };
    format!(
        "move {}: {} to move{check}",
        game.move_number(),
        game.side_to_move()
    )
}
