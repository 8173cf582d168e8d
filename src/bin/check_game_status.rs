use std::env;
use std::process::ExitCode;

use chess_rules::board::{legal_moves, Move};
use chess_rules::GameSession;

fn main() -> ExitCode {
    let mut game = GameSession::new();
    for arg in env::args().skip(1) {
        let mv: Move = match arg.parse() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{arg}: {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = game.apply_move(mv.from, mv.to) {
            eprintln!("{arg}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let side = game.side_to_move();
    let moves = if game.status().is_terminal() {
        Vec::new()
    } else {
        legal_moves(side, game.board(), &game.castling_rights())
    };
    println!("side_to_move: {side}");
    println!("status: {}", game.status());
    println!("in_check: {}", game.in_check());
    println!("legal_moves: {}", moves.len());
    for mv in &moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
