//! Plays random legal moves from the starting position and prints the game.
//!
//! usage: random_game [seed] [max_plies]

use std::env;

use rand::prelude::*;

use chess_rules::board::legal_moves;
use chess_rules::GameSession;

const DEFAULT_MAX_PLIES: usize = 200;

fn main() {
    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());
    let max_plies = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameSession::new();
    let mut played = Vec::new();

    while played.len() < max_plies && !game.status().is_terminal() {
        let moves = legal_moves(game.side_to_move(), game.board(), &game.castling_rights());
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        match game.apply_move(mv.from, mv.to) {
            Ok(_) => played.push(mv.to_string()),
            Err(err) => {
                eprintln!("{mv} rejected: {err}");
                break;
            }
        }
    }

    println!("seed: {seed}");
    println!("moves: {}", played.join(" "));
    println!("plies: {}", played.len());
    println!("status: {}", game.status());
    print!("{}", game.board());
}
