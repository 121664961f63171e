/*
 * Command line driver
 *
 *   chess_rules perft <depth>          divide table and node rate
 *   chess_rules play [games] [seed]    random self-play, one board per game
 *
 * RUST_LOG controls log output, CHESS_RULES_CACHE_CAPACITY the move cache.
 */

use std::process::ExitCode;
use std::time::Instant;

use chess_rules::{Color, EngineConfig, GameStatus, Position, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_PLIES: usize = 400;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = EngineConfig::from_env();
    log::debug!("engine config: {:?}", config);

    match args.first().map(String::as_str) {
        Some("perft") => {
            let Some(depth) = args.get(1).and_then(|d| d.parse().ok()) else {
                return usage();
            };
            run_perft(config, depth);
        }
        Some("play") => {
            let games = args.get(1).map_or(Some(1), |g| g.parse().ok());
            let seed = args.get(2).map_or(Some(0), |s| s.parse().ok());
            let (Some(games), Some(seed)) = (games, seed) else {
                return usage();
            };
            run_games(config, games, seed);
        }
        _ => return usage(),
    }
    ExitCode::SUCCESS
}

fn usage() -> ExitCode {
    eprintln!("usage: chess_rules perft <depth>");
    eprintln!("       chess_rules play [games] [seed]");
    ExitCode::FAILURE
}

fn run_perft(config: EngineConfig, depth: u32) {
    let pos = Position::starting(config);

    let start = Instant::now();
    let counts = pos.divide(depth);
    let duration = start.elapsed();

    let mut total: u64 = 0;
    for (mv, nodes) in &counts {
        println!("{}: {}", mv, nodes);
        total += *nodes;
    }
    println!();
    println!("Moves: {}", counts.len());
    println!("Nodes: {}", total);
    println!("Time: {:.2}s", duration.as_secs_f64());
    println!("Nodes/sec: {:.0}", total as f64 / duration.as_secs_f64());
    log::info!("perft {} = {} in {:?}", depth, total, duration);
}

fn run_games(config: EngineConfig, games: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for game in 1..=games {
        let mut pos = Position::starting(config);
        let mut status = pos.status();
        while !status.is_over() && pos.history().count() < MAX_PLIES {
            let moves = pos.legal_moves();
            let mv = moves[rng.gen_range(0..moves.len())];
            if let Err(err) = pos.play(mv) {
                log::error!("game {} rejected generated move {}: {}", game, mv, err);
                break;
            }
            status = pos.status();
        }

        println!("Game {}", game);
        println!("{}", render(&pos));
        let plies = pos.history().count();
        let result = match status {
            GameStatus::Checkmate { winner } => format!("{:?} wins by checkmate", winner),
            GameStatus::Stalemate => "draw by stalemate".to_string(),
            GameStatus::InsufficientMaterial => "draw by insufficient material".to_string(),
            GameStatus::Ongoing => "unfinished".to_string(),
        };
        println!("{} after {} plies", result, plies);
        println!();
        log::info!(
            "game {}: {} ({} cache hits, {} misses)",
            game,
            result,
            pos.cache_stats().hits,
            pos.cache_stats().misses
        );
    }
}

/// Rank 8 at the top, white pieces uppercase
fn render(pos: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push((b'1' + rank as u8) as char);
        out.push(' ');
        for file in 0..8 {
            let c = Square::new(file, rank)
                .ok()
                .and_then(|sq| pos.piece_at(sq))
                .map_or('.', |p| p.to_char());
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    let side = match pos.side_to_move() {
        Color::White => "white",
        Color::Black => "black",
    };
    out.push_str(&format!("{} to move", side));
    out
}
