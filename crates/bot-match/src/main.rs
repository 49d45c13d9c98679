//! Self-play driver for the chess engines.
//!
//! Pits two automated players against each other and prints the moves
//! and results. Each player is either the minimax search or the
//! heuristic picker at a chosen difficulty; when the search returns no
//! move the driver retries through the heuristic before conceding the
//! turn, mirroring how a host should pair the two.

use std::str::FromStr;

use chess_rules::{Color, GameMode, GameState};
use chess_search::{best_move, heuristic_move, Difficulty};
use clap::Parser;

/// Safety net against two shufflers never finishing.
const MAX_PLIES: usize = 300;

/// An engine selection, parsed from "minimax:hard" or "heuristic:easy".
#[derive(Debug, Clone, Copy)]
enum Player {
    Minimax(Difficulty),
    Heuristic(Difficulty),
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (engine, difficulty) = s.split_once(':').unwrap_or((s, "medium"));
        let difficulty = difficulty.parse::<Difficulty>()?;
        match engine {
            "minimax" => Ok(Player::Minimax(difficulty)),
            "heuristic" => Ok(Player::Heuristic(difficulty)),
            other => Err(format!("unknown engine: {}", other)),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Minimax(d) => write!(f, "minimax:{}", d),
            Player::Heuristic(d) => write!(f, "heuristic:{}", d),
        }
    }
}

impl Player {
    fn pick(&self, state: &GameState) -> Option<chess_rules::Move> {
        match *self {
            // The documented pairing: search first, heuristic as fallback.
            Player::Minimax(d) => best_move(state, d).or_else(|| {
                tracing::warn!("search produced no move, falling back to heuristic");
                heuristic_move(state, d)
            }),
            Player::Heuristic(d) => heuristic_move(state, d),
        }
    }
}

#[derive(Parser)]
#[command(name = "bot-match")]
#[command(about = "Play automated chess games between the bundled engines")]
struct Cli {
    /// White engine, e.g. "minimax:hard" or "heuristic:easy"
    #[arg(default_value = "minimax:medium")]
    white: Player,

    /// Black engine
    #[arg(default_value = "heuristic:medium")]
    black: Player,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Print every move as it is played
    #[arg(short, long)]
    verbose: bool,
}

fn play_game(white: Player, black: Player, verbose: bool) -> Option<String> {
    let mut state = GameState::new(GameMode::Bot);

    for ply in 0..MAX_PLIES {
        if state.checkmate {
            break;
        }

        let player = match state.turn {
            Color::White => white,
            Color::Black => black,
        };

        let Some(m) = player.pick(&state) else {
            println!("{} has no moves after {} plies", state.turn, ply);
            return None;
        };

        state = match state.apply_move(m.from, m.to, m.promotion) {
            Ok(next) => next,
            Err(e) => {
                // An engine handing back an inapplicable move is a bug
                // worth surfacing, not papering over.
                tracing::error!("{} produced {}: {}", state.turn, m, e);
                return None;
            }
        };

        if verbose {
            println!("{:3}. {} {}", ply + 1, m.piece.color, m);
        }
    }

    state.game_result()
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    println!("{} vs {}, {} game(s)", cli.white, cli.black, cli.games);

    let mut white_wins = 0u32;
    let mut black_wins = 0u32;
    let mut unfinished = 0u32;

    for game in 1..=cli.games {
        match play_game(cli.white, cli.black, cli.verbose) {
            Some(result) => {
                println!("game {}: {}", game, result);
                if result.starts_with("White") {
                    white_wins += 1;
                } else {
                    black_wins += 1;
                }
            }
            None => {
                println!("game {}: unfinished", game);
                unfinished += 1;
            }
        }
    }

    println!(
        "final: white {} / black {} / unfinished {}",
        white_wins, black_wins, unfinished
    );
}
