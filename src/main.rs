//! Console driver: human vs engine, or engine vs engine.
//!
//! Reads long algebraic moves (`e2e4`, `e7e8q`) and a handful of commands
//! from stdin. Engine turns run through `spawn_search` on a worker thread.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use plum_negamax::chess_errors::ChessResult;
use plum_negamax::engines::engine_negamax::NegamaxEngine;
use plum_negamax::engines::engine_trait::Engine;
use plum_negamax::game_state::chess_types::Color;
use plum_negamax::game_state::game_state::GameState;
use plum_negamax::move_generation::legal_move_generator::{game_status, legal_moves};
use plum_negamax::search::background::spawn_search;
use plum_negamax::search::negamax::{SearchConfig, DEFAULT_SEARCH_DEPTH};
use plum_negamax::utils::long_algebraic::long_algebraic_to_move;
use plum_negamax::utils::move_notation::move_notation;
use plum_negamax::utils::render_game_state::render_game_state;

#[derive(Debug, Parser)]
#[command(name = "plum_negamax", version, about = "Fixed-depth negamax chess engine")]
struct Cli {
    /// Search depth in plies.
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    /// Seed for the engine's move shuffling.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from this position instead of the initial one.
    #[arg(long)]
    fen: Option<String>,

    /// Which side the human plays.
    #[arg(long, value_enum, default_value_t = HumanSide::White)]
    human: HumanSide,

    /// Stop an engine-only game after this many plies.
    #[arg(long, default_value_t = 300)]
    max_plies: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    White,
    Black,
    None,
}

impl HumanSide {
    fn plays(self, color: Color) -> bool {
        matches!(
            (self, color),
            (HumanSide::White, Color::Light) | (HumanSide::Black, Color::Dark)
        )
    }
}

enum Command {
    Move(String),
    Undo,
    New,
    Moves,
    Fen,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        Some(match line {
            "" => return None,
            "undo" => Command::Undo,
            "new" => Command::New,
            "moves" => Command::Moves,
            "fen" => Command::Fen,
            "quit" | "exit" => Command::Quit,
            text => Command::Move(text.to_owned()),
        })
    }
}

struct Session {
    start: GameState,
    game: GameState,
    engine: Arc<Mutex<NegamaxEngine>>,
    human: HumanSide,
    max_plies: usize,
}

impl Session {
    fn new(cli: &Cli) -> ChessResult<Self> {
        let start = match &cli.fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new_game(),
        };
        let engine = NegamaxEngine::new(SearchConfig {
            depth: cli.depth,
            seed: cli.seed,
        });
        info!(engine = engine.name(), depth = cli.depth, "engine ready");

        Ok(Self {
            game: start.clone(),
            start,
            engine: Arc::new(Mutex::new(engine)),
            human: cli.human,
            max_plies: cli.max_plies,
        })
    }

    fn run(&mut self) -> ChessResult<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            println!("\n{}", render_game_state(&self.game));

            let status = game_status(&self.game)?;
            if status.is_terminal() {
                println!("Game over: {status}");
                if self.human == HumanSide::None {
                    return Ok(());
                }
            } else if !self.human.plays(self.game.side_to_move) {
                if self.human == HumanSide::None && self.game.ply() >= self.max_plies {
                    println!("Stopping after {} plies", self.max_plies);
                    return Ok(());
                }
                self.engine_turn()?;
                continue;
            }

            print!("{} to move> ", side_name(self.game.side_to_move));
            io::stdout().flush().ok();
            // End of input or an unreadable stdin ends the session.
            let Some(Ok(line)) = lines.next() else {
                return Ok(());
            };
            let Some(command) = Command::parse(&line) else {
                continue;
            };

            match command {
                Command::Quit => return Ok(()),
                Command::New => self.new_game(),
                Command::Undo => self.undo_pair(),
                Command::Moves => self.print_moves()?,
                Command::Fen => println!("{}", self.game.get_fen()),
                Command::Move(_) if status.is_terminal() => {
                    println!("The game is over; use `new` or `undo`");
                }
                Command::Move(text) => self.human_move(&text)?,
            }
        }
    }

    fn engine_turn(&mut self) -> ChessResult<()> {
        let output = spawn_search(Arc::clone(&self.engine), &self.game).wait()?;
        for line in &output.info_lines {
            info!("{line}");
        }
        let Some(mv) = output.best_move else {
            return Ok(());
        };
        let side = self.game.side_to_move;
        self.game.apply(mv)?;
        println!("{} plays {}", side_name(side), move_notation(&mv));
        Ok(())
    }

    fn human_move(&mut self, text: &str) -> ChessResult<()> {
        let result =
            long_algebraic_to_move(text, &self.game).and_then(|mv| self.game.apply(mv).map(|_| mv));
        match result {
            Ok(mv) => println!("You play {}", move_notation(&mv)),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    /// Take back the engine's reply and the human move before it.
    fn undo_pair(&mut self) {
        let plies = if self.human.plays(self.game.side_to_move) { 2 } else { 1 };
        for _ in 0..plies {
            if let Err(err) = self.game.undo_last() {
                println!("{err}");
                break;
            }
        }
    }

    fn new_game(&mut self) {
        self.game = self.start.clone();
        if let Ok(mut engine) = self.engine.lock() {
            engine.new_game();
        }
        info!("new game");
    }

    fn print_moves(&self) -> ChessResult<()> {
        let mut moves: Vec<String> = legal_moves(&self.game)?
            .iter()
            .map(|mv| mv.to_long_algebraic())
            .collect();
        moves.sort();
        println!("{} legal moves: {}", moves.len(), moves.join(" "));
        Ok(())
    }
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::Light => "White",
        Color::Dark => "Black",
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = match Session::new(&cli) {
        Ok(session) => session,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    loop {
        match session.run() {
            Ok(()) => return ExitCode::SUCCESS,
            Err(err) if err.is_fatal() => {
                warn!("{err}; starting a new game");
                session.new_game();
            }
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }
}
