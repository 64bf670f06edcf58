//! ChessTree: fixed-depth alpha-beta search over chess positions.

use std::io;
use std::process::ExitCode;

use chess_tree::engine::eval::Evaluation;
use chess_tree::engine::search::{check_depth, SearchConfig, Searcher, DEFAULT_DEPTH, MAX_DEPTH};
use chess_tree::rules::{Notation, Rules, ShakmatyRules, STARTING_FEN};
use chess_tree::{SearchError, UCI};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Fixed-depth alpha-beta chess search")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Print the best move for the side to move.
    BestMove {
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,

        #[arg(short, long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
        depth: i32,

        /// Output notation: uci or san.
        #[arg(long, default_value = "uci")]
        notation: Notation,

        /// Moves (UCI) to play from the FEN before searching.
        #[arg(long, num_args = 1..)]
        moves: Vec<String>,

        #[arg(long, default_value = "material")]
        eval: Evaluation,
    },
    /// Print the static evaluation of a position.
    Eval {
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,

        #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(..=MAX_DEPTH as i64))]
        depth: u32,
    },
    /// Run the UCI loop on stdin/stdout.
    Uci {
        #[arg(short, long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
        depth: i32,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn best_move(fen: &str, moves: &[String], config: &SearchConfig) -> Result<Option<String>, SearchError> {
    let rules = ShakmatyRules::new();
    check_depth(config.depth)?;
    let mut pos = rules.parse_position(fen)?;
    for mv in moves {
        pos = rules.play_notation(&pos, mv, Notation::Uci)?;
    }

    let mut searcher = Searcher::new(rules).with_evaluation(config.evaluation);
    let best = searcher.find_best_move_in(&pos, config.depth)?;
    Ok(best.map(|mv| rules.format_move(&pos, &mv, config.notation)))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Some(SubCommands::BestMove { fen, depth, notation, moves, eval }) => {
            let config = SearchConfig { depth, notation, evaluation: eval };
            match best_move(&fen, &moves, &config) {
                Ok(Some(mv)) => println!("{mv}"),
                Ok(None) => println!("(none)"),
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Some(SubCommands::Eval { fen, depth }) => {
            let rules = ShakmatyRules::new();
            match rules.parse_position(&fen) {
                Ok(pos) => println!("{}", chess_tree::evaluate(&rules, &pos, depth)),
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Some(SubCommands::Uci { depth }) => return run_uci(depth),
        None => return run_uci(DEFAULT_DEPTH),
    }

    ExitCode::SUCCESS
}

fn run_uci(depth: i32) -> ExitCode {
    if let Err(err) = check_depth(depth) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let config = SearchConfig { depth, ..SearchConfig::default() };
    let mut uci = UCI::with_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = uci.run(stdin.lock(), &mut stdout) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
