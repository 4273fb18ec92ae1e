//! Waffle Solver - CLI
//!
//! Generate, play and solve Waffle puzzles from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use waffle_solver::{
    commands::{
        BenchmarkConfig, PathConfig, find_path, generate_puzzle, run_benchmark, run_play,
        solve_puzzle,
    },
    core::{FeedbackMatrix, Grid, Word},
    logging::init_logger,
    output::{print_benchmark_result, print_generate_result, print_path, print_solve_result},
    path::SearchMode,
    solver::PuzzleConfig,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "waffle_solver",
    about = "Waffle puzzle generator and solver using constraint propagation and A* swap search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Enable debug logging and show intermediate grids
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a shuffled puzzle
    Generate {
        /// Number of random swaps to apply
        #[arg(short, long, default_value = "10")]
        swaps: usize,

        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,

        /// Also print the solution
        #[arg(short, long)]
        reveal: bool,
    },

    /// Recover the words from a shuffled grid and its feedback
    Solve {
        /// 21 letters in reading order, holes omitted
        shuffled: String,

        /// 21 feedback digits: 0 exact, 1 misplaced, 2 absent
        feedback: String,

        /// Use plain A* for a guaranteed minimal swap count
        #[arg(short, long)]
        exhaustive: bool,
    },

    /// Find the swaps turning one grid into another
    Path {
        /// Starting 21 letters
        start: String,

        /// Goal 21 letters
        goal: String,

        /// Feedback of the start grid, checked before searching
        #[arg(short, long)]
        feedback: Option<String>,

        /// Use plain A* for a guaranteed minimal swap count
        #[arg(short, long)]
        exhaustive: bool,
    },

    /// Play interactively
    Play {
        /// Number of random swaps to apply
        #[arg(short, long, default_value = "10")]
        swaps: usize,

        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Moves allowed before the puzzle is lost
        #[arg(short, long, default_value = "15")]
        moves: usize,
    },

    /// Benchmark generation, inference and pathfinding
    Benchmark {
        /// Number of puzzles to run
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Number of random swaps per puzzle
        #[arg(short, long, default_value = "10")]
        swaps: usize,

        /// Seed of the first puzzle
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

const fn search_mode(exhaustive: bool) -> SearchMode {
    if exhaustive {
        SearchMode::Exhaustive
    } else {
        SearchMode::PerfectMove
    }
}

fn parse_grid(text: &str) -> Result<Grid> {
    text.parse()
        .with_context(|| format!("invalid grid {text:?}"))
}

fn parse_feedback(text: &str) -> Result<FeedbackMatrix> {
    text.parse()
        .with_context(|| format!("invalid feedback {text:?}"))
}

fn puzzle_config(swaps: usize, seed: Option<u64>) -> PuzzleConfig {
    let config = PuzzleConfig::default().with_swaps(swaps);
    seed.map_or(config, |seed| config.with_seed(seed))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let words = load_words(&cli.wordlist)?;
    log::debug!("using {} words", words.len());

    match cli.command {
        Commands::Generate {
            swaps,
            seed,
            reveal,
        } => {
            let result = generate_puzzle(&words, &puzzle_config(swaps, seed))?;
            print_generate_result(&result, reveal);
        }
        Commands::Solve {
            shuffled,
            feedback,
            exhaustive,
        } => {
            let shuffled = parse_grid(&shuffled)?;
            let feedback = parse_feedback(&feedback)?;
            let result = solve_puzzle(&words, shuffled, feedback, search_mode(exhaustive))?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Path {
            start,
            goal,
            feedback,
            exhaustive,
        } => {
            let config = PathConfig {
                start: parse_grid(&start)?,
                goal: parse_grid(&goal)?,
                feedback: feedback.as_deref().map(parse_feedback).transpose()?,
                mode: search_mode(exhaustive),
            };
            let path = find_path(&config)?;
            print_path(&path, cli.verbose);
        }
        Commands::Play { swaps, seed, moves } => {
            let config = puzzle_config(swaps, seed).with_max_moves(moves);
            run_play(&words, &config)?;
        }
        Commands::Benchmark { count, swaps, seed } => {
            println!("Running benchmark on {count} puzzles with {swaps} swaps each...");
            let config = BenchmarkConfig { count, swaps, seed };
            let result = run_benchmark(&words, &config, true);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
