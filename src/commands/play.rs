//! Interactive play mode
//!
//! Text-based game loop: the player swaps cells by number until the grid
//! is solved or the move budget runs out.

use crate::core::Word;
use crate::output::formatters::cell_index_rows;
use crate::output::grid_lines;
use crate::solver::{Puzzle, PuzzleConfig};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { moves_used: usize },
    Lost,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Swap(usize, usize),
    Hint,
    Help,
    Quit,
}

/// Run play mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// word list cannot form a waffle.
pub fn run_play(words: &[Word], config: &PuzzleConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_with(words, config, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Run play mode over arbitrary input and output streams
///
/// Seeded configurations give game `n` the seed `seed + n`, so a session
/// replays identically. Returns the outcome of the last game played.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// word list cannot form a waffle.
pub fn run_play_with<R: BufRead, W: Write>(
    words: &[Word],
    config: &PuzzleConfig,
    input: &mut R,
    out: &mut W,
) -> Result<GameOutcome> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Waffle - Interactive Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    print_help(out)?;

    let mut game = 0u64;
    loop {
        let game_config = match config.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(game)),
            None => *config,
        };
        let mut puzzle = Puzzle::generate(words, &game_config)?;
        let outcome = play_game(&mut puzzle, config.max_moves, input, out)?;

        if outcome == GameOutcome::Quit {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(outcome);
        }

        let again = read_line(input, out, "Play again? (yes/no)")?;
        if matches!(again.as_deref(), Some("yes" | "y")) {
            game += 1;
            writeln!(out, "\n🔄 New game started!\n")?;
            continue;
        }
        writeln!(out, "\n👋 Thanks for playing!\n")?;
        return Ok(outcome);
    }
}

fn play_game<R: BufRead, W: Write>(
    puzzle: &mut Puzzle,
    max_moves: usize,
    input: &mut R,
    out: &mut W,
) -> Result<GameOutcome> {
    loop {
        render(puzzle, out)?;

        if puzzle.is_won() {
            let moves_used = max_moves - puzzle.moves_left();
            writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "      🧇  W A F F L E   S O L V E D !  🧇      "
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                out,
                "\n  Solved with {} {} to spare\n",
                puzzle.moves_left().to_string().bright_cyan().bold(),
                if puzzle.moves_left() == 1 { "move" } else { "moves" }
            )?;
            return Ok(GameOutcome::Won { moves_used });
        }

        if puzzle.is_lost() {
            writeln!(out, "\n{}", "❌ Out of moves!".red().bold())?;
            writeln!(out, "   The words were: {}\n", puzzle.solution())?;
            return Ok(GameOutcome::Lost);
        }

        let Some(line) = read_line(input, out, "Swap (e.g. '3 9'), 'hint', 'help' or 'quit'")? else {
            return Ok(GameOutcome::Quit);
        };

        match parse_command(&line) {
            Some(Command::Quit) => return Ok(GameOutcome::Quit),
            Some(Command::Help) => print_help(out)?,
            Some(Command::Hint) => match puzzle.hint() {
                Ok(Some((a, b))) => writeln!(out, "💡 Try swapping {a} and {b}\n")?,
                Ok(None) => writeln!(out, "Already solved!\n")?,
                Err(err) => writeln!(out, "❌ {err}\n")?,
            },
            Some(Command::Swap(a, b)) => {
                if let Err(err) = puzzle.swap(a, b) {
                    writeln!(out, "❌ {err}\n")?;
                }
            }
            None => writeln!(out, "❌ Unrecognized input! Type 'help' for commands.\n")?,
        }
    }
}

fn render<W: Write>(puzzle: &Puzzle, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60))?;
    for line in grid_lines(puzzle.grid(), puzzle.feedback()) {
        writeln!(out, "   {line}")?;
    }
    writeln!(
        out,
        "\n   Moves left: {}",
        puzzle.moves_left().to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60))
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Swap two letters by typing their cell numbers:\n")?;
    for row in cell_index_rows() {
        writeln!(out, "   {row}")?;
    }
    writeln!(out, "\nCorners and the centre never move.")?;
    writeln!(out, "Commands: 'hint' for a suggested swap, 'quit' to exit\n")
}

fn parse_command(line: &str) -> Option<Command> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Some(Command::Quit),
        "hint" | "h" => return Some(Command::Hint),
        "help" | "?" => return Some(Command::Help),
        _ => {}
    }

    let mut cells = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>);
    match (cells.next(), cells.next(), cells.next()) {
        (Some(Ok(a)), Some(Ok(b)), None) => Some(Command::Swap(a, b)),
        _ => None,
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
