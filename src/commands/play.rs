//! Interactive game
//!
//! Terminal front end for the session: asks for players, roles and codes,
//! re-prompting until the input validates, and prints every round.

use crate::core::{Code, Palette};
use crate::game::{
    AiCodebreaker, Codebreaker, GameConfig, GameDisplay, GameSession, Outcome, Players,
    RoundReport, Turn,
};
use crate::output::formatters::{colored_code, feedback_pegs};
use crate::solver::OpeningType;
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Settings for an interactive game
pub struct PlayOptions {
    pub config: GameConfig,
    pub opening: OpeningType,
}

/// Run one interactive game reading answers from `reader`
///
/// # Errors
///
/// Returns an error if input ends early, on I/O failure, or if the game core
/// reports an inconsistency.
pub fn run_play<R: BufRead>(options: &PlayOptions, reader: &mut R) -> Result<Outcome> {
    let config = &options.config;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        M A S T E R M I N D                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Colors: {}   Code length: {}   Guesses: {}\n",
        config.palette, config.length, config.max_guesses
    );

    let players = read_players(reader)?;
    if players.codebreaker.is_ai() {
        config.check_solvable()?;
    }

    let secret = if players.mastermind.is_ai() {
        Code::random(&config.palette, config.length, &mut rand::rng())
    } else {
        println!("{}", config.palette);
        read_code(
            reader,
            &config.palette,
            config.length,
            &format!(
                "{}, pick {} colors for {} to guess",
                players.mastermind, config.length, players.codebreaker
            ),
        )?
    };

    let mut session = GameSession::new(config.clone(), secret)?;
    let mut display = TerminalDisplay::new(config.palette.clone(), config.length);

    if players.codebreaker.is_ai() {
        let mut ai =
            AiCodebreaker::new(config, options.opening)?.with_name(&players.codebreaker.name);
        session.run(&mut ai, &mut display)
    } else {
        let mut human = HumanCodebreaker {
            name: players.codebreaker.name.clone(),
            palette: config.palette.clone(),
            length: config.length,
            reader,
        };
        session.run(&mut human, &mut display)
    }
}

/// Ask who plays and who is the mastermind
///
/// # Errors
///
/// Returns an error if input ends before the roles are settled.
pub fn read_players<R: BufRead>(reader: &mut R) -> Result<Players> {
    let against_ai = read_yes_no(reader, "Play against the AI? (yes/no)")?;
    let first = read_name(reader, "First player, please enter your name")?;

    if against_ai {
        let mastermind = read_yes_no(reader, "Do you want to be the MASTERMIND? (yes/no)")?;
        return Ok(Players::against_ai(first, mastermind));
    }

    let second = read_name(reader, "Second player, please enter your name")?;
    let prompt = format!("Who is the MASTERMIND, 1 ({first}) or 2 ({second})?");
    loop {
        match prompt_line(reader, &prompt)?.as_str() {
            "1" => return Ok(Players::humans(first, second, true)),
            "2" => return Ok(Players::humans(first, second, false)),
            _ => println!("Please answer 1 or 2."),
        }
    }
}

/// Read a code, re-prompting until it validates
///
/// # Errors
///
/// Returns an error if input ends before a valid code is entered.
pub fn read_code<R: BufRead>(
    reader: &mut R,
    palette: &Palette,
    length: usize,
    prompt: &str,
) -> Result<Code> {
    loop {
        let line = prompt_line(reader, prompt)?;
        match palette.parse_code(&line, length) {
            Ok(code) => return Ok(code),
            Err(e) => println!("❌ {e}. Choose from: {palette}"),
        }
    }
}

fn read_yes_no<R: BufRead>(reader: &mut R, prompt: &str) -> Result<bool> {
    loop {
        match prompt_line(reader, prompt)?.to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Please answer yes or no."),
        }
    }
}

fn read_name<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    loop {
        let name = prompt_line(reader, prompt)?;
        if !name.is_empty() {
            return Ok(name);
        }
    }
}

/// Get user input with a prompt
fn prompt_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        bail!("Input closed");
    }
    Ok(input.trim().to_string())
}

/// Human codebreaker typing guesses on the terminal
struct HumanCodebreaker<'r, R: BufRead> {
    name: String,
    palette: Palette,
    length: usize,
    reader: &'r mut R,
}

impl<R: BufRead> Codebreaker for HumanCodebreaker<'_, R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_guess(&mut self, turn: Turn<'_>) -> Result<Code> {
        println!("\n{} guesses left", turn.guesses_left);
        let prompt = format!("{}, enter {} colors", self.name, self.length);
        read_code(&mut *self.reader, &self.palette, self.length, &prompt)
    }
}

/// Prints rounds and the final outcome
pub struct TerminalDisplay {
    palette: Palette,
    length: usize,
}

impl TerminalDisplay {
    #[must_use]
    pub const fn new(palette: Palette, length: usize) -> Self {
        Self { palette, length }
    }
}

impl GameDisplay for TerminalDisplay {
    fn round_scored(&mut self, report: &RoundReport<'_>) {
        let feedback = report.round.feedback;
        println!(
            "Round {:>2}: {} {}  {} guessed {} colors correctly, {} with their positions ({} guesses left)",
            report.number,
            colored_code(&self.palette, &report.round.guess),
            feedback_pegs(feedback, self.length),
            report.codebreaker,
            feedback.color_matches,
            feedback.exact_matches,
            report.guesses_left
        );
    }

    fn finished(&mut self, outcome: &Outcome) {
        println!();
        if outcome.is_victory() {
            println!(
                "{}",
                format!(
                    "🎉 {} cracked the code in {} {}!",
                    outcome.codebreaker,
                    outcome.rounds,
                    if outcome.rounds == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        } else {
            println!(
                "{}",
                format!("❌ {} is out of guesses!", outcome.codebreaker)
                    .red()
                    .bold()
            );
            println!(
                "   The code was: {}",
                colored_code(&self.palette, &outcome.secret)
            );
        }
    }
}
