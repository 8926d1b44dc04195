//! Mastermind - CLI
//!
//! Play Mastermind in the terminal, or let the candidate-elimination solver
//! crack codes and measure how it performs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        PlayOptions, SolveConfig, random_secrets, run_benchmark, run_play, run_test_all,
        solve_code,
    },
    core::{DEFAULT_COLORS, Palette},
    game::{DEFAULT_LENGTH, DEFAULT_MAX_GUESSES, GameConfig},
    output::{print_benchmark_result, print_solve_result, print_test_all_statistics},
    solver::OpeningType,
};
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with an automated codebreaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Comma separated color names, in order
    #[arg(short, long, global = true, value_delimiter = ',', default_values_t = DEFAULT_COLORS.map(String::from))]
    palette: Vec<String>,

    /// Number of colors in a code (1-12)
    #[arg(short, long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Opening guess policy: split (default), first, random
    #[arg(short, long, global = true, default_value = "split")]
    opening: String,

    /// Log solver and session decisions
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Let the AI crack a specific code
    Solve {
        /// The secret, as color names
        #[arg(required = true, num_args = 1..)]
        secret: Vec<String>,
    },

    /// Play the AI against random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible secrets
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play the AI against every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let palette = Palette::new(&cli.palette).context("Invalid palette")?;
    let config =
        GameConfig::new(palette, cli.length, cli.guesses).context("Invalid game settings")?;
    let opening = OpeningType::from_name(&cli.opening);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, opening),
        Commands::Solve { secret } => run_solve_command(config, opening, &secret, cli.verbose),
        Commands::Benchmark { count, seed } => run_benchmark_command(&config, opening, count, seed),
        Commands::TestAll { limit } => run_test_all_command(&config, opening, limit),
    }
}

fn run_play_command(config: GameConfig, opening: OpeningType) -> Result<()> {
    let options = PlayOptions { config, opening };
    run_play(&options, &mut io::stdin().lock())?;
    Ok(())
}

fn run_solve_command(
    config: GameConfig,
    opening: OpeningType,
    secret: &[String],
    verbose: bool,
) -> Result<()> {
    let secret = config
        .palette
        .parse_code(&secret.join(" "), config.length)
        .context("Invalid secret")?;

    let mut solve_config = SolveConfig::new(config, secret);
    solve_config.opening = opening;

    let result = solve_code(solve_config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    config: &GameConfig,
    opening: OpeningType,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!(
        "Running benchmark on {count} random secrets with opening '{}'...",
        opening.name()
    );

    let secrets = random_secrets(config, count, seed);
    let result = run_benchmark(config, &secrets, opening)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    config: &GameConfig,
    opening: OpeningType,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!(" Exhaustive Mastermind Solver Test ");
    println!("{}", "═".repeat(60));
    println!(
        "\nColors: {}   Length: {}   Opening: {}\n",
        config.palette,
        config.length,
        opening.name()
    );

    let stats = run_test_all(config, limit, opening, true)?;
    print_test_all_statistics(&stats, &config.palette);
    Ok(())
}
