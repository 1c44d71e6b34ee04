//! scoresheet CLI - statistics table recovery from exported match reports

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use scoresheet::{Extraction, Outcome, Scoresheet};

#[derive(Parser)]
#[command(name = "scoresheet")]
#[command(version)]
#[command(about = "Extract per-player statistics tables from match reports", long_about = None)]
struct Cli {
    /// Free-text team name filter
    #[arg(short, long, value_name = "NAME", global = true)]
    team: Option<String>,

    /// Canonical team literal used when no filter is given
    #[arg(long, value_name = "NAME", env = "SCORESHEET_TEAM", global = true)]
    team_literal: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cleaned text of the team block
    Text {
        /// Input report (PDF, DOCX, or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Print the fixed-width statistics table
    Table {
        /// Input report (PDF, DOCX, or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Print the player names, one per line
    Names {
        /// Input report (PDF, DOCX, or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Print one player's statistics as JSON
    Stats {
        /// Input report (PDF, DOCX, or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Player name (case- and diacritic-insensitive)
        #[arg(value_name = "PLAYER")]
        player: String,
    },
    /// Print the block report or per-row token matrix
    Debug {
        /// Input report (PDF, DOCX, or plain text)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show the per-row token matrix instead of the block report
        #[arg(long)]
        tokens: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn extract(cli: &Cli, input: &Path) -> Result<Extraction, Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let mut builder = Scoresheet::new().with_filter_opt(cli.team.as_deref());
    if let Some(literal) = &cli.team_literal {
        builder = builder.with_team_literal(literal.clone());
    }
    let extraction = builder.extract(&data)?;

    match extraction.outcome {
        Outcome::NotFound => eprintln!("{}", "no team block found".yellow()),
        Outcome::Degraded => eprintln!(
            "{}",
            "statistics header missing, using default column offsets".yellow()
        ),
        Outcome::Found => {}
    }
    Ok(extraction)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Text { input } => {
            let extraction = extract(&cli, input)?;
            println!("{}", extraction.clean_text());
        }
        Commands::Table { input } => {
            let extraction = extract(&cli, input)?;
            println!("{}", extraction.ascii_table());
        }
        Commands::Names { input } => {
            let extraction = extract(&cli, input)?;
            for name in extraction.player_names() {
                println!("{name}");
            }
        }
        Commands::Stats { input, player } => {
            let extraction = extract(&cli, input)?;
            let stats = extraction.stats_for(player);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Debug { input, tokens } => {
            let extraction = extract(&cli, input)?;
            if *tokens {
                for row in extraction.token_matrix() {
                    println!("{row}");
                }
            } else {
                print!("{}", extraction.block_report());
            }
        }
    }
    Ok(())
}
