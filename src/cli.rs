//! CLI argument parsing for the hunt generator.
//!
//! The CLI only loads clues, picks the random source, and writes results; the
//! sequencing rules live in the library.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hunt",
    version,
    about = "Generate collision-free scavenger hunt paths for competing groups",
    after_help = "Commands:\n  init --clues <file>                 Write a sample clue file (TSV)\n  check --clues <file>                Summarize a clue file\n  generate --clues <file> --groups N  Generate one path per group as JSON\n\nClue files are tab-separated (question, location, Person/Place) or a .json array.\nThe last clue is the shared final step for every group.\n\nExamples:\n  hunt init --clues clues.tsv\n  hunt generate --clues clues.tsv --groups 3 --seed 42\n  hunt generate --clues clues.json --groups 4 --out hunt.json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Check(CheckArgs),
    Generate(GenerateArgs),
}

/// Init command inputs for writing the sample clue pool.
#[derive(Parser, Debug)]
#[command(about = "Write a sample clue file")]
pub struct InitArgs {
    /// Destination clue file
    #[arg(long, value_name = "PATH")]
    pub clues: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Summarize a clue file without generating")]
pub struct CheckArgs {
    /// Clue file (TSV or .json)
    #[arg(long, value_name = "PATH")]
    pub clues: PathBuf,
}

/// Generate command inputs.
#[derive(Parser, Debug)]
#[command(about = "Generate one clue path per group")]
pub struct GenerateArgs {
    /// Clue file (TSV or .json)
    #[arg(long, value_name = "PATH")]
    pub clues: PathBuf,

    /// Number of competing groups
    #[arg(long, value_name = "N")]
    pub groups: usize,

    /// Random seed for reproducible paths
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Optional JSON config overriding attempt bound and step wording
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output path for the generated hunt JSON (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Emit debug logging to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Command {
    pub fn verbose(&self) -> bool {
        match self {
            Command::Generate(args) => args.verbose,
            Command::Init(_) | Command::Check(_) => false,
        }
    }
}
