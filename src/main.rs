use anyhow::{anyhow, Context, Result};
use clap::Parser;
use hunt_gen::clue::{split_final, Category};
use hunt_gen::config::{default_config, load_config};
use hunt_gen::input::{load_clues, render_tsv, sample_rows};
use hunt_gen::output::{emit_json, write_text};
use hunt_gen::SequenceGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{CheckArgs, Command, GenerateArgs, InitArgs, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.command.verbose());

    match args.command {
        Command::Init(args) => cmd_init(args),
        Command::Check(args) => cmd_check(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn cmd_init(args: InitArgs) -> Result<()> {
    if args.clues.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            args.clues.display()
        ));
    }
    write_text(&args.clues, &render_tsv(&sample_rows()))?;
    println!("Wrote sample clues to {}", args.clues.display());
    println!("Columns: question, location, category (Person/Place). The last row is the final clue.");
    Ok(())
}

#[derive(Serialize)]
struct ClueSummary {
    total: usize,
    randomizable: usize,
    person: usize,
    place: usize,
    untyped: usize,
    final_clue: String,
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let clues = load_clues(&args.clues)?;
    let (final_clue, pool) =
        split_final(&clues).ok_or_else(|| anyhow!("no clues found in {}", args.clues.display()))?;
    let summary = ClueSummary {
        total: clues.len(),
        randomizable: pool.len(),
        person: clues.iter().filter(|clue| clue.is(Category::Person)).count(),
        place: clues.iter().filter(|clue| clue.is(Category::Place)).count(),
        untyped: clues.iter().filter(|clue| clue.category.is_none()).count(),
        final_clue: final_clue.question.clone(),
    };
    emit_json(&summary, None)
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => default_config(),
    };
    if args.groups == 0 || args.groups > config.max_groups {
        return Err(anyhow!(
            "--groups must be between 1 and {} (got {})",
            config.max_groups,
            args.groups
        ));
    }

    let clues = load_clues(&args.clues)?;
    tracing::info!(clues = clues.len(), groups = args.groups, "generating hunt");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let hunt = SequenceGenerator::new(clues, args.groups)
        .with_config(config)
        .generate(&mut rng)
        .with_context(|| format!("generate hunt from {}", args.clues.display()))?;

    emit_json(&hunt, args.out.as_deref())?;
    if let Some(out) = &args.out {
        eprintln!("Wrote {} group paths to {}", hunt.len(), out.display());
    }
    Ok(())
}
