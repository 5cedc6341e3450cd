use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tka::{EngineConfig, OverrideStore, PictographData, Positioner};

#[derive(Parser, Debug)]
#[command(name = "tka", version, about = "TKA pictograph positioning engine")]
struct Cli {
    /// Log engine decisions (debug level). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the letter type of a letter.
    Classify(ClassifyArgs),
    /// Print the turns tuple and mirrored tuple of every beat.
    Turns(TurnsArgs),
    /// Position every beat and write the result as JSON.
    Position(PositionArgs),
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Letter glyph, e.g. `A`, `W-`, `Λ-`.
    letter: String,
}

#[derive(Parser, Debug)]
struct TurnsArgs {
    /// Input beats JSON (array of pictographs).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PositionArgs {
    /// Input beats JSON (array of pictographs).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Special-placement JSON; replaces the config's `overrides`.
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Classify(args) => cmd_classify(args),
        Command::Turns(args) => cmd_turns(args),
        Command::Position(args) => cmd_position(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn read_beats(path: &Path) -> anyhow::Result<Vec<PictographData>> {
    let f = File::open(path).with_context(|| format!("open beats '{}'", path.display()))?;
    let beats: Vec<PictographData> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse beats '{}'", path.display()))?;
    for (i, beat) in beats.iter().enumerate() {
        beat.validate()
            .with_context(|| format!("beat {i} ('{}')", beat.letter))?;
    }
    Ok(beats)
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let letter_type = tka::classify(&args.letter)?;
    println!("{letter_type:?}\t{letter_type}");
    Ok(())
}

fn cmd_turns(args: TurnsArgs) -> anyhow::Result<()> {
    let beats = read_beats(&args.in_path)?;
    for (i, beat) in beats.iter().enumerate() {
        let turns =
            tka::generate(beat).with_context(|| format!("beat {i} ('{}')", beat.letter))?;
        let mirrored = match beat.red.as_ref() {
            Some(red) => tka::generate_mirrored(red, beat)?,
            None => None,
        };
        let mirrored = mirrored.map_or_else(|| "-".to_string(), |t| t.to_string());
        println!("{}\t{turns}\t{mirrored}", beat.letter);
    }
    Ok(())
}

fn cmd_position(args: PositionArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if let Some(path) = args.overrides {
        config.overrides = Some(path);
    }
    config.validate()?;

    let store = match &config.overrides {
        Some(path) => {
            let store = OverrideStore::from_path(path);
            store
                .load()
                .with_context(|| format!("load special placements '{}'", path.display()))?;
            store
        }
        None => OverrideStore::empty(),
    };
    let positioner = Positioner::new(config, Arc::new(store));

    let beats = read_beats(&args.in_path)?;
    let positioned = positioner.position_sequence(&beats)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            serde_json::to_writer_pretty(f, &positioned)
                .with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), &positioned)?;
            println!();
        }
    }
    Ok(())
}
