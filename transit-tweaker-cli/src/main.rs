use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use transit_tweaker::{
    CONFIG_RELATIVE_PATH, DatabaseTables, FileConfigLoader, LogFacade, TransitTweakerMod,
    TweakSummary, TweakerConfig,
};

#[derive(Debug, Parser)]
#[command(name = "transit-tweaker", version)]
#[command(about = "Apply Transit Tweaker settings to an exported server database")]
struct Args {
    /// Server database tables as JSON
    #[arg(long, required_unless_present = "check")]
    database: Option<PathBuf>,

    /// Mod configuration (JSON5)
    #[arg(long, default_value = CONFIG_RELATIVE_PATH)]
    config: PathBuf,

    /// Optional path to write the tweaked tables instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Validate the configuration, print it and exit
    #[arg(long)]
    check: bool,

    /// Print every change even if the config has debug off
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    if args.check {
        return check_config(&args);
    }

    announce_banner();

    let database = args
        .database
        .as_deref()
        .context("--database is required unless --check is given")?;
    let mut tables = read_tables(database)?;

    let force_debug = args.debug;
    let mut tweak_mod = TransitTweakerMod::new(FileConfigLoader::new(&args.config));
    let summary = tweak_mod
        .run(&mut tables, &LogFacade, |config| {
            let debug = config.debug || force_debug;
            config.with_debug(debug)
        })
        .with_context(|| format!("applying {}", args.config.display()))?;

    let json = tables.to_json_pretty().context("serializing tweaked tables")?;
    let mut out = open_output(args.output.as_deref())?;
    writeln!(out, "{json}")?;
    out.flush()?;

    announce_summary(&summary);
    Ok(())
}

fn init_logging(args: &Args) {
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn check_config(args: &Args) -> Result<()> {
    let config = TweakerConfig::load(&args.config)
        .with_context(|| format!("checking {}", args.config.display()))?;
    log::info!("{} is valid", args.config.display());
    let mut out = open_output(args.output.as_deref())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
    out.flush()?;
    Ok(())
}

fn read_tables(path: &Path) -> Result<DatabaseTables> {
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    DatabaseTables::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
}

fn announce_banner() {
    eprintln!("{}", "🚚 Transit Tweaker".bright_cyan().bold());
    eprintln!("{}", "==================".cyan());
}

fn announce_summary(summary: &TweakSummary) {
    eprintln!(
        "✅ {} prices, {} fence levels, {} transits adjusted ({} maps without transits)",
        summary.prices_adjusted.to_string().green(),
        summary.fence_levels.to_string().green(),
        summary.transits_scaled.to_string().green(),
        summary.locations_skipped.to_string().yellow(),
    );
}

/// Tables and `--check` output go to `path`, or to stdout when none is given.
fn open_output(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(stdout()),
    };
    Ok(BufWriter::new(sink))
}
