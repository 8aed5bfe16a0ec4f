use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use growunit_core::{analysis, codec, codec::WireFormat, report::SummaryWriter, validation};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;

use config::Catalog;

#[derive(Debug, Parser)]
#[command(name = "growunit", version, about = "Check and export grow unit configuration files")]
struct Cli {
    /// Default log level when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate every grow unit and print its footprint and volume.
    Check {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Write a CSV summary of all grow units, ordered by id.
    Export {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a single grow unit in wire form.
    Show {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        id: u64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

impl From<OutputFormat> for WireFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => WireFormat::Json,
            OutputFormat::Yaml => WireFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Check { paths } => check(&paths),
        Command::Export { paths, out } => export(&paths, &out),
        Command::Show { paths, id, format } => show(&paths, id, format.into()),
    }
}

fn check(paths: &[PathBuf]) -> Result<()> {
    let catalog = Catalog::load(paths)?;
    println!("--- Checking {} grow unit(s) ---", catalog.units.len());

    let mut failed = 0;
    for unit in catalog.units.values() {
        match validation::validate(unit) {
            Ok(()) => println!(
                "[ok]   #{} {}: footprint {}, volume {}",
                unit.id,
                unit.name,
                analysis::footprint_area(unit),
                analysis::volume(unit)
            ),
            Err(e) => {
                failed += 1;
                println!("[fail] #{} {}: {}", unit.id, unit.name, e);
            }
        }
    }

    if failed > 0 {
        bail!("{} grow unit(s) failed validation", failed);
    }
    Ok(())
}

fn export(paths: &[PathBuf], out: &Path) -> Result<()> {
    let catalog = Catalog::load(paths)?;
    let mut summary = SummaryWriter::from_path(out)?;
    for unit in catalog.units.values() {
        summary
            .write_unit(unit)
            .with_context(|| format!("Failed to export grow unit {}", unit.id))?;
    }

    println!(
        "Exported {} grow unit(s) to '{}'",
        catalog.units.len(),
        out.display()
    );
    Ok(())
}

fn show(paths: &[PathBuf], id: u64, format: WireFormat) -> Result<()> {
    let catalog = Catalog::load(paths)?;
    let Some(unit) = catalog.get(id) else {
        bail!("No grow unit with id {}", id);
    };

    println!("{}", codec::encode(format, unit)?);
    Ok(())
}
