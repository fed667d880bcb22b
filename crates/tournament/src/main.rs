//! Tournament CLI
//!
//! Run every country's league and print the qualifiers.

use anyhow::{bail, Context};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tournament::{run_tournament, QualifierSet, TournamentConfig};

fn print_usage() {
    println!("Multi-country Tournament");
    println!();
    println!("Usage:");
    println!("  tournament run [--workers N] [--config FILE] [--out DIR] [--seed S] [--summary FILE]");
    println!("  tournament report <summary FILE>");
    println!();
    println!("Options:");
    println!("  --workers N     Participating country workers (must equal the country count)");
    println!("  --config FILE   TOML overrides for the tournament shape");
    println!("  --out DIR       Root for logs_partidos_pais/ and tabla_puntuacion/");
    println!("  --seed S        Fixed base seed for a reproducible run");
    println!("  --summary FILE  Also write the qualifiers as JSON");
    println!();
    println!("Examples:");
    println!("  tournament run");
    println!("  tournament run --seed 42 --out out --summary out/qualifiers.json");
    println!("  tournament report out/qualifiers.json");
}

fn show_report(args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.first() else {
        print_usage();
        bail!("report requires a summary file");
    };
    QualifierSet::load(&PathBuf::from(path))?.print_report();
    Ok(())
}

fn option_value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", flag))
}

async fn run(args: &[String]) -> anyhow::Result<()> {
    let mut workers: Option<usize> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut output_dir: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut summary: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--workers" | "-w" => {
                let value = option_value(args, i, "--workers")?;
                workers = Some(
                    value
                        .parse::<usize>()
                        .with_context(|| format!("invalid worker count: {}", value))?,
                );
                i += 1;
            }
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(option_value(args, i, "--config")?));
                i += 1;
            }
            "--out" | "-o" => {
                output_dir = Some(PathBuf::from(option_value(args, i, "--out")?));
                i += 1;
            }
            "--seed" | "-s" => {
                let value = option_value(args, i, "--seed")?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .with_context(|| format!("invalid seed: {}", value))?,
                );
                i += 1;
            }
            "--summary" => {
                summary = Some(PathBuf::from(option_value(args, i, "--summary")?));
                i += 1;
            }
            other => bail!("unknown option: {}", other),
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::default(),
    };
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let workers = workers.unwrap_or(config.countries);
    let outcome = run_tournament(&config, workers).await?;

    outcome.qualifiers.print_report();

    if let Some(path) = summary {
        outcome.qualifiers.save(&path)?;
        info!(path = %path.display(), "qualifier summary written");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run(&[]).await,
        Some("run") => run(&args[2..]).await,
        Some("report") => show_report(&args[2..]),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(flag) if flag.starts_with('-') => run(&args[1..]).await,
        Some(command) => {
            print_usage();
            bail!("unknown command: {}", command)
        }
    }
}
