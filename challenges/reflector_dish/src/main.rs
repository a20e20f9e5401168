use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use reflector_dish::{Direction, commands};

#[derive(Parser)]
#[command(name = "reflector-dish")]
#[command(about = "Tilt a dish of rolling (O) and fixed (#) rocks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tilt the dish once and print it
    Tilt {
        /// north, south, west or east (or n, s, w, e)
        #[arg(short, long)]
        direction: Direction,
        /// Dish file, stdin when omitted
        file: Option<PathBuf>,
    },
    /// Run spin cycles (north, west, south, east) and print the dish
    Spin {
        #[arg(short, long, default_value_t = 1)]
        cycles: u64,
        /// Dish file, stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the load on the support beams of one edge
    Load {
        #[arg(short, long, default_value = "north")]
        direction: Direction,
        /// Tilt towards the edge before measuring
        #[arg(long)]
        tilt: bool,
        /// Dish file, stdin when omitted
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    let mut input = String::new();
    match file {
        Some(path) => {
            std::fs::File::open(path)
                .and_then(|mut f| f.read_to_string(&mut input))
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
        }
    }
    Ok(input)
}

fn main() -> anyhow::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tilt { direction, file } => {
            let input = read_input(file.as_deref())?;
            info!("tilting dish {}", direction);
            print!("{}", commands::tilt(&input, direction)?);
        }
        Commands::Spin { cycles, file } => {
            let input = read_input(file.as_deref())?;
            info!("running {} spin cycles", cycles);
            print!("{}", commands::spin(&input, cycles)?);
        }
        Commands::Load {
            direction,
            tilt,
            file,
        } => {
            let input = read_input(file.as_deref())?;
            println!("{}", commands::load(&input, direction, tilt)?);
        }
    }
    Ok(())
}
