use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use rpg_treasure_roller::{generate_treasure_with, roll_with, Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Roll dice and generate treasure
#[derive(Parser, Debug)]
#[command(name = "rpg-treasure-roller", version, propagate_version = true)]
struct Cli {
    /// Seed the random number generator to get reproducible results
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Roll one or more dice notations, e.g. `2d6+1` or `4d6*100`
    Roll {
        #[arg(required = true)]
        notation: Vec<String>,
    },

    /// Generate the treasure of a creature
    Treasure {
        /// Challenge rating between 0 and 30, `1/8`, `1/4` and `1/2` are allowed
        cr: String,

        /// `yes` or `hoard` for a hoard, anything else for individual treasure
        #[arg(default_value = "no")]
        hoard: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpg_treasure_roller=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = match cli.command {
        Commands::Roll { notation } => roll_all(&notation, &mut rng),
        Commands::Treasure { cr, hoard } => {
            generate_treasure_with(&cr, &hoard, &mut rng).map(|treasure| println!("{treasure}"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn roll_all(notations: &[String], rng: &mut StdRng) -> Result<()> {
    for notation in notations {
        let outcome = roll_with(notation, rng)?;
        println!("{notation}: {outcome}");
    }
    Ok(())
}

fn report(err: &Error) -> ExitCode {
    if err.is_user_error() {
        eprintln!("{err}");
        ExitCode::from(1)
    } else {
        tracing::error!(error = %err, "treasure tables are inconsistent");
        eprintln!("error: {err}");
        ExitCode::from(2)
    }
}
