//! colors
//!
//! Prints palette colors in one of the supported formats.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin colors -- red black --format json
//! RUST_LOG=colors=debug cargo run --bin colors -- white
//! ```

use clap::Parser;
use colors::{OutputFormat, describe, parse_color, render};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "colors")]
#[command(about = "Print genums palette colors")]
struct Cli {
    /// Colors to print
    #[arg(default_values_t = [String::from("red"), String::from("black")])]
    colors: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Encode)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colors=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::debug!(format = ?cli.format, count = cli.colors.len(), "Parsed arguments");

    for name in &cli.colors {
        let color = parse_color(name)?;
        tracing::info!("Rendering {}", describe(&color));
        println!("{}", render(&color, cli.format)?);
    }

    Ok(())
}
