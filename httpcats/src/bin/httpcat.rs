#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use httpcats::{catalog, config::Config, HttpCat, HttpCatClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "httpcat", version, about = "Fetch the HTTP cat for a status code")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, default_value = "httpcats.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a cat by status code
    Code {
        code: u16,
        /// Write the image to this file instead of printing a summary
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch a cat by status name, e.g. `httpcat name not found`
    Name {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List every known status code and its names
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_from(&cli.config).context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("invalid logging.level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::List => {
            for entry in catalog::entries() {
                let names: Vec<_> = entry.names().collect();
                println!("{}  {:<36} {}", entry.code, entry.pretty_name(), names.join(", "));
            }
            Ok(())
        }
        Command::Code { code, output } => {
            let client = HttpCatClient::from_config(&config.client)?;
            let cat = client.cat_by_code(code)?;
            emit(&cat, output)
        }
        Command::Name { words, output } => {
            let client = HttpCatClient::from_config(&config.client)?;
            let cat = client.cat_by_name(&words.join(" "))?;
            emit(&cat, output)
        }
    }
}

fn emit(cat: &HttpCat, output: Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, &cat.image)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(code = cat.code, path = %path.display(), "saved cat");
        }
        None => {
            println!("{} {}", cat.code, cat);
            println!("{}", cat.url);
            println!("{} bytes", cat.image.len());
        }
    }
    Ok(())
}
