use anyhow::Result;
use clap::Parser;
use checkerbot::protocol::Protocol;
use checkerbot::variants::{find_variant, list_variants, load_variants};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Checkers/draughts rules engine driven by text commands on stdin", long_about = None)]
struct Args {
    /// Variant key to start with
    #[arg(long, default_value = "american")]
    variant: String,

    /// JSON file with an array of rulesets replacing the built-in variants
    #[arg(long)]
    variants: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = match &args.variants {
        Some(path) => load_variants(path)?,
        None => list_variants(),
    };
    let ruleset = find_variant(&catalog, &args.variant)?;
    info!("starting with {} ({} variants available)", ruleset.name, catalog.len());

    let mut protocol = Protocol::new(catalog, ruleset);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    protocol.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
