use clap::Parser;
use checkerbot::selfplay::{SelfPlayParams, play_one, write_jsonl};
use checkerbot::variants::{find_variant, list_variants, load_variants};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checkerbot-selfplay", about = "Generate random self-play games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "american")]
    variant: String,
    /// Optional JSON catalog of rulesets
    #[arg(long)]
    variants: Option<PathBuf>,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let catalog = match &a.variants {
        Some(p) => load_variants(p)?,
        None => list_variants(),
    };
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        seed: a.seed,
        variant: find_variant(&catalog, &a.variant)?,
    };
    eprintln!("Generating {} games (variant={}, max_plies={}, seed={})", a.games, params.variant.key, a.max_plies, a.seed);

    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {elapsed}")?);
    // Same stream as `generate_games`, so a given seed yields identical games
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(a.games);
    for _ in 0..a.games {
        games.push(play_one(&params, &mut rng));
        bar.inc(1);
    }
    bar.finish();

    let blocked = games.iter().filter(|g| g.blocked).count();
    eprintln!("Writing {} games ({} ended blocked) to {}", games.len(), blocked, a.out.display());
    write_jsonl(&games, &a.out)?;
    Ok(())
}
