use checkerbot::board::layout::parse_sized;
use checkerbot::board::Side;
use checkerbot::game::GameState;
use checkerbot::perft::{perft, perft_divide};
use checkerbot::variants::{find_variant, list_variants};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for CheckerBot")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board layout or "startpos"
    #[arg(value_name = "LAYOUT", default_value = "startpos")]
    layout: String,
    /// Variant key
    #[arg(long, default_value = "american")]
    variant: String,
    /// Side to move for a custom layout
    #[arg(long, default_value = "red")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print node counts per root play
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let ruleset = find_variant(&list_variants(), &args.variant)?;
    let base = if args.layout == "startpos" {
        GameState::new(&ruleset)
    } else {
        let side: Side = args.side.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        GameState::from_board(parse_sized(&args.layout, ruleset.board_dimension)?, side)
    };

    if args.divide {
        for (play, nodes) in perft_divide(&base, args.depth) { println!("{play}: {nodes}"); }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let depth = args.depth;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth == 0 {
            perft(&base, depth)
        } else {
            base.plays().par_iter().filter_map(|p| base.apply_move(p.from, p.mv).ok()).map(|child| perft(&child, depth - 1)).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
