// Node counting over the play tree, cloning states (no make/unmake)
use crate::game::{GameState, Play};

pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let plays = state.plays();
    if depth == 1 { return plays.len() as u64; }
    let mut nodes = 0u64;
    for p in plays {
        if let Ok(child) = state.apply_move(p.from, p.mv) {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Per-root-play node counts, in `plays()` order
pub fn perft_divide(state: &GameState, depth: u32) -> Vec<(Play, u64)> {
    if depth == 0 { return Vec::new(); }
    state
        .plays()
        .into_iter()
        .filter_map(|p| state.apply_move(p.from, p.mv).ok().map(|child| (p, perft(&child, depth - 1))))
        .collect()
}
