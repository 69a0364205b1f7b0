use rand::{SeedableRng, Rng};
use rand::rngs::SmallRng;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{File, create_dir_all};
use std::io::{Write, BufRead, BufWriter, BufReader};
use std::path::Path;

use crate::board::Side;
use crate::game::{GameState, Play};
use crate::variants::Ruleset;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub seed: u64,
    pub variant: Ruleset,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub variant: String,
    pub moves: Vec<String>,
    pub plies: usize,
    /// Side to move had no play when the game stopped
    pub blocked: bool,
    pub final_layout: String,
    pub side_to_move: Side,
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    (0..params.games).map(|gi| {
        let record = play_one(params, &mut rng);
        debug!("game {} finished after {} plies (blocked={})", gi, record.plies, record.blocked);
        record
    }).collect()
}

/// One uniform-random playout from the variant's start position
pub fn play_one(params: &SelfPlayParams, rng: &mut SmallRng) -> GameRecord {
    let mut state = GameState::new(&params.variant);
    let mut moves = Vec::new();
    let mut blocked = false;
    while moves.len() < params.max_plies {
        let Some(p) = select_random_play(&state, rng) else { blocked = true; break };
        match state.apply_move(p.from, p.mv) {
            Ok(next) => { moves.push(p.to_string()); state = next; }
            Err(_) => break,
        }
    }
    GameRecord {
        variant: params.variant.key.clone(),
        plies: moves.len(),
        moves,
        blocked,
        final_layout: state.board().to_string(),
        side_to_move: state.side_to_move(),
    }
}

fn select_random_play(state: &GameState, rng: &mut SmallRng) -> Option<Play> {
    let plays = state.plays();
    if plays.is_empty() { None } else { Some(plays[rng.gen_range(0..plays.len())]) }
}

/// Write records as JSON lines, one game per line
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    if let Some(dir) = path.as_ref().parent().filter(|d| !d.as_os_str().is_empty()) { create_dir_all(dir)?; }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
