use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::layout::parse_sized;
use crate::board::Side;
use crate::game::{GameState, PlayNotation};
use crate::perft::perft;
use crate::session::{PickOutcome, Session};
use crate::variants::{find_variant, Ruleset};

/// Line-oriented command front end over a `Session`.
pub struct Protocol {
    catalog: Vec<Ruleset>,
    session: Session,
}

impl Protocol {
    pub fn new(catalog: Vec<Ruleset>, ruleset: Ruleset) -> Self {
        Self { catalog, session: Session::new(ruleset) }
    }

    pub fn session(&self) -> &Session { &self.session }

    fn cmd_variants<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for v in &self.catalog {
            let marker = if v.key == self.session.ruleset().key { '*' } else { ' ' };
            writeln!(out, "{} {} {} {}x{} rows={} - {}", marker, v.key, v.name, v.board_dimension, v.board_dimension, v.initial_rows, v.description)?;
        }
        Ok(())
    }

    fn cmd_variant<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        match find_variant(&self.catalog, args) {
            Ok(v) => {
                writeln!(out, "variant {}", v.key)?;
                self.session.select_variant(v);
            }
            Err(e) => writeln!(out, "error {}", e)?,
        }
        Ok(())
    }

    fn cmd_position<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        // position <red|black> <layout>
        let mut tokens = args.split_whitespace();
        let side = match tokens.next().map(str::parse::<Side>) {
            Some(Ok(s)) => s,
            Some(Err(e)) => return writeln!(out, "error {}", e),
            None => return writeln!(out, "error usage: position <red|black> <layout>"),
        };
        let Some(layout) = tokens.next() else { return writeln!(out, "error usage: position <red|black> <layout>") };
        match parse_sized(layout, self.session.ruleset().board_dimension) {
            Ok(board) => {
                self.session.set_state(GameState::from_board(board, side));
                writeln!(out, "ok")
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn cmd_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let state = self.session.state();
        write!(out, "{}", state.board().pretty())?;
        writeln!(out, "layout {}", state.board())?;
        writeln!(out, "turn {}", state.side_to_move())
    }

    fn cmd_moves<W: Write>(&self, args: &str, out: &mut W) -> io::Result<()> {
        let Some((row, col)) = parse_row_col(args) else { return writeln!(out, "error usage: moves <row> <col>") };
        let moves = self.session.state().legal_moves(row, col);
        let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        writeln!(out, "moves {} {}", moves.len(), list.join(" "))
    }

    fn cmd_click<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let Some((row, col)) = parse_row_col(args) else { return writeln!(out, "error usage: click <row> <col>") };
        match self.session.pick(row, col) {
            PickOutcome::Ignored => writeln!(out, "ignored"),
            PickOutcome::Selected { from, moves } => {
                let list: Vec<String> = moves.iter().map(|m| m.to().to_string()).collect();
                writeln!(out, "selected {} {}", from, list.join(" "))
            }
            PickOutcome::Moved(play) => writeln!(out, "moved {} turn {}", play, self.session.state().side_to_move()),
            PickOutcome::Deselected => writeln!(out, "deselected"),
        }
    }

    fn cmd_play<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let notation: PlayNotation = match args.parse() {
            Ok(n) => n,
            Err(e) => return writeln!(out, "error {}", e),
        };
        match self.session.state().apply_notation(&notation) {
            Ok(next) => {
                self.session.set_state(next);
                writeln!(out, "ok turn {}", self.session.state().side_to_move())
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn cmd_plays<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let plays: Vec<String> = self.session.state().plays().iter().map(|p| p.to_string()).collect();
        writeln!(out, "plays {} {}", plays.len(), plays.join(" "))
    }

    fn cmd_perft<W: Write>(&self, args: &str, out: &mut W) -> io::Result<()> {
        match args.trim().parse::<u32>() {
            Ok(depth) => writeln!(out, "nodes {}", perft(self.session.state(), depth)),
            Err(_) => writeln!(out, "error usage: perft <depth>"),
        }
    }

    /// Handle one command line. Returns false once `quit` is seen.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() { return Ok(true); }
        debug!("command: {}", line);
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match cmd {
            "quit" => return Ok(false),
            "variants" => self.cmd_variants(out)?,
            "variant" => self.cmd_variant(rest, out)?,
            "newgame" => { self.session.reset(); writeln!(out, "ok")?; }
            "position" => self.cmd_position(rest, out)?,
            "board" => self.cmd_board(out)?,
            "moves" => self.cmd_moves(rest, out)?,
            "click" => self.cmd_click(rest, out)?,
            "play" => self.cmd_play(rest, out)?,
            "plays" => self.cmd_plays(out)?,
            "perft" => self.cmd_perft(rest, out)?,
            other => writeln!(out, "error unknown command: {}", other)?,
        }
        Ok(true)
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if !self.handle(&line, out)? { break; }
            out.flush()?;
        }
        Ok(())
    }
}

fn parse_row_col(args: &str) -> Option<(i32, i32)> {
    let mut tokens = args.split_whitespace();
    let row = tokens.next()?.parse().ok()?;
    let col = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() { return None; }
    Some((row, col))
}
