use shakmaty::{Chess, Color, Position};
use crate::engine::eval::Evaluation;
use crate::engine::search::{SearchConfig, Searcher, MAX_DEPTH};
use crate::error::SearchError;
use crate::rules::{Notation, Rules, ShakmatyRules};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};
use vampirc_uci::{UciMessage, parser};
use vampirc_uci::uci::UciSearchControl;

pub struct UCI {
    pub board: Chess,
    searcher: Searcher<ShakmatyRules>,
    config: SearchConfig,
}

impl UCI {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Depth is clamped to `0..=MAX_DEPTH`, as for `setoption name Depth`.
    pub fn with_config(mut config: SearchConfig) -> Self {
        config.depth = config.depth.clamp(0, MAX_DEPTH);
        UCI {
            board: Chess::default(),
            searcher: Searcher::default().with_evaluation(config.evaluation),
            config,
        }
    }

    /// Current search settings (for tests).
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn run<I: BufRead, W: Write>(&mut self, input: I, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if !self.handle_line(&line, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Handle one line of input. Returns `false` on `quit`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref());
            }
            UciMessage::UciNewGame => self.cmd_ucinewgame(),
            UciMessage::Position { startpos, fen, moves } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                self.apply_position(startpos, fen_str, &refs);
            }
            // `go [depth N]`; time controls are ignored.
            UciMessage::Go { search_control, .. } => {
                let depth = go_depth(search_control.as_ref(), self.config.depth);
                self.do_go(depth, out)?;
            }
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(ref s, _) => {
                let parts: Vec<&str> = s.split_whitespace().collect();
                match parts.first() {
                    Some(&"eval") => self.cmd_eval(out)?,
                    Some(other) => debug!(command = *other, "ignoring unknown command"),
                    None => {}
                }
            }
            _ => {}
        }
        out.flush()?;
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name ChessTree {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author ChessTree Team")?;
        writeln!(out)?;
        writeln!(
            out,
            "option name Depth type spin default {} min 0 max {}",
            self.config.depth, MAX_DEPTH
        )?;
        let vars: Vec<String> = Evaluation::ALL.iter().map(|e| format!("var {e}")).collect();
        writeln!(
            out,
            "option name Evaluation type combo default {} {}",
            self.config.evaluation,
            vars.join(" ")
        )?;
        writeln!(out, "uciok")
    }

    fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        if opt == "depth" {
            match value.parse::<i32>() {
                Ok(depth) => self.config.depth = depth.clamp(0, MAX_DEPTH),
                Err(_) => warn!(value, "ignoring non-numeric Depth"),
            }
        } else if opt == "evaluation" {
            match value.parse::<Evaluation>() {
                Ok(evaluation) => {
                    self.config.evaluation = evaluation;
                    self.searcher.set_evaluation(evaluation);
                }
                Err(e) => warn!("{e}"),
            }
        } else {
            debug!(name, "ignoring unknown option");
        }
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.board = Chess::default();
    }

    /// Set up the board. An invalid FEN leaves the board unchanged; move
    /// application stops at the first illegal move.
    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        let rules = *self.searcher.rules();
        if startpos {
            self.board = Chess::default();
        } else if let Some(fen_str) = fen {
            match rules.parse_position(fen_str) {
                Ok(pos) => self.board = pos,
                Err(e) => {
                    warn!("{e}");
                    return;
                }
            }
        }

        for &s in move_strs {
            match rules.play_notation(&self.board, s, Notation::Uci) {
                Ok(next) => self.board = next,
                Err(e) => {
                    warn!("{e}");
                    break;
                }
            }
        }
    }

    pub fn parse_move(&self, move_str: &str) -> Option<shakmaty::Move> {
        self.searcher
            .rules()
            .parse_move(&self.board, move_str, Notation::Uci)
            .ok()
    }

    fn do_go<W: Write>(&mut self, depth: i32, out: &mut W) -> io::Result<()> {
        match self.searcher.find_best_move_in(&self.board, depth) {
            Ok(Some(mv)) => {
                let uci = self.searcher.rules().format_move(&self.board, &mv, Notation::Uci);
                writeln!(out, "bestmove {uci}")
            }
            Ok(None) | Err(SearchError::NoLegalMove) => writeln!(out, "bestmove 0000"),
            Err(e) => {
                warn!("{e}");
                writeln!(out, "bestmove 0000")
            }
        }
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let score = self.config.evaluation.evaluate(self.searcher.rules(), &self.board, 0);
        writeln!(out, "Evaluation: {score}")?;
        writeln!(out, "(Positive = White advantage, {} to move)",
            if self.board.turn() == Color::White { "White" } else { "Black" })
    }
}

/// Depth requested by `go`, or `default`; never above `MAX_DEPTH`.
fn go_depth(search_control: Option<&UciSearchControl>, default: i32) -> i32 {
    search_control
        .and_then(|sc| sc.depth)
        .map_or(default, i32::from)
        .min(MAX_DEPTH)
}

impl Default for UCI {
    fn default() -> Self { Self::new() }
}
