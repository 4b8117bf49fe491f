//! The engine context.
//!
//! [`Engine`] owns everything the decision procedure mutates or reads: the
//! board with its hash keys, the transposition table, the pattern score
//! table and the color assignment. Independent engines never share state.

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, HashKeys, Point, Stone};
use crate::config::EngineConfig;
use crate::constants::Score;
use crate::error::EngineError;
use crate::eval;
use crate::movegen::{self, Candidate};
use crate::patterns::PatternTable;
use crate::rng::XorShift64Star;
use crate::search::{SearchStats, Searcher};
use crate::tt::TranspositionTable;

pub struct Engine {
    config: EngineConfig,
    board: Board,
    tt: TranspositionTable,
    table: PatternTable,
    ai: Stone,
    last_stats: SearchStats,
}

impl Engine {
    /// Build an engine: validate the config, draw the hash keys and
    /// allocate the transposition table. The board starts at the opening
    /// with the AI playing black.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let seed = config.resolve_seed();
        let keys = HashKeys::new(&mut XorShift64Star::new(seed));
        let tt = TranspositionTable::new(config.tt_capacity)?;
        let table = PatternTable::new(config.defense_weight);
        info!(
            "engine ready: depth={} beam={} tt_entries={} seed={seed:#x}",
            config.search_depth, config.beam_width, config.tt_capacity
        );

        Ok(Self {
            board: Board::new(keys),
            tt,
            table,
            ai: Stone::Black,
            last_stats: SearchStats::default(),
            config,
        })
    }

    /// Start a new game with the AI playing `ai`.
    pub fn start(&mut self, ai: Stone) {
        self.ai = ai;
        self.board.reset();
        self.tt.clear();
    }

    /// Switch the AI's color, keeping the board.
    pub fn set_ai(&mut self, ai: Stone) {
        self.ai = ai;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn ai(&self) -> Stone {
        self.ai
    }

    pub fn opponent(&self) -> Stone {
        self.ai.opponent()
    }

    /// Counters from the most recent decision.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Record a stone for `stone` at `point`.
    pub fn place(&mut self, point: Point, stone: Stone) {
        self.board.update(point, stone);
    }

    /// Threat value of the stone at `point` for `stone`.
    pub fn threat_score(&self, point: Point, stone: Stone) -> Score {
        eval::threat_score(&self.board, point, stone, &self.table)
    }

    /// Move-ordering heuristic of an empty cell.
    pub fn placement_heuristic(&self, point: Point) -> Score {
        eval::placement_heuristic(&self.board, point, self.ai, &self.table)
    }

    /// Static evaluation from the AI's side.
    pub fn evaluate(&self) -> Score {
        eval::evaluate(&self.board, self.ai, &self.table)
    }

    /// Beam-pruned candidate list for the current board.
    pub fn candidates(&self) -> Vec<Candidate> {
        movegen::generate_candidates(&self.board, self.ai, &self.table, self.config.beam_width)
    }

    /// Search the current board and return the AI's choice without playing it.
    pub fn best_move(&mut self) -> Option<Point> {
        let started = Instant::now();
        let mut searcher = Searcher::new(
            &mut self.board,
            &mut self.tt,
            &self.table,
            self.ai,
            self.config.beam_width,
        );
        let best = searcher.select_move(self.config.search_depth);
        self.last_stats = searcher.stats();

        debug!(
            "decision {:?}: nodes={} tt_hits={} tt_stores={} cutoffs={} in {:?}",
            best,
            self.last_stats.nodes,
            self.last_stats.tt_hits,
            self.last_stats.tt_stores,
            self.last_stats.cutoffs,
            started.elapsed()
        );
        best
    }

    /// Choose the AI's move, play it, and return it.
    ///
    /// Without candidates the first empty cell is used; `None` means the
    /// board is full.
    pub fn play_turn(&mut self) -> Option<Point> {
        let point = self.best_move().or_else(|| self.board.first_empty())?;
        self.board.update(point, self.ai);
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::N;

    fn small_engine() -> Engine {
        Engine::new(EngineConfig {
            search_depth: 3,
            tt_capacity: 1 << 16,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = Engine::new(EngineConfig { beam_width: 0, ..Default::default() });
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
        // rejected before the pattern table multiplies it out
        let result = Engine::new(EngineConfig {
            defense_weight: 10_000_000_000,
            ..Default::default()
        });
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_start_resets_board() {
        let mut engine = small_engine();
        engine.place((0, 0), Stone::White);
        engine.start(Stone::White);
        assert_eq!(engine.ai(), Stone::White);
        assert_eq!(engine.opponent(), Stone::Black);
        assert!(engine.board().is_empty((0, 0)));
        assert_eq!(engine.board().count(Stone::Black), 2);
    }

    #[test]
    fn test_play_turn_applies_move() {
        let mut engine = small_engine();
        engine.start(Stone::Black);
        let point = engine.play_turn().unwrap();
        assert_eq!(engine.board().get(point), Stone::Black);
        assert_eq!(engine.board().count(Stone::Black), 3);
        assert!(engine.last_stats().nodes > 0);
        assert_eq!(engine.board().hash(), engine.board().compute_hash());
    }

    #[test]
    fn test_play_turn_falls_back_to_first_empty() {
        let mut engine = small_engine();
        engine.board_mut().clear();
        assert!(engine.candidates().is_empty());
        assert_eq!(engine.play_turn(), Some((0, 0)));
    }

    #[test]
    fn test_play_turn_on_full_board() {
        let mut engine = small_engine();
        let points: Vec<Point> = engine.board().points().collect();
        for (i, p) in points.into_iter().enumerate() {
            let stone = if (i / N + i) % 2 == 0 { Stone::Black } else { Stone::White };
            engine.place(p, stone);
        }
        assert_eq!(engine.play_turn(), None);
    }

    #[test]
    fn test_independent_engines() {
        let mut a = small_engine();
        let b = small_engine();
        a.place((0, 0), Stone::White);
        assert!(b.board().is_empty((0, 0)));
        assert_eq!(a.evaluate(), a.evaluate());
        assert_eq!(b.placement_heuristic((0, 0)), 0);
    }
}
