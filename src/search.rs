//! Fixed-depth alpha-beta search with a transposition table.
//!
//! The AI maximizes, the opponent minimizes. Moves are applied to the shared
//! board in place and undone before returning, so the board and its hash are
//! unchanged after every call. Each node:
//!
//! 1. probes the transposition table,
//! 2. stops at once if the move that led here completed five,
//! 3. evaluates statically at depth 0 or when no candidates remain,
//! 4. otherwise recurses over the beam-pruned candidates and stores the
//!    result under the depth-preferred replacement rule.
//!
//! [`Searcher::select_move`] adds the root ply on top.

use log::debug;

use crate::board::{Board, Point, Stone};
use crate::constants::{SCORE_FIVE, SCORE_LOSS, SCORE_MAX, SCORE_MIN, SCORE_WIN, Score};
use crate::eval::{evaluate, threat_score};
use crate::movegen::generate_candidates;
use crate::patterns::PatternTable;
use crate::tt::{Bound, TranspositionTable};

/// Counters collected over one root decision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `alpha_beta`.
    pub nodes: u64,
    /// Nodes answered from the transposition table.
    pub tt_hits: u64,
    /// Successful table writes.
    pub tt_stores: u64,
    /// Nodes that stopped early on `beta <= alpha`.
    pub cutoffs: u64,
}

/// Borrowed search state for one decision.
pub struct Searcher<'a> {
    board: &'a mut Board,
    tt: &'a mut TranspositionTable,
    table: &'a PatternTable,
    ai: Stone,
    beam_width: usize,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(
        board: &'a mut Board,
        tt: &'a mut TranspositionTable,
        table: &'a PatternTable,
        ai: Stone,
        beam_width: usize,
    ) -> Self {
        Self {
            board,
            tt,
            table,
            ai,
            beam_width,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn store(&mut self, depth: u32, score: Score, bound: Bound) {
        if self.tt.store(self.board.hash(), depth, score, bound) {
            self.stats.tt_stores += 1;
        }
    }

    fn evaluate_leaf(&mut self, depth: u32) -> Score {
        let score = evaluate(self.board, self.ai, self.table);
        self.store(depth, score, Bound::Exact);
        score
    }

    /// Value of the current board with `to_move` to play and `depth` plies
    /// left. `last` is the move that produced this position.
    pub fn alpha_beta(
        &mut self,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        to_move: Stone,
        last: Point,
    ) -> Score {
        self.stats.nodes += 1;

        if let Some(score) = self.tt.probe(self.board.hash(), depth, alpha, beta) {
            self.stats.tt_hits += 1;
            return score;
        }

        // Only the stone just played can have completed a five.
        let opponent = self.ai.opponent();
        if to_move == self.ai && threat_score(self.board, last, opponent, self.table) >= SCORE_FIVE
        {
            return SCORE_LOSS;
        }
        if to_move == opponent && threat_score(self.board, last, self.ai, self.table) >= SCORE_FIVE
        {
            return SCORE_WIN;
        }

        if depth == 0 {
            return self.evaluate_leaf(depth);
        }

        let candidates = generate_candidates(self.board, self.ai, self.table, self.beam_width);
        if candidates.is_empty() {
            return self.evaluate_leaf(depth);
        }

        let maximizing = to_move == self.ai;
        let mut best = if maximizing { SCORE_MIN } else { SCORE_MAX };
        let mut bound = Bound::FailLow;

        for candidate in candidates {
            self.board.update(candidate.point, to_move);
            let score = self.alpha_beta(depth - 1, alpha, beta, to_move.opponent(), candidate.point);
            self.board.update(candidate.point, Stone::Empty);

            if maximizing {
                best = best.max(score);
                if score > alpha {
                    alpha = score;
                    bound = Bound::Exact;
                }
            } else {
                best = best.min(score);
                if score < beta {
                    beta = score;
                    bound = Bound::Exact;
                }
            }

            if beta <= alpha {
                bound = if maximizing { Bound::FailHigh } else { Bound::FailLow };
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.store(depth, best, bound);
        best
    }

    /// Pick the AI's move: clear the table, then search every root
    /// candidate with the opponent to reply and keep the strictly best one.
    /// Ties go to the earlier (better-ordered) candidate.
    ///
    /// Returns `None` only when there is no candidate at all.
    pub fn select_move(&mut self, depth: u32) -> Option<Point> {
        self.tt.clear();
        self.stats = SearchStats::default();

        let candidates = generate_candidates(self.board, self.ai, self.table, self.beam_width);
        let mut best_move = candidates.first()?.point;
        let mut best_score = SCORE_MIN;

        for candidate in candidates {
            self.board.update(candidate.point, self.ai);
            let score =
                self.alpha_beta(depth, SCORE_MIN, SCORE_MAX, self.ai.opponent(), candidate.point);
            self.board.update(candidate.point, Stone::Empty);

            debug!(
                "root {:?} heuristic={} score={}",
                candidate.point, candidate.score, score
            );

            if score > best_score {
                best_score = score;
                best_move = candidate.point;
            }
        }

        Some(best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::HashKeys;
    use crate::constants::{BEAM_WIDTH, TT_CAPACITY};
    use crate::rng::XorShift64Star;

    fn empty_board() -> Board {
        let mut board = Board::new(HashKeys::new(&mut XorShift64Star::new(21)));
        board.clear();
        board
    }

    fn place(board: &mut Board, stone: Stone, points: &[Point]) {
        for &p in points {
            board.update(p, stone);
        }
    }

    fn select(board: &mut Board, ai: Stone, depth: u32) -> (Option<Point>, SearchStats) {
        let mut tt = TranspositionTable::new(1 << 16).unwrap();
        let table = PatternTable::default();
        let mut searcher = Searcher::new(board, &mut tt, &table, ai, BEAM_WIDTH);
        let mv = searcher.select_move(depth);
        (mv, searcher.stats())
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new(HashKeys::new(&mut XorShift64Star::new(4)));
        let before = board.hash();
        let (mv, stats) = select(&mut board, Stone::Black, 3);
        assert!(mv.is_some());
        assert!(stats.nodes > 0);
        assert_eq!(board.hash(), before);
        assert_eq!(board.hash(), board.compute_hash());
        assert_eq!(board.count(Stone::Black), 2);
        assert_eq!(board.count(Stone::White), 2);
    }

    #[test]
    fn test_extends_open_three_to_open_four() {
        let mut board = empty_board();
        place(&mut board, Stone::Black, &[(5, 5), (5, 6), (5, 7)]);
        place(&mut board, Stone::White, &[(9, 9)]);
        let (mv, _) = select(&mut board, Stone::Black, 3);
        let mv = mv.unwrap();
        assert!(mv == (5, 4) || mv == (5, 8), "got {mv:?}");
    }

    #[test]
    fn test_blocks_rush_four() {
        let mut board = empty_board();
        place(&mut board, Stone::White, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        place(&mut board, Stone::Black, &[(6, 6), (7, 7)]);
        let (mv, _) = select(&mut board, Stone::Black, 3);
        assert_eq!(mv, Some((2, 4)));
    }

    #[test]
    fn test_completes_five() {
        let mut board = empty_board();
        place(&mut board, Stone::White, &[(4, 4), (4, 5), (4, 6), (4, 7)]);
        place(&mut board, Stone::Black, &[(4, 3), (9, 1), (9, 2)]);
        // white to play as the AI with a rush four
        let (mv, _) = select(&mut board, Stone::White, 2);
        assert_eq!(mv, Some((4, 8)));
    }

    #[test]
    fn test_win_detected_after_last_move() {
        let mut board = empty_board();
        place(&mut board, Stone::Black, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let mut tt = TranspositionTable::new(TT_CAPACITY).unwrap();
        let table = PatternTable::default();
        let mut searcher = Searcher::new(&mut board, &mut tt, &table, Stone::Black, BEAM_WIDTH);
        assert_eq!(searcher.alpha_beta(4, SCORE_MIN, SCORE_MAX, Stone::White, (0, 4)), SCORE_WIN);
        // with black to move the check looks for a white five instead
        let score = searcher.alpha_beta(2, SCORE_MIN, SCORE_MAX, Stone::Black, (0, 4));
        assert!(score > 0, "got {score}");
    }

    fn cutoff_board() -> Board {
        let mut board = empty_board();
        place(&mut board, Stone::Black, &[(3, 3), (3, 4), (3, 5)]);
        place(&mut board, Stone::White, &[(8, 8)]);
        board
    }

    #[test]
    fn test_cutoff_with_ai_to_move_stores_fail_high() {
        let mut board = cutoff_board();
        let hash = board.hash();
        let mut tt = TranspositionTable::new(1 << 12).unwrap();
        let table = PatternTable::default();
        let mut searcher = Searcher::new(&mut board, &mut tt, &table, Stone::Black, BEAM_WIDTH);
        // any real score reaches beta at the first child
        let score = searcher.alpha_beta(1, SCORE_MIN, SCORE_LOSS, Stone::Black, (8, 8));
        assert!(score >= SCORE_LOSS);
        assert_eq!(searcher.stats().cutoffs, 1);
        drop(searcher);

        let entry = tt.get(hash).unwrap();
        assert_eq!(entry.bound, Bound::FailHigh);
        assert_eq!(entry.depth, 1);
        assert_eq!(entry.score, score);
    }

    #[test]
    fn test_cutoff_with_opponent_to_move_stores_fail_low() {
        let mut board = cutoff_board();
        let hash = board.hash();
        let mut tt = TranspositionTable::new(1 << 12).unwrap();
        let table = PatternTable::default();
        let mut searcher = Searcher::new(&mut board, &mut tt, &table, Stone::Black, BEAM_WIDTH);
        let score = searcher.alpha_beta(1, SCORE_WIN, SCORE_MAX, Stone::White, (3, 5));
        assert!(score <= SCORE_WIN);
        assert_eq!(searcher.stats().cutoffs, 1);
        drop(searcher);

        let entry = tt.get(hash).unwrap();
        assert_eq!(entry.bound, Bound::FailLow);
        assert_eq!(entry.depth, 1);
        assert_eq!(entry.score, score);
    }

    #[test]
    fn test_no_candidates_is_static_eval() {
        // two-wide stripes: no line of the same color is longer than two
        let mut board = empty_board();
        let points: Vec<Point> = board.points().collect();
        for (row, col) in points {
            let stone = if (row / 2 + col) % 2 == 0 { Stone::Black } else { Stone::White };
            board.update((row, col), stone);
        }
        let table = PatternTable::default();
        let expected = evaluate(&board, Stone::Black, &table);
        let hash = board.hash();
        let mut tt = TranspositionTable::new(1024).unwrap();
        let mut searcher = Searcher::new(&mut board, &mut tt, &table, Stone::Black, BEAM_WIDTH);

        let score = searcher.alpha_beta(3, SCORE_MIN, SCORE_MAX, Stone::Black, (0, 0));
        assert_eq!(score, expected);
        assert_eq!(searcher.stats().nodes, 1);
        assert_eq!(searcher.stats().tt_stores, 1);
        drop(searcher);

        let entry = tt.get(hash).unwrap();
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(entry.depth, 3);
        assert_eq!(entry.score, expected);
    }

    #[test]
    fn test_depth_zero_is_static_eval_and_cached() {
        let mut board = empty_board();
        place(&mut board, Stone::Black, &[(3, 3), (3, 4), (3, 5)]);
        place(&mut board, Stone::White, &[(8, 8)]);
        let expected = evaluate(&board, Stone::Black, &PatternTable::default());
        let mut tt = TranspositionTable::new(1024).unwrap();
        let table = PatternTable::default();
        let hash = board.hash();
        let mut searcher = Searcher::new(&mut board, &mut tt, &table, Stone::Black, BEAM_WIDTH);
        let score = searcher.alpha_beta(0, SCORE_MIN, SCORE_MAX, Stone::White, (3, 5));
        assert_eq!(score, expected);
        assert_eq!(searcher.stats().tt_stores, 1);
        // second call is a table hit
        searcher.alpha_beta(0, SCORE_MIN, SCORE_MAX, Stone::White, (3, 5));
        assert_eq!(searcher.stats().tt_hits, 1);
        drop(searcher);
        let entry = tt.get(hash).unwrap();
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(entry.score, expected);
    }
}
