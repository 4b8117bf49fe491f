//! Candidate move generation with beam pruning.
//!
//! Only empty cells within two steps (along one of the eight compass
//! directions) of an existing stone are considered. Each is scored with the
//! placement heuristic, ordered best first, and the list is cut to the beam
//! width.

use crate::board::{Board, Point, Stone, offset};
use crate::constants::{COMPASS, NEAR_DISTANCE, Score};
use crate::eval::placement_heuristic;
use crate::patterns::PatternTable;

/// A move with its ordering score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub point: Point,
    pub score: Score,
}

/// Whether any stone lies one or two steps from `point` along a compass
/// direction.
pub fn is_near_stone(board: &Board, point: Point) -> bool {
    COMPASS.iter().any(|&(dr, dc)| {
        (1..=NEAR_DISTANCE)
            .filter_map(|dist| offset(point, dr, dc, dist))
            .any(|p| !board.is_empty(p))
    })
}

/// Generate ordered candidates for the current board.
///
/// Keeps every cell with a positive heuristic plus the first zero-scored
/// cell in raster order as a fallback, so a non-empty neighbourhood always
/// yields at least one move. The sort is stable: ties stay in raster order.
pub fn generate_candidates(
    board: &Board,
    ai: Stone,
    table: &PatternTable,
    beam_width: usize,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut have_zero = false;

    for point in board.points() {
        if !board.is_empty(point) || !is_near_stone(board, point) {
            continue;
        }
        let score = placement_heuristic(board, point, ai, table);
        if score > 0 {
            candidates.push(Candidate { point, score });
        } else if score == 0 && !have_zero {
            candidates.push(Candidate { point, score });
            have_zero = true;
        }
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(beam_width);
    candidates
}
