//! Threat scoring and static evaluation.
//!
//! Three related measures built on the pattern classifier:
//!
//! - [`threat_score`]: what an existing stone is worth to its owner.
//! - [`placement_heuristic`]: how urgent an empty cell is, counting both
//!   the attack (the AI playing there) and the defense (denying it to the
//!   opponent). Used only to order and prune moves.
//! - [`evaluate`]: the leaf value, AI threats minus opponent threats.

use crate::board::{Board, Point, Stone};
use crate::constants::{AXES, DOUBLE_THREAT_MIN, DOUBLE_THREAT_VALUE, Score};
use crate::patterns::{PatternTable, classify};

/// Lift sums in the double-threat band to [`DOUBLE_THREAT_VALUE`].
///
/// Two threes, or a three and a four, sum past 1500 but stay far below an
/// open four, even though together they are nearly as strong.
#[inline]
pub fn clamp_double_threat(total: Score) -> Score {
    if (DOUBLE_THREAT_MIN..DOUBLE_THREAT_VALUE).contains(&total) {
        DOUBLE_THREAT_VALUE
    } else {
        total
    }
}

/// Sum of the mover's pattern scores over the four axes through `point`,
/// as if `stone` occupied it.
pub fn threat_score(board: &Board, point: Point, stone: Stone, table: &PatternTable) -> Score {
    let total = AXES
        .iter()
        .map(|&axis| table.mover(classify(board, point, axis, stone)))
        .sum();
    clamp_double_threat(total)
}

/// Ordering heuristic for an empty cell: attack value for `ai` plus the
/// defender-weighted value of the same cell for the opponent.
pub fn placement_heuristic(board: &Board, point: Point, ai: Stone, table: &PatternTable) -> Score {
    let opponent = ai.opponent();
    let (attack, defense) = AXES.iter().fold((0, 0), |(attack, defense), &axis| {
        (
            attack + table.mover(classify(board, point, axis, ai)),
            defense + table.defender(classify(board, point, axis, opponent)),
        )
    });
    clamp_double_threat(attack) + clamp_double_threat(defense)
}

/// Static value of the board from the AI's point of view.
pub fn evaluate(board: &Board, ai: Stone, table: &PatternTable) -> Score {
    let opponent = ai.opponent();
    board.points().fold(0, |total, point| {
        let stone = board.get(point);
        if stone == ai {
            total + threat_score(board, point, ai, table)
        } else if stone == opponent {
            total - threat_score(board, point, opponent, table)
        } else {
            total
        }
    })
}
