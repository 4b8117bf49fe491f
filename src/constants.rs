//! Constants for board geometry, pattern scores, and search parameters.
//!
//! Everything the engine treats as fixed lives here. The tunable subset
//! (depth, beam width, table size, defense weight) only provides defaults
//! for [`EngineConfig`](crate::config::EngineConfig).

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 12;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Lower-left/upper-right center index for the four-stone opening.
pub const CENTER_A: usize = (N + 1) / 2 - 1;

/// Upper-left/lower-right center index for the four-stone opening.
pub const CENTER_B: usize = N / 2;

// =============================================================================
// Direction Vectors
// =============================================================================

/// The four base axes as (row, col) steps: vertical, horizontal, `\`, `/`.
/// The opposite four compass directions are covered by scanning backwards.
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// All eight compass directions, used for the proximity test.
/// Order: N, S, W, E, NW, NE, SW, SE
pub const COMPASS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Maximum Chebyshev distance from an existing stone for a candidate cell.
pub const NEAR_DISTANCE: isize = 2;

// =============================================================================
// Scores
// =============================================================================

/// Score type used by evaluation and search.
pub type Score = i64;

/// Upper bound of the search window.
pub const SCORE_MAX: Score = Score::MAX;

/// Lower bound of the search window.
pub const SCORE_MIN: Score = Score::MIN;

/// Returned when the AI has just completed five.
pub const SCORE_WIN: Score = SCORE_MAX - 1;

/// Returned when the opponent has just completed five.
pub const SCORE_LOSS: Score = SCORE_MIN + 1;

/// Five in a row (game over).
pub const SCORE_FIVE: Score = 1_111_111_111;
/// Open four: `_OOOO_`.
pub const SCORE_FOUR_OPEN: Score = 1_100_000;
/// Open three: `_OOO_`.
pub const SCORE_THREE_OPEN: Score = 1_100;
/// Rush (sleeping) four: `XOOOO_`.
pub const SCORE_FOUR_RUSH: Score = 1_000;
/// Jump open four: `_O_OOO_`.
pub const SCORE_JUMP_FOUR_OPEN: Score = 1_000;
/// Jump open three: `_O_OO_`.
pub const SCORE_JUMP_THREE_OPEN: Score = 900;
/// Jump sleeping four: `_O_OOOX`.
pub const SCORE_JUMP_FOUR_SLEEP: Score = 800;
/// Open two: `_OO_`.
pub const SCORE_TWO_OPEN: Score = 100;
/// Sleeping three: `XOOO_`.
pub const SCORE_THREE_SLEEP: Score = 100;
/// Sleeping two: `XOO_`.
pub const SCORE_TWO_SLEEP: Score = 10;
/// No pattern.
pub const SCORE_NONE: Score = 0;

/// Sums in `[DOUBLE_THREAT_MIN, DOUBLE_THREAT_VALUE)` are double threats
/// (two threes, or a three and a four) and are lifted to `DOUBLE_THREAT_VALUE`.
pub const DOUBLE_THREAT_MIN: Score = 1_500;

/// Value assigned to a double threat; just under an open four.
pub const DOUBLE_THREAT_VALUE: Score = 1_000_000;

// =============================================================================
// Search Parameters
// =============================================================================

/// Remaining depth handed to the search below each root move.
pub const SEARCH_DEPTH: u32 = 7;

/// Number of candidates kept after ordering.
pub const BEAM_WIDTH: usize = 6;

/// Transposition table capacity (entries).
pub const TT_CAPACITY: usize = 1 << 20;

/// Multiplier applied to the mover's table to get the defender's table.
/// The double-threat clamp stays meaningful only while this is >= 0.883.
pub const DEFENSE_WEIGHT: Score = 1;

/// Largest defense weight for which attack plus weighted defense over all
/// four axes still fits in a [`Score`].
pub const MAX_DEFENSE_WEIGHT: Score = SCORE_MAX / (8 * SCORE_FIVE);

/// Fallback seed; an all-zero xorshift state never leaves zero.
pub const ZERO_SEED_REPLACEMENT: u64 = 0x0BAD_F00D_DEAD_BEEF;
