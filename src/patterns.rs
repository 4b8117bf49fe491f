//! Line pattern recognition.
//!
//! A stone (real or hypothetical) is classified along one axis by scanning
//! outward in both directions. Each directional scan counts the contiguous
//! run, notes whether it ends on an empty cell, and tolerates exactly one
//! gap: stones found right after that gap form a "jump" run.
//!
//! ```text
//!   _ O O [O] O _        contiguous run of 4, both ends open -> open four
//!   _ O _ [O] O _        backward jump of 1                  -> jump open three
//! ```
//!
//! Shapes with a gap on both sides of the anchor (`O _ [O] _ O`) are not
//! recognized and classify as [`Pattern::Invalid`]. Scores downstream are
//! tuned around that.

use crate::board::{Board, Point, Stone, offset};
use crate::constants::*;

/// Shape formed along one axis through a stone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// No threat.
    Invalid,
    TwoSleep,
    TwoOpen,
    ThreeSleep,
    ThreeOpen,
    FourRush,
    FourOpen,
    Five,
    JumpThreeOpen,
    JumpFourSleep,
    JumpFourOpen,
}

impl Pattern {
    pub const COUNT: usize = 11;

    pub const ALL: [Pattern; Pattern::COUNT] = [
        Pattern::Invalid,
        Pattern::TwoSleep,
        Pattern::TwoOpen,
        Pattern::ThreeSleep,
        Pattern::ThreeOpen,
        Pattern::FourRush,
        Pattern::FourOpen,
        Pattern::Five,
        Pattern::JumpThreeOpen,
        Pattern::JumpFourSleep,
        Pattern::JumpFourOpen,
    ];

    /// Score of this shape for the side that owns it.
    pub fn base_score(self) -> Score {
        match self {
            Pattern::Invalid => SCORE_NONE,
            Pattern::TwoSleep => SCORE_TWO_SLEEP,
            Pattern::TwoOpen => SCORE_TWO_OPEN,
            Pattern::ThreeSleep => SCORE_THREE_SLEEP,
            Pattern::ThreeOpen => SCORE_THREE_OPEN,
            Pattern::FourRush => SCORE_FOUR_RUSH,
            Pattern::FourOpen => SCORE_FOUR_OPEN,
            Pattern::Five => SCORE_FIVE,
            Pattern::JumpThreeOpen => SCORE_JUMP_THREE_OPEN,
            Pattern::JumpFourSleep => SCORE_JUMP_FOUR_SLEEP,
            Pattern::JumpFourOpen => SCORE_JUMP_FOUR_OPEN,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Per-pattern scores for the attacker and the defender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    mover: [Score; Pattern::COUNT],
    defender: [Score; Pattern::COUNT],
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new(DEFENSE_WEIGHT)
    }
}

impl PatternTable {
    /// Build the table; defender scores are the mover's times `defense_weight`.
    pub fn new(defense_weight: Score) -> Self {
        let mut mover = [0; Pattern::COUNT];
        let mut defender = [0; Pattern::COUNT];
        for pattern in Pattern::ALL {
            mover[pattern.index()] = pattern.base_score();
            defender[pattern.index()] = pattern.base_score() * defense_weight;
        }
        Self { mover, defender }
    }

    #[inline]
    pub fn mover(&self, pattern: Pattern) -> Score {
        self.mover[pattern.index()]
    }

    #[inline]
    pub fn defender(&self, pattern: Pattern) -> Score {
        self.defender[pattern.index()]
    }
}

/// Result of scanning outward from an anchor in one direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Same-color stones directly adjacent, anchor excluded.
    pub run: usize,
    /// The run is followed by an empty cell.
    pub open: bool,
    /// Same-color stones found after the single gap.
    pub jump: usize,
    /// The jump run is followed by an empty cell.
    pub jump_open: bool,
    /// The jump run is followed by an opposing stone.
    pub jump_blocked: bool,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum ScanState {
    Counting,
    Gap,
    Jumping,
}

/// Scan from `point` (exclusive) along `(dr, dc)` for `stone`.
///
/// The anchor cell itself is never read, so this works for a hypothetical
/// stone on an empty cell as well as for a real one.
pub fn scan_direction(board: &Board, point: Point, dr: isize, dc: isize, stone: Stone) -> LineScan {
    let mut scan = LineScan::default();
    let mut state = ScanState::Counting;
    let mut dist = 1;

    while let Some(p) = offset(point, dr, dc, dist) {
        let cell = board.get(p);
        match state {
            ScanState::Counting => {
                if cell == stone {
                    scan.run += 1;
                } else if cell == Stone::Empty {
                    scan.open = true;
                    state = ScanState::Gap;
                } else {
                    break;
                }
            }
            ScanState::Gap => {
                if cell == stone {
                    scan.jump += 1;
                    state = ScanState::Jumping;
                } else {
                    break;
                }
            }
            ScanState::Jumping => {
                if cell == stone {
                    scan.jump += 1;
                } else if cell == Stone::Empty {
                    scan.jump_open = true;
                    break;
                } else {
                    scan.jump_blocked = true;
                    break;
                }
            }
        }
        dist += 1;
    }

    scan
}

/// Combine a forward and a backward scan into a pattern.
pub fn classify_scans(fwd: &LineScan, bwd: &LineScan) -> Pattern {
    let run = fwd.run + bwd.run + 1;
    // 1 = forward open, 2 = backward open, 3 = both
    let open_ends = u8::from(fwd.open) + 2 * u8::from(bwd.open);

    let jump_side = match (fwd.jump > 0, bwd.jump > 0) {
        (true, false) => Some((fwd, 1)),
        (false, true) => Some((bwd, 2)),
        _ => None,
    };

    if let Some((side, jump_side_only)) = jump_side {
        let total = run + side.jump;
        if total == 3 && open_ends == 3 && side.jump_open {
            return Pattern::JumpThreeOpen;
        }
        if total == 4 && open_ends == 3 && side.jump_blocked {
            return Pattern::JumpFourSleep;
        }
        if total == 4 && open_ends == jump_side_only && side.jump_open {
            return Pattern::JumpFourSleep;
        }
        if total == 4 && open_ends == 3 && side.jump_open {
            return Pattern::JumpFourOpen;
        }
    }

    match run {
        r if r >= WIN_LENGTH => Pattern::Five,
        4 if open_ends == 3 => Pattern::FourOpen,
        4 if open_ends > 0 => Pattern::FourRush,
        3 if open_ends == 3 => Pattern::ThreeOpen,
        3 if open_ends > 0 => Pattern::ThreeSleep,
        2 if open_ends == 3 => Pattern::TwoOpen,
        2 if open_ends > 0 => Pattern::TwoSleep,
        _ => Pattern::Invalid,
    }
}

/// Classify the shape through `point` along `axis` as if `stone` sat there.
pub fn classify(board: &Board, point: Point, (dr, dc): (isize, isize), stone: Stone) -> Pattern {
    let fwd = scan_direction(board, point, dr, dc, stone);
    let bwd = scan_direction(board, point, -dr, -dc, stone);
    classify_scans(&fwd, &bwd)
}
