//! Board state with an incrementally maintained Zobrist hash.
//!
//! The board is a plain `N x N` grid of [`Stone`]s. Every mutation goes
//! through [`Board::update`], which keeps `hash` equal to the XOR of the
//! keys of all occupied cells. Placing a stone and taking it back are the
//! same operation with different target states, so the search can apply
//! and undo moves without ever recomputing the hash from scratch.

use std::fmt;

use crate::constants::{CENTER_A, CENTER_B, N};
use crate::rng::XorShift64Star;

/// Cell state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stone {
    #[default]
    Empty,
    /// Color A, player id 1.
    Black,
    /// Color B, player id 2.
    White,
}

impl Stone {
    /// The other color. `Empty` maps to itself.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Map a protocol player id (1 or 2) to a color.
    pub fn from_player_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }
}

/// A cell as `(row, col)`, both 0-based.
pub type Point = (usize, usize);

/// Step `dist` cells from `point` along `(dr, dc)`, or `None` off the board.
#[inline]
pub fn offset(point: Point, dr: isize, dc: isize, dist: isize) -> Option<Point> {
    let row = point.0.checked_add_signed(dr * dist)?;
    let col = point.1.checked_add_signed(dc * dist)?;
    (row < N && col < N).then_some((row, col))
}

/// One random key per (state, row, col).
///
/// The `Empty` plane is all zeros and draws nothing from the generator, so
/// an empty cell contributes nothing and the board hash is exactly the XOR
/// over occupied cells. Random `Empty` keys would break that: `update` XORs
/// the empty key in on every undo, and `compute_hash` skips empty cells.
#[derive(Clone)]
pub struct HashKeys {
    keys: [[[u64; N]; N]; 3],
}

impl HashKeys {
    /// Fill the stone planes from `rng`. Called once per engine.
    pub fn new(rng: &mut XorShift64Star) -> Self {
        let mut keys = [[[0u64; N]; N]; 3];
        for plane in &mut keys[1..] {
            for row in plane.iter_mut() {
                for key in row.iter_mut() {
                    *key = rng.next_u64();
                }
            }
        }
        Self { keys }
    }

    /// Key for `stone` at `point`.
    #[inline]
    pub fn get(&self, stone: Stone, (row, col): Point) -> u64 {
        self.keys[stone.index()][row][col]
    }
}

/// Grid of cells plus its running hash.
#[derive(Clone)]
pub struct Board {
    cells: [[Stone; N]; N],
    hash: u64,
    keys: HashKeys,
}

impl Board {
    /// Create a board with the four-stone opening.
    pub fn new(keys: HashKeys) -> Self {
        let mut board = Self {
            cells: [[Stone::Empty; N]; N],
            hash: 0,
            keys,
        };
        board.reset();
        board
    }

    /// Clear the grid, place the opening stones and recompute the hash.
    ///
    /// The opening is two stones of each color on the central 2x2 square,
    /// same colors on the diagonals.
    pub fn reset(&mut self) {
        self.cells = [[Stone::Empty; N]; N];
        self.cells[CENTER_A][CENTER_A] = Stone::White;
        self.cells[CENTER_B][CENTER_B] = Stone::White;
        self.cells[CENTER_B][CENTER_A] = Stone::Black;
        self.cells[CENTER_A][CENTER_B] = Stone::Black;
        self.hash = self.compute_hash();
    }

    /// Remove every stone, opening included.
    pub fn clear(&mut self) {
        self.cells = [[Stone::Empty; N]; N];
        self.hash = 0;
    }

    /// Set `point` to `stone`, updating the hash incrementally.
    ///
    /// Used both to play (`stone` is a color) and to undo (`stone` is
    /// `Empty`); applying the inverse update restores the hash bit for bit.
    #[inline]
    pub fn update(&mut self, point: Point, stone: Stone) {
        let (row, col) = point;
        self.hash ^= self.keys.get(self.cells[row][col], point);
        self.hash ^= self.keys.get(stone, point);
        self.cells[row][col] = stone;
    }

    #[inline]
    pub fn get(&self, (row, col): Point) -> Stone {
        self.cells[row][col]
    }

    #[inline]
    pub fn is_empty(&self, point: Point) -> bool {
        self.get(point) == Stone::Empty
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Hash recomputed from scratch. Equal to [`Board::hash`] at all times.
    pub fn compute_hash(&self) -> u64 {
        self.points()
            .filter(|&p| !self.is_empty(p))
            .fold(0, |h, p| h ^ self.keys.get(self.get(p), p))
    }

    /// All cells in raster order (row-major).
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
    }

    /// Number of stones of the given color.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == stone).count()
    }

    /// First empty cell in raster order.
    pub fn first_empty(&self) -> Option<Point> {
        self.points().find(|&p| self.is_empty(p))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..N {
            write!(f, "{col:>2}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row:>2} ")?;
            for cell in cells {
                let ch = match cell {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
