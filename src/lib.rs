//! Gobang-AI: an alpha-beta engine for five-in-a-row on a 12x12 board.
//!
//! The engine plays from a fixed four-stone opening. Each decision runs a
//! fixed-depth alpha-beta search over beam-pruned candidate moves, ordered
//! by a line-pattern heuristic and memoized in a Zobrist-keyed
//! transposition table.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, pattern scores and search defaults
//! - [`config`] - Engine configuration
//! - [`rng`] - Xorshift64* generator for hash keys
//! - [`board`] - Board state with incremental Zobrist hash
//! - [`tt`] - Transposition table
//! - [`patterns`] - Line pattern classifier and score table
//! - [`eval`] - Threat scoring, move heuristic and static evaluation
//! - [`movegen`] - Candidate generation with beam pruning
//! - [`search`] - Alpha-beta search and root move selection
//! - [`engine`] - Engine context tying the above together
//! - [`protocol`] - Line protocol (`START`/`PLACE`/`TURN`/`END`)
//!
//! ## Example
//!
//! ```
//! use gobang_ai::board::Stone;
//! use gobang_ai::config::EngineConfig;
//! use gobang_ai::engine::Engine;
//!
//! let config = EngineConfig { search_depth: 2, tt_capacity: 1 << 12, ..Default::default() };
//! let mut engine = Engine::new(config).unwrap();
//! engine.start(Stone::Black);
//!
//! // The opponent plays, then the engine answers
//! engine.place((4, 4), Stone::White);
//! let (row, col) = engine.play_turn().unwrap();
//! println!("engine plays {row} {col}");
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod patterns;
pub mod protocol;
pub mod rng;
pub mod search;
pub mod tt;
