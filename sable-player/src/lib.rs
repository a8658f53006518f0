//! `sable-player` chooses Othello moves by minimax search with alpha-beta pruning.
//!
//! Leaves are scored by [`evaluate`]: material difference scaled by ten, plus a static
//! [`PositionalTable`] that rewards corners and edges and penalises the squares
//! that give them away. The same table orders moves before each level is searched.
//!
//! [`SearchEngine`] is the entry point. [`Agent`] wraps it and a random baseline
//! behind one interface, and [`play_game`] drives two agents through a full game.

mod agent;
mod engine;
mod error;
mod eval;
mod play;
pub mod positional;
pub mod search;

pub use agent::{Agent, RandomMover};
pub use engine::{SearchConfig, SearchEngine, SearchOutcome};
pub use error::SearchError;
pub use eval::{evaluate, MATERIAL_WEIGHT};
pub use play::{play_game, PlayedGame};
pub use positional::{PositionalTable, TableError, Tier};
pub use search::SearchStats;
