//! Pure game logic for two-player grid matches.
//!
//! Nothing in this crate knows about sockets or matchmaking. Both sides of a
//! match own an independent [`Board`] and converge by applying the same
//! sequence of [`Move`]s; [`Outcome`] is derived from board contents alone.
//!
//! ## Core Types
//!
//! - [`Mark`] — the two fixed symbols, X and O
//! - [`Move`] — an immutable (cell, mark) pair carried over the wire
//! - [`Board`] — nine cells with idempotent placement
//! - [`Outcome`] — ongoing, won, or drawn

mod board;
mod mark;
mod outcome;
mod play;

pub use board::*;
pub use mark::*;
pub use outcome::*;
pub use play::*;
