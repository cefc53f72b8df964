//! Wire message contracts between clients and the match coordinator.
//!
//! Both directions are closed tagged enums so relay and state-machine logic
//! pattern-match exhaustively instead of trusting loosely shaped payloads.
//! The serde tag strings are the wire event names.
//!
//! ## Core Types
//!
//! - [`ClientMessage`] — client → coordinator (`join_game`, `make_move`)
//! - [`ServerMessage`] — coordinator → client (`joined`, `start_game`, `move_made`)
//! - [`ProtocolError`] — malformed inbound frames

mod message;

pub use message::*;
