//! Real-time synchronization for two-player grid games.
//!
//! This facade crate re-exports all public tictacrelay crates.
//!
//! ## Crate Organization
//!
//! ### Core Types
//! - [`core`] — Constants and logging bootstrap
//! - [`gameplay`] — Marks, board, moves, outcome evaluation
//! - [`protocol`] — Tagged wire message contracts
//!
//! ### Application
//! - [`gameroom`] — Match coordinator: registry, seating, relay
//! - [`client`] — Per-participant game state machine
//! - [`server`] — HTTP/WebSocket transport

pub use ttr_core as core;
pub use ttr_gameplay as gameplay;
pub use ttr_protocol as protocol;
pub use ttr_gameroom as gameroom;
pub use ttr_client as client;
pub use ttr_server as server;

// Re-export commonly used types at the root
pub use ttr_core::*;
pub use ttr_gameplay::*;
