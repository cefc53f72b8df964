//! Match coordinator for two-player grid games.
//!
//! The coordinator is a pure relay: it assigns identity and symbol at join
//! time, forwards moves verbatim between the two seats of a match, and holds
//! no board state. Move legality is the acting client's responsibility; a
//! stricter, validating coordinator could replace [`Lobby`] behind the same
//! interface without touching the client contract.
//!
//! ## Core Types
//!
//! - [`Lobby`] — registry of active matches keyed by caller-supplied id
//! - [`Match`] — two seats and a waiting→active lifecycle
//! - [`Seat`] — a registered participant: assigned mark plus outbound channel
//! - [`Expiry`] — idle-match garbage collection tuning

mod expiry;
mod lobby;
mod table;

pub use expiry::*;
pub use lobby::*;
pub use table::*;
