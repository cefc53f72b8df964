//! Client-side state machine for one participant of a match.
//!
//! A [`GameClient`] owns its own board copy and turn flag; the opponent's
//! client converges with it purely through identical message application.
//! Outbound intents leave on a channel the transport layer drains (the same
//! wiring the coordinator uses on its side); inbound [`ServerMessage`]s are
//! fed to [`GameClient::handle`]. A rendering layer reads board, phase, and
//! mark for display but never mutates them directly.
//!
//! ## Core Types
//!
//! - [`GameClient`] — one participant's view of a match
//! - [`Phase`] — unjoined → waiting → turn-taking → finished
//! - [`Ending`] — how a finished match ended for this participant

mod machine;
mod phase;

pub use machine::*;
pub use phase::*;

pub use ttr_protocol::ServerMessage;
