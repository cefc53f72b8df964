use serde::Deserialize;
use serde::Serialize;
use ttr_gameplay::Mark;
use ttr_gameplay::Move;

/// Messages sent from a client to the coordinator over the channel.
/// Payload field names follow the browser clients this protocol grew up
/// with: `gameId` and `yourTurn`, camelCased on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Request to join (or create) the match with this identifier.
    JoinGame {
        #[serde(rename = "gameId")]
        game: String,
    },
    /// Report a move already applied on the acting client's board.
    MakeMove {
        #[serde(rename = "gameId")]
        game: String,
        #[serde(rename = "move")]
        play: Move,
    },
}

/// Messages sent from the coordinator to a client.
/// `start_game` payloads are per-recipient: each side sees its own symbol
/// and turn flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Acknowledges the first participant of a fresh match.
    Joined,
    /// The second participant arrived; the match is active.
    StartGame {
        symbol: Mark,
        #[serde(rename = "yourTurn")]
        your_turn: bool,
    },
    /// The opponent moved; the turn passes to the recipient.
    MoveMade {
        #[serde(rename = "move")]
        play: Move,
        #[serde(rename = "yourTurn")]
        your_turn: bool,
    },
}

impl ClientMessage {
    pub fn join_game(game: &str) -> Self {
        Self::JoinGame {
            game: game.to_string(),
        }
    }
    pub fn make_move(game: &str, play: Move) -> Self {
        Self::MakeMove {
            game: game.to_string(),
            play,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize client message")
    }
    pub fn from_json(s: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(s).map_err(|_| ProtocolError::Malformed(s.to_string()))
    }
}

impl ServerMessage {
    pub fn start_game(symbol: Mark, your_turn: bool) -> Self {
        Self::StartGame { symbol, your_turn }
    }
    pub fn move_made(play: Move, your_turn: bool) -> Self {
        Self::MoveMade { play, your_turn }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
    pub fn from_json(s: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(s).map_err(|_| ProtocolError::Malformed(s.to_string()))
    }
}

/// Errors raised while decoding inbound frames.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    Malformed(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed message: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}
