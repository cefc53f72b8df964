use serde::Deserialize;
use serde::Serialize;

/// One of the two fixed symbols assigned per participant for the lifetime
/// of a match. The first participant to join always receives X, and X
/// always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(&self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
    /// True if this mark opens the game.
    pub fn opens(&self) -> bool {
        matches!(self, Self::X)
    }
}

impl TryFrom<&str> for Mark {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "X" => Ok(Self::X),
            "O" => Ok(Self::O),
            _ => Err(anyhow::anyhow!("invalid mark: {}", s)),
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}
