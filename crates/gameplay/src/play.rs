use super::Mark;
use serde::Deserialize;
use serde::Serialize;

/// An immutable move: a cell index in [0, 8] and the mark placing it.
/// Produced by the acting client and carried verbatim through the
/// coordinator to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub index: usize,
    #[serde(rename = "symbol")]
    pub mark: Mark,
}

impl Move {
    pub fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.mark, self.index)
    }
}
