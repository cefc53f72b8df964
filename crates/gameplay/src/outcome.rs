use super::Mark;

/// Terminal or non-terminal classification of a board. Derived purely from
/// board contents; once non-ongoing no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won(Mark),
    Draw,
}

impl Outcome {
    /// True if the game has ended, by win or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::Won(mark) => write!(f, "won by {}", mark),
            Self::Draw => write!(f, "draw"),
        }
    }
}
