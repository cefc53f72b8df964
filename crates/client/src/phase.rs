/// How a finished match ended, from this participant's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    Draw,
}

/// Lifecycle of one participant's view of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No join acknowledged yet.
    Unjoined,
    /// Joined a fresh match, waiting for the second participant.
    WaitingForOpponent,
    /// This participant may submit a move.
    YourTurn,
    /// Waiting on the opponent's move.
    OpponentTurn,
    /// Terminal; no further moves are accepted.
    Finished(Ending),
}

impl Phase {
    /// True if this participant may currently submit a move.
    pub fn is_your_turn(&self) -> bool {
        matches!(self, Self::YourTurn)
    }
    /// True once the match has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
    /// The ending, once finished.
    pub fn ending(&self) -> Option<Ending> {
        match self {
            Self::Finished(ending) => Some(*ending),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unjoined => write!(f, "unjoined"),
            Self::WaitingForOpponent => write!(f, "waiting for opponent"),
            Self::YourTurn => write!(f, "your turn"),
            Self::OpponentTurn => write!(f, "opponent's turn"),
            Self::Finished(Ending::Won) => write!(f, "you won"),
            Self::Finished(Ending::Lost) => write!(f, "you lost"),
            Self::Finished(Ending::Draw) => write!(f, "draw"),
        }
    }
}
