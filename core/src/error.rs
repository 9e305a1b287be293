use std::error::Error;
use std::fmt;

/// Rejected move. The match state is left untouched; the caller is expected
/// to re-prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    CellOccupied(usize),
    OutOfBounds(usize),
    MatchOver,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::CellOccupied(cell) => write!(f, "Cell {} is already marked", cell),
            IllegalMove::OutOfBounds(cell) => write!(f, "Cell {} is out of bounds", cell),
            IllegalMove::MatchOver => write!(f, "Match is already over"),
        }
    }
}

impl Error for IllegalMove {}

/// Internally contradictory state, e.g. the engine asked to move on a board
/// with no empty cell. Programming-error class, not user-recoverable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantViolation(pub String);

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.0)
    }
}

impl Error for InvariantViolation {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    Illegal(IllegalMove),
    Invariant(InvariantViolation),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Illegal(e) => write!(f, "{}", e),
            MatchError::Invariant(e) => write!(f, "{}", e),
        }
    }
}

impl Error for MatchError {}

impl From<IllegalMove> for MatchError {
    fn from(e: IllegalMove) -> Self {
        MatchError::Illegal(e)
    }
}

impl From<InvariantViolation> for MatchError {
    fn from(e: InvariantViolation) -> Self {
        MatchError::Invariant(e)
    }
}
