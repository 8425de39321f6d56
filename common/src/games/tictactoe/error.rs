use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(usize),
    CellOccupied(usize),
    EmptyMark,
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(position) => {
                write!(f, "Position {} is out of bounds", position)
            }
            MoveError::CellOccupied(position) => {
                write!(f, "Cell {} is already marked", position)
            }
            MoveError::EmptyMark => write!(f, "Cannot place an empty mark"),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    NotHumanTurn,
    NotComputerTurn,
    Move(MoveError),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NotHumanTurn => write!(f, "Not the human player's turn"),
            MatchError::NotComputerTurn => write!(f, "Not the computer's turn"),
            MatchError::Move(e) => write!(f, "Invalid move: {}", e),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for MatchError {
    fn from(e: MoveError) -> Self {
        MatchError::Move(e)
    }
}
