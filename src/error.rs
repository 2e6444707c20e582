use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{event::TurnEventKind, piece::PieceId, side::Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceNotFound(pub PieceId);

impl Display for PieceNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "piece {} is not on the board", self.0)?;
        Ok(())
    }
}
impl Error for PieceNotFound {}

/// A broken invariant. Seeing one of these means there is a bug in the
/// engine, not in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidState {
    DuplicateId(PieceId),
    KingCount { side: Side, count: usize },
    UnexpectedEvent(TurnEventKind),
}
impl Display for InvalidState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidState::DuplicateId(id) => write!(f, "board contains duplicate id {id}")?,
            InvalidState::KingCount { side, count } => {
                write!(f, "found {count} kings for {side}, expected exactly 1")?;
            }
            InvalidState::UnexpectedEvent(kind) => {
                write!(f, "resolved an action into unexpected event {kind:?}")?;
            }
        }
        Ok(())
    }
}
impl Error for InvalidState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameError {
    NotFound(PieceNotFound),
    InvalidState(InvalidState),
}
impl From<PieceNotFound> for GameError {
    fn from(value: PieceNotFound) -> Self {
        GameError::NotFound(value)
    }
}
impl From<InvalidState> for GameError {
    fn from(value: InvalidState) -> Self {
        GameError::InvalidState(value)
    }
}
impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotFound(err) => write!(f, "{err}")?,
            GameError::InvalidState(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::NotFound(err) => Some(err),
            GameError::InvalidState(err) => Some(err),
        }
    }
}
