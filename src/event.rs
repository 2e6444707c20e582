use std::fmt::{self, Display, Formatter};

use crate::{coord::Coord, end_state::EndState, piece::PieceId, side::Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnEventKind {
    PieceMoved,
    PieceCaptured,
    PieceCapturedAfar,
    PiecePromoted,
    InvalidLocation,
    InvalidPlayer,
    WinGold,
    WinScarlet,
    Tie,
}
impl TurnEventKind {
    /// Rejections: the board is left untouched but the turn still passes.
    pub fn is_error_event(self) -> bool {
        matches!(
            self,
            TurnEventKind::InvalidLocation | TurnEventKind::InvalidPlayer
        )
    }
    pub fn is_end_game_event(self) -> bool {
        matches!(
            self,
            TurnEventKind::WinGold | TurnEventKind::WinScarlet | TurnEventKind::Tie
        )
    }
}

/// What a requested action turned into.
///
/// `position` is always the tile the request named. For `PieceCapturedAfar`
/// that is the tile of the removed piece, not of the acting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnEvent {
    PieceMoved {
        piece: PieceId,
        position: Coord,
    },
    PieceCaptured {
        piece: PieceId,
        captured: PieceId,
        position: Coord,
    },
    PieceCapturedAfar {
        piece: PieceId,
        captured: PieceId,
        position: Coord,
    },
    PiecePromoted {
        piece: PieceId,
        position: Coord,
        captured: Option<PieceId>,
    },
    InvalidLocation {
        piece: PieceId,
        position: Coord,
    },
    InvalidPlayer {
        piece: PieceId,
        position: Coord,
    },
    End(EndState),
}
impl TurnEvent {
    pub fn kind(self) -> TurnEventKind {
        match self {
            TurnEvent::PieceMoved { .. } => TurnEventKind::PieceMoved,
            TurnEvent::PieceCaptured { .. } => TurnEventKind::PieceCaptured,
            TurnEvent::PieceCapturedAfar { .. } => TurnEventKind::PieceCapturedAfar,
            TurnEvent::PiecePromoted { .. } => TurnEventKind::PiecePromoted,
            TurnEvent::InvalidLocation { .. } => TurnEventKind::InvalidLocation,
            TurnEvent::InvalidPlayer { .. } => TurnEventKind::InvalidPlayer,
            TurnEvent::End(EndState::Win(Side::Gold)) => TurnEventKind::WinGold,
            TurnEvent::End(EndState::Win(Side::Scarlet)) => TurnEventKind::WinScarlet,
            TurnEvent::End(EndState::Tie) => TurnEventKind::Tie,
        }
    }
    pub fn is_error_event(self) -> bool {
        self.kind().is_error_event()
    }
    pub fn is_end_game_event(self) -> bool {
        self.kind().is_end_game_event()
    }
    pub fn piece_id(self) -> Option<PieceId> {
        match self {
            TurnEvent::PieceMoved { piece, .. }
            | TurnEvent::PieceCaptured { piece, .. }
            | TurnEvent::PieceCapturedAfar { piece, .. }
            | TurnEvent::PiecePromoted { piece, .. }
            | TurnEvent::InvalidLocation { piece, .. }
            | TurnEvent::InvalidPlayer { piece, .. } => Some(piece),
            TurnEvent::End(_) => None,
        }
    }
    pub fn position(self) -> Option<Coord> {
        match self {
            TurnEvent::PieceMoved { position, .. }
            | TurnEvent::PieceCaptured { position, .. }
            | TurnEvent::PieceCapturedAfar { position, .. }
            | TurnEvent::PiecePromoted { position, .. }
            | TurnEvent::InvalidLocation { position, .. }
            | TurnEvent::InvalidPlayer { position, .. } => Some(position),
            TurnEvent::End(_) => None,
        }
    }
    pub fn captured_piece_id(self) -> Option<PieceId> {
        match self {
            TurnEvent::PieceCaptured { captured, .. }
            | TurnEvent::PieceCapturedAfar { captured, .. } => Some(captured),
            TurnEvent::PiecePromoted { captured, .. } => captured,
            TurnEvent::PieceMoved { .. }
            | TurnEvent::InvalidLocation { .. }
            | TurnEvent::InvalidPlayer { .. }
            | TurnEvent::End(_) => None,
        }
    }
}
impl Display for TurnEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::PieceMoved { piece, position } => write!(f, "{piece} moves to {position}")?,
            TurnEvent::PieceCaptured {
                piece,
                captured,
                position,
            } => write!(f, "{piece} captures {captured} on {position}")?,
            TurnEvent::PieceCapturedAfar {
                piece,
                captured,
                position,
            } => write!(f, "{piece} captures {captured} on {position} from afar")?,
            TurnEvent::PiecePromoted {
                piece,
                position,
                captured,
            } => {
                write!(f, "{piece} promotes on {position}")?;
                if let Some(captured) = captured {
                    write!(f, " capturing {captured}")?;
                }
            }
            TurnEvent::InvalidLocation { piece, position } => {
                write!(f, "{piece} cannot go to {position}")?;
            }
            TurnEvent::InvalidPlayer { piece, .. } => {
                write!(f, "{piece} does not belong to the side to move")?;
            }
            TurnEvent::End(end_state) => write!(f, "{end_state}")?,
        }
        Ok(())
    }
}

/// Result of one call to `Game::request_action`: the primary event and at
/// most one end-of-game event after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnOutcome {
    pub event: TurnEvent,
    pub end: Option<EndState>,
}
impl TurnOutcome {
    pub fn events(self) -> impl Iterator<Item = TurnEvent> {
        [Some(self.event), self.end.map(TurnEvent::End)]
            .into_iter()
            .flatten()
    }
    pub fn is_rejected(self) -> bool {
        self.event.is_error_event()
    }
}
#[cfg(test)]
mod test {
    use crate::{
        coord,
        end_state::EndState,
        event::{TurnEvent, TurnEventKind, TurnOutcome},
        piece::{Piece, PieceKind},
        side::Side,
    };

    #[test]
    fn kinds_and_categories() {
        let piece = Piece::new(PieceKind::Warrior, Side::Gold).id();
        let moved = TurnEvent::PieceMoved {
            piece,
            position: coord!("2a3"),
        };
        assert_eq!(moved.kind(), TurnEventKind::PieceMoved);
        assert!(!moved.is_error_event());
        assert!(!moved.is_end_game_event());

        let rejected = TurnEvent::InvalidPlayer {
            piece,
            position: coord!("2a3"),
        };
        assert!(rejected.is_error_event());

        let end = TurnEvent::End(EndState::Win(Side::Scarlet));
        assert_eq!(end.kind(), TurnEventKind::WinScarlet);
        assert!(end.is_end_game_event());
        assert_eq!(end.piece_id(), None);
        assert_eq!(TurnEvent::End(EndState::Tie).kind(), TurnEventKind::Tie);
    }
    #[test]
    fn captured_ids() {
        let piece = Piece::new(PieceKind::Warrior, Side::Gold).id();
        let captured = Piece::new(PieceKind::Warrior, Side::Scarlet).id();
        let promoted = TurnEvent::PiecePromoted {
            piece,
            position: coord!("2b8"),
            captured: Some(captured),
        };
        assert_eq!(promoted.captured_piece_id(), Some(captured));
        assert_eq!(promoted.piece_id(), Some(piece));
        assert_eq!(promoted.position(), Some(coord!("2b8")));
        let moved = TurnEvent::PieceMoved {
            piece,
            position: coord!("2a3"),
        };
        assert_eq!(moved.captured_piece_id(), None);
    }
    #[test]
    fn outcome_has_at_most_two_events() {
        let piece = Piece::new(PieceKind::Warrior, Side::Gold).id();
        let event = TurnEvent::PieceMoved {
            piece,
            position: coord!("2a3"),
        };
        let outcome = TurnOutcome { event, end: None };
        assert_eq!(outcome.events().collect::<Vec<_>>(), [event]);
        let outcome = TurnOutcome {
            event,
            end: Some(EndState::Tie),
        };
        assert_eq!(
            outcome.events().collect::<Vec<_>>(),
            [event, TurnEvent::End(EndState::Tie)]
        );
    }
}
