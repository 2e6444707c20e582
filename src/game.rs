use log::{debug, error, warn};

use crate::{
    board::BoardState,
    coord::Coord,
    end_state::EndState,
    error::{GameError, InvalidState, PieceNotFound},
    event::{TurnEvent, TurnEventKind, TurnOutcome},
    layout::starting_position,
    movegen::{self, Options},
    movement::{MovementKind, MovementOption, OptionSet},
    piece::{Piece, PieceId},
    side::Side,
};

/// A game in progress: the live board, the side to move, every successful
/// event so far and the options of the current ply.
///
/// The options are recomputed from scratch after every request, accepted or
/// not.
#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    side: Side,
    history: Vec<TurnEvent>,
    options: Options,
    end_state: Option<EndState>,
    captured_king: Option<Side>,
}
impl Game {
    /// A game from the standard opening position, Gold to move.
    ///
    /// # Errors
    ///
    /// Never fails for the standard position; the result mirrors
    /// [`Game::from_board`].
    pub fn new() -> Result<Self, InvalidState> {
        Game::from_board(starting_position(), Side::Gold)
    }
    /// # Errors
    ///
    /// Fails when a side does not have exactly one king.
    pub fn from_board(board: BoardState, side: Side) -> Result<Self, InvalidState> {
        let options = movegen::generate(&board, &[])?;
        let end_state = end_state_of(&options);
        Ok(Game {
            board,
            side,
            history: Vec::new(),
            options,
            end_state,
            captured_king: None,
        })
    }
    pub fn current_side(&self) -> Side {
        self.side
    }
    /// An independent copy of the live board.
    pub fn board(&self) -> BoardState {
        self.board.clone()
    }
    pub fn piece_at(&self, position: Coord) -> Option<Piece> {
        self.board.piece_at(position)
    }
    /// # Errors
    ///
    /// Fails if the piece is not on the board.
    pub fn position_of(&self, id: PieceId) -> Result<Coord, PieceNotFound> {
        self.board.position_of(id)
    }
    /// # Errors
    ///
    /// Fails if the piece is not on the board.
    pub fn belongs_to(&self, id: PieceId, side: Side) -> Result<bool, PieceNotFound> {
        Ok(self.board.owner_of(id)? == side)
    }
    /// The options of a piece for the current ply. Pieces of the side not to
    /// move also have options; they are what that side could do if it were
    /// its turn.
    ///
    /// # Errors
    ///
    /// Fails if the piece is not on the board.
    pub fn options(&self, id: PieceId) -> Result<OptionSet, PieceNotFound> {
        let side = self.board.owner_of(id)?;
        Ok(self.options.get(side, id).cloned().unwrap_or_default())
    }
    /// Every legal `(piece, option)` pair for the side to move.
    pub fn choices(&self) -> impl Iterator<Item = (PieceId, MovementOption)> {
        self.options.choices(self.side)
    }
    pub fn is_targeted(&self, side: Side) -> bool {
        self.options.is_targeted(side)
    }
    /// Successful events, oldest first. Rejections and end-of-game events are
    /// not recorded.
    pub fn history(&self) -> &[TurnEvent] {
        &self.history
    }
    /// `None` while both sides can still act.
    pub fn end_state(&self) -> Option<EndState> {
        self.end_state
    }
    /// Attempts to move the piece `id` to `target`, or to capture the piece on
    /// `target` from afar.
    ///
    /// The turn passes to the other side whether or not the request is legal.
    ///
    /// # Errors
    ///
    /// Fails with [`GameError::NotFound`] if `id` is not on the board, and
    /// with [`GameError::InvalidState`] if the game reaches a state that
    /// should not be possible.
    pub fn request_action(
        &mut self,
        id: PieceId,
        target: Coord,
    ) -> Result<TurnOutcome, GameError> {
        let owner = self.board.owner_of(id)?;
        let event = if owner == self.side {
            match self.options.get(owner, id).and_then(|set| set.get(target)) {
                Some(option) => self.resolve(id, option)?,
                None => {
                    warn!("{id} cannot go to {target}");
                    TurnEvent::InvalidLocation {
                        piece: id,
                        position: target,
                    }
                }
            }
        } else {
            warn!("{id} belongs to {owner} but {} is to move", self.side);
            TurnEvent::InvalidPlayer {
                piece: id,
                position: target,
            }
        };
        if !event.is_error_event() {
            if let Some(captured) = event.captured_piece_id() {
                let captured = self.board.piece_with_id(captured)?;
                if captured.is_king() {
                    self.captured_king = Some(captured.side());
                }
            }
            self.apply(event)?;
            self.history.push(event);
            debug!("ply {}: {event}", self.history.len());
        }
        self.side = !self.side;
        self.refresh()?;
        Ok(TurnOutcome {
            event,
            end: self.end_state,
        })
    }
    /// Recomputes the options of the new ply. Once a king is taken nothing
    /// can act anymore and the capturing side has won.
    fn refresh(&mut self) -> Result<(), InvalidState> {
        match self.captured_king {
            Some(loser) => {
                self.options = Options::default();
                self.end_state = Some(EndState::Win(!loser));
            }
            None => {
                self.options = movegen::generate(&self.board, &self.history)?;
                self.end_state = end_state_of(&self.options);
            }
        }
        if let Some(end_state) = self.end_state {
            debug!("game over: {end_state}");
        }
        Ok(())
    }
    fn resolve(&self, id: PieceId, option: MovementOption) -> Result<TurnEvent, InvalidState> {
        let position = option.destination;
        let occupant = self.board.piece_at(position).map(Piece::id);
        let event = match option.kind {
            MovementKind::Move => TurnEvent::PieceMoved { piece: id, position },
            MovementKind::Capture => TurnEvent::PieceCaptured {
                piece: id,
                captured: occupant
                    .ok_or_else(|| nothing_to_capture(TurnEventKind::PieceCaptured, position))?,
                position,
            },
            MovementKind::CaptureAfar => TurnEvent::PieceCapturedAfar {
                piece: id,
                captured: occupant
                    .ok_or_else(|| nothing_to_capture(TurnEventKind::PieceCapturedAfar, position))?,
                position,
            },
            MovementKind::Promote => TurnEvent::PiecePromoted {
                piece: id,
                position,
                captured: occupant,
            },
        };
        Ok(event)
    }
    fn apply(&mut self, event: TurnEvent) -> Result<(), GameError> {
        match event {
            TurnEvent::PieceMoved { piece, position }
            | TurnEvent::PieceCaptured {
                piece, position, ..
            } => {
                self.board.move_piece(piece, position)?;
            }
            TurnEvent::PieceCapturedAfar { captured, .. } => {
                self.board.remove_piece(captured)?;
            }
            TurnEvent::PiecePromoted {
                piece, position, ..
            } => {
                self.board.move_piece(piece, position)?;
                if self.board.promote_piece(piece)?.is_none() {
                    error!("{piece} reached {position} but has no promotion");
                    return Err(InvalidState::UnexpectedEvent(event.kind()).into());
                }
            }
            TurnEvent::InvalidLocation { .. }
            | TurnEvent::InvalidPlayer { .. }
            | TurnEvent::End(_) => {
                error!("{event} cannot be applied to the board");
                return Err(InvalidState::UnexpectedEvent(event.kind()).into());
            }
        }
        Ok(())
    }
}
fn nothing_to_capture(kind: TurnEventKind, position: Coord) -> InvalidState {
    error!("capture option on {position} but the tile is empty");
    InvalidState::UnexpectedEvent(kind)
}
fn end_state_of(options: &Options) -> Option<EndState> {
    EndState::from_mobility(options.can_act(Side::Gold), options.can_act(Side::Scarlet))
}
#[cfg(test)]
mod test {
    use crate::{
        board::BoardState,
        coord,
        end_state::EndState,
        error::{GameError, InvalidState, PieceNotFound},
        event::{TurnEvent, TurnEventKind},
        game::Game,
        piece::{Piece, PieceKind},
        side::Side,
    };

    fn game(side: Side, pieces: &[(&str, PieceKind, Side)]) -> Game {
        let board = BoardState::from_placements(
            pieces
                .iter()
                .map(|(label, kind, side)| (label.parse().unwrap(), Piece::new(*kind, *side))),
        )
        .unwrap();
        Game::from_board(board, side).unwrap()
    }

    #[test]
    fn warrior_opening_move() {
        let mut game = Game::new().unwrap();
        let warrior = game.piece_at(coord!("2e2")).unwrap();
        let outcome = game.request_action(warrior.id(), coord!("2e3")).unwrap();
        assert_eq!(
            outcome.event,
            TurnEvent::PieceMoved {
                piece: warrior.id(),
                position: coord!("2e3")
            }
        );
        assert_eq!(outcome.end, None);
        assert_eq!(game.current_side(), Side::Scarlet);
        assert_eq!(game.piece_at(coord!("2e3")), Some(warrior));
        assert_eq!(game.piece_at(coord!("2e2")), None);
        assert_eq!(game.history(), [outcome.event]);
    }
    #[test]
    fn wrong_side_is_rejected_but_passes_the_turn() {
        let mut game = Game::new().unwrap();
        let before = game.board();
        let warrior = game.piece_at(coord!("2e7")).unwrap();
        let outcome = game.request_action(warrior.id(), coord!("2e6")).unwrap();
        assert_eq!(outcome.event.kind(), TurnEventKind::InvalidPlayer);
        assert!(outcome.is_rejected());
        assert_eq!(game.current_side(), Side::Scarlet);
        assert_eq!(game.board(), before);
        assert!(game.history().is_empty());
    }
    #[test]
    fn unreachable_destination_is_rejected() {
        let mut game = Game::new().unwrap();
        let warrior = game.piece_at(coord!("2e2")).unwrap();
        let outcome = game.request_action(warrior.id(), coord!("2e5")).unwrap();
        assert_eq!(
            outcome.event,
            TurnEvent::InvalidLocation {
                piece: warrior.id(),
                position: coord!("2e5")
            }
        );
        assert_eq!(game.current_side(), Side::Scarlet);
        assert_eq!(game.piece_at(coord!("2e2")), Some(warrior));
        assert!(game.history().is_empty());
    }
    #[test]
    fn unknown_piece_is_a_lookup_error() {
        let mut game = Game::new().unwrap();
        let stranger = Piece::new(PieceKind::Warrior, Side::Gold).id();
        assert_eq!(
            game.request_action(stranger, coord!("2e3")),
            Err(GameError::NotFound(PieceNotFound(stranger)))
        );
        assert_eq!(game.current_side(), Side::Gold);
        assert_eq!(game.options(stranger), Err(PieceNotFound(stranger)));
        assert_eq!(game.position_of(stranger), Err(PieceNotFound(stranger)));
    }
    #[test]
    fn frozen_king_loses() {
        let mut game = game(
            Side::Scarlet,
            &[
                ("2a1", PieceKind::King, Side::Gold),
                ("2l8", PieceKind::King, Side::Scarlet),
                ("1a2", PieceKind::Basilisk, Side::Scarlet),
            ],
        );
        assert_eq!(game.end_state(), None);
        let basilisk = game.piece_at(coord!("1a2")).unwrap();
        let outcome = game.request_action(basilisk.id(), coord!("1a1")).unwrap();
        assert_eq!(outcome.event.kind(), TurnEventKind::PieceMoved);
        assert_eq!(outcome.end, Some(EndState::Win(Side::Scarlet)));
        assert_eq!(
            outcome.events().last(),
            Some(TurnEvent::End(EndState::Win(Side::Scarlet)))
        );
        assert_eq!(game.end_state(), Some(EndState::Win(Side::Scarlet)));
        assert_eq!(game.history().len(), 1);
    }
    #[test]
    fn warrior_promotes_to_paladin() {
        let mut game = game(
            Side::Gold,
            &[
                ("2g1", PieceKind::King, Side::Gold),
                ("2l8", PieceKind::King, Side::Scarlet),
                ("2c7", PieceKind::Warrior, Side::Gold),
            ],
        );
        let warrior = game.piece_at(coord!("2c7")).unwrap();
        let outcome = game.request_action(warrior.id(), coord!("2c8")).unwrap();
        assert_eq!(
            outcome.event,
            TurnEvent::PiecePromoted {
                piece: warrior.id(),
                position: coord!("2c8"),
                captured: None
            }
        );
        let promoted = game.board().piece_at(coord!("2c8")).unwrap();
        assert_eq!(promoted.id(), warrior.id());
        assert_eq!(promoted.kind(), PieceKind::Paladin);
        assert_eq!(game.position_of(warrior.id()), Ok(coord!("2c8")));
    }
    #[test]
    fn promotion_can_capture() {
        let mut game = game(
            Side::Gold,
            &[
                ("2g1", PieceKind::King, Side::Gold),
                ("2l8", PieceKind::King, Side::Scarlet),
                ("2c7", PieceKind::Warrior, Side::Gold),
                ("2d8", PieceKind::Thief, Side::Scarlet),
            ],
        );
        let warrior = game.piece_at(coord!("2c7")).unwrap();
        let thief = game.piece_at(coord!("2d8")).unwrap();
        let outcome = game.request_action(warrior.id(), coord!("2d8")).unwrap();
        assert_eq!(outcome.event.captured_piece_id(), Some(thief.id()));
        assert_eq!(game.position_of(thief.id()), Err(PieceNotFound(thief.id())));
    }
    #[test]
    fn capture_replaces_the_defender() {
        let mut game = game(
            Side::Gold,
            &[
                ("2g1", PieceKind::King, Side::Gold),
                ("2l8", PieceKind::King, Side::Scarlet),
                ("2a1", PieceKind::Oliphant, Side::Gold),
                ("2a5", PieceKind::Warrior, Side::Scarlet),
            ],
        );
        let oliphant = game.piece_at(coord!("2a1")).unwrap();
        let warrior = game.piece_at(coord!("2a5")).unwrap();
        let outcome = game.request_action(oliphant.id(), coord!("2a5")).unwrap();
        assert_eq!(
            outcome.event,
            TurnEvent::PieceCaptured {
                piece: oliphant.id(),
                captured: warrior.id(),
                position: coord!("2a5")
            }
        );
        assert_eq!(game.piece_at(coord!("2a5")), Some(oliphant));
        assert_eq!(game.piece_at(coord!("2a1")), None);
    }
    #[test]
    fn dragon_stays_put_when_capturing_from_afar() {
        let mut game = game(
            Side::Gold,
            &[
                ("2g1", PieceKind::King, Side::Gold),
                ("2l8", PieceKind::King, Side::Scarlet),
                ("3f5", PieceKind::Dragon, Side::Gold),
                ("2f5", PieceKind::Warrior, Side::Scarlet),
            ],
        );
        let dragon = game.piece_at(coord!("3f5")).unwrap();
        let warrior = game.piece_at(coord!("2f5")).unwrap();
        let outcome = game.request_action(dragon.id(), coord!("2f5")).unwrap();
        assert_eq!(
            outcome.event,
            TurnEvent::PieceCapturedAfar {
                piece: dragon.id(),
                captured: warrior.id(),
                position: coord!("2f5")
            }
        );
        assert_eq!(game.piece_at(coord!("3f5")), Some(dragon));
        assert_eq!(game.piece_at(coord!("2f5")), None);
    }
    #[test]
    fn taking_the_king_ends_the_game() {
        let mut game = game(
            Side::Gold,
            &[
                ("2g1", PieceKind::King, Side::Gold),
                ("2a1", PieceKind::Oliphant, Side::Gold),
                ("2a5", PieceKind::King, Side::Scarlet),
                ("2l7", PieceKind::Warrior, Side::Scarlet),
            ],
        );
        assert!(game.is_targeted(Side::Scarlet));
        let oliphant = game.piece_at(coord!("2a1")).unwrap();
        let outcome = game.request_action(oliphant.id(), coord!("2a5")).unwrap();
        assert_eq!(outcome.event.kind(), TurnEventKind::PieceCaptured);
        assert_eq!(outcome.end, Some(EndState::Win(Side::Gold)));

        let warrior = game.piece_at(coord!("2l7")).unwrap();
        let outcome = game.request_action(warrior.id(), coord!("2l6")).unwrap();
        assert_eq!(outcome.event.kind(), TurnEventKind::InvalidLocation);
        assert_eq!(game.end_state(), Some(EndState::Win(Side::Gold)));
        assert_eq!(game.choices().count(), 0);
    }
    #[test]
    fn same_request_same_outcome() {
        let mut first = Game::new().unwrap();
        let mut second = first.clone();
        let warrior = first.piece_at(coord!("2d2")).unwrap();
        let a = first.request_action(warrior.id(), coord!("2d3"));
        let b = second.request_action(warrior.id(), coord!("2d3"));
        assert_eq!(a, b);
        assert_eq!(first.board(), second.board());
        assert_eq!(first.history(), second.history());
    }
    #[test]
    fn board_snapshots_are_detached() {
        let game = Game::new().unwrap();
        let mut snapshot = game.board();
        snapshot.set_piece_at(coord!("2g1"), None);
        assert!(game.piece_at(coord!("2g1")).is_some());
    }
    #[test]
    fn ownership_queries() {
        let game = Game::new().unwrap();
        let king = game.piece_at(coord!("2g8")).unwrap();
        assert_eq!(game.belongs_to(king.id(), Side::Scarlet), Ok(true));
        assert_eq!(game.belongs_to(king.id(), Side::Gold), Ok(false));
        assert!(game.choices().all(|(id, _)| game.belongs_to(id, Side::Gold) == Ok(true)));
    }
    #[test]
    fn boards_without_a_king_are_refused() {
        let board = BoardState::from_placements([(
            coord!("2g1"),
            Piece::new(PieceKind::King, Side::Gold),
        )])
        .unwrap();
        assert_eq!(
            Game::from_board(board, Side::Gold).map(|_| ()),
            Err(InvalidState::KingCount {
                side: Side::Scarlet,
                count: 0
            })
        );
    }
}
