use log::{debug, error, trace};

use crate::{
    board::BoardState,
    coord::Coord,
    error::InvalidState,
    event::TurnEvent,
    movement::{MovementKind, MovementOption, OptionMap, OptionSet},
    piece::{Piece, PieceId, PieceKind},
    primitive::Reach,
    rules,
    side::Side,
};

/// Both sides' option maps for one ply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    gold: OptionMap,
    scarlet: OptionMap,
    gold_targeted: bool,
    scarlet_targeted: bool,
}
impl Options {
    pub fn map(&self, side: Side) -> &OptionMap {
        match side {
            Side::Gold => &self.gold,
            Side::Scarlet => &self.scarlet,
        }
    }
    fn map_mut(&mut self, side: Side) -> &mut OptionMap {
        match side {
            Side::Gold => &mut self.gold,
            Side::Scarlet => &mut self.scarlet,
        }
    }
    pub fn get(&self, side: Side, id: PieceId) -> Option<&OptionSet> {
        self.map(side).get(&id)
    }
    /// Whether the king of `side` could be captured this ply.
    pub fn is_targeted(&self, side: Side) -> bool {
        match side {
            Side::Gold => self.gold_targeted,
            Side::Scarlet => self.scarlet_targeted,
        }
    }
    fn set_targeted(&mut self, side: Side, targeted: bool) {
        match side {
            Side::Gold => self.gold_targeted = targeted,
            Side::Scarlet => self.scarlet_targeted = targeted,
        }
    }
    /// At least one piece of `side` has a non-empty option set.
    pub fn can_act(&self, side: Side) -> bool {
        self.map(side).values().any(|options| !options.is_empty())
    }
    /// Every `(piece, option)` pair of `side`.
    pub fn choices(&self, side: Side) -> impl Iterator<Item = (PieceId, MovementOption)> {
        self.map(side)
            .iter()
            .flat_map(|(id, options)| options.iter().map(move |option| (*id, option)))
    }
}

/// Whether `piece` standing on `position` is held in place by an enemy
/// basilisk directly beneath it.
pub fn is_frozen(board: &BoardState, piece: Piece, position: Coord) -> bool {
    position
        .level()
        .below()
        .and_then(|below| board.piece_at(position.with_level(below)))
        .is_some_and(|under| under.side() != piece.side() && under.kind() == PieceKind::Basilisk)
}
/// Options of a single piece, ignoring whether its king is targeted.
pub fn piece_options(board: &BoardState, piece: Piece, position: Coord) -> OptionSet {
    if is_frozen(board, piece, position) {
        trace!("{piece} on {position} is frozen");
        return OptionSet::new();
    }
    let mut reach = Reach::new(board, piece, position);
    rules::add_options(&mut reach);
    let options = reach.finish();
    trace!("{piece} on {position} has {} options", options.len());
    options
}
fn king_position(board: &BoardState, side: Side) -> Result<Coord, InvalidState> {
    let mut kings = board.pieces_of(side).filter(|(_, piece)| piece.is_king());
    match (kings.next(), kings.count()) {
        (Some((position, _)), 0) => Ok(position),
        (first, rest) => {
            let count = usize::from(first.is_some()) + rest;
            error!("found {count} kings for {side}");
            Err(InvalidState::KingCount { side, count })
        }
    }
}
/// Computes the option maps of both sides. Each map has exactly one entry per
/// piece of that side on `board`.
///
/// A side whose king is targeted keeps its king's options while every other
/// piece of that side gets an empty set.
///
/// # Errors
///
/// Fails when a side does not have exactly one king.
pub fn generate(board: &BoardState, history: &[TurnEvent]) -> Result<Options, InvalidState> {
    let gold_king = king_position(board, Side::Gold)?;
    let scarlet_king = king_position(board, Side::Scarlet)?;
    debug!("generating options for ply {}", history.len() + 1);

    let mut options = Options::default();
    for (position, piece) in board.pieces() {
        options
            .map_mut(piece.side())
            .insert(piece.id(), piece_options(board, piece, position));
    }
    let targeted = [
        (Side::Gold, is_attacked(&options, Side::Scarlet, gold_king)),
        (Side::Scarlet, is_attacked(&options, Side::Gold, scarlet_king)),
    ];
    for (side, targeted) in targeted {
        options.set_targeted(side, targeted);
        if targeted {
            debug!("{side} king is targeted");
            for (_, piece) in board.pieces_of(side).filter(|(_, piece)| !piece.is_king()) {
                if let Some(set) = options.map_mut(side).get_mut(&piece.id()) {
                    set.clear();
                }
            }
        }
    }
    Ok(options)
}
/// A promotion onto an occupied tile captures too, so it counts alongside
/// the plain and distant captures.
fn is_attacked(options: &Options, attacker: Side, position: Coord) -> bool {
    options.choices(attacker).any(|(_, option)| {
        option.destination == position
            && matches!(
                option.kind,
                MovementKind::Capture | MovementKind::CaptureAfar | MovementKind::Promote
            )
    })
}
