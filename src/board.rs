use std::ops::Index;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    coord::Coord,
    error::{InvalidState, PieceNotFound},
    grid::Grid,
    piece::{Piece, PieceId},
    side::Side,
};

/// The three stacked boards. A tile holds at most one piece and no id appears
/// on more than one tile.
///
/// Cloning yields a fully independent board; this is how snapshots are handed
/// out to the move generator and to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardState {
    tiles: Grid<Option<Piece>>,
}
impl BoardState {
    pub fn empty() -> Self {
        BoardState::default()
    }
    pub fn from_grid(tiles: Grid<Option<Piece>>) -> Result<Self, InvalidState> {
        let board = BoardState { tiles };
        board.check_unique_ids()?;
        Ok(board)
    }
    /// Builds a board from `(position, piece)` pairs. A later pair for the
    /// same position replaces the earlier one.
    pub fn from_placements(
        placements: impl IntoIterator<Item = (Coord, Piece)>,
    ) -> Result<Self, InvalidState> {
        let mut tiles = Grid::default();
        for (position, piece) in placements {
            tiles[position] = Some(piece);
        }
        BoardState::from_grid(tiles)
    }
    fn check_unique_ids(&self) -> Result<(), InvalidState> {
        let mut seen = FxHashSet::default();
        for piece in self.tiles.values().flatten() {
            if !seen.insert(piece.id()) {
                return Err(InvalidState::DuplicateId(piece.id()));
            }
        }
        Ok(())
    }
    pub fn piece_at(&self, position: Coord) -> Option<Piece> {
        self.tiles[position]
    }
    /// Writing `None` clears the tile.
    pub fn set_piece_at(&mut self, position: Coord, piece: Option<Piece>) {
        self.tiles[position] = piece;
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> {
        self.tiles
            .positioned_values()
            .filter_map(|(position, piece)| piece.map(|piece| (position, piece)))
    }
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> {
        self.pieces().filter(move |(_, piece)| piece.side() == side)
    }
    fn find(&self, id: PieceId) -> Result<(Coord, Piece), PieceNotFound> {
        self.pieces()
            .find(|(_, piece)| piece.id() == id)
            .ok_or(PieceNotFound(id))
    }
    pub fn piece_with_id(&self, id: PieceId) -> Result<Piece, PieceNotFound> {
        self.find(id).map(|(_, piece)| piece)
    }
    pub fn position_of(&self, id: PieceId) -> Result<Coord, PieceNotFound> {
        self.find(id).map(|(position, _)| position)
    }
    pub fn owner_of(&self, id: PieceId) -> Result<Side, PieceNotFound> {
        self.piece_with_id(id).map(Piece::side)
    }
    pub fn all_piece_positions(&self) -> FxHashMap<Piece, Coord> {
        self.pieces().map(|(position, piece)| (piece, position)).collect()
    }
    /// Relocates a piece, clearing its old tile. Whatever stood on
    /// `destination` is overwritten and returned.
    pub fn move_piece(
        &mut self,
        id: PieceId,
        destination: Coord,
    ) -> Result<Option<Piece>, PieceNotFound> {
        let (origin, piece) = self.find(id)?;
        self.tiles[origin] = None;
        Ok(self.tiles[destination].replace(piece))
    }
    pub fn remove_piece(&mut self, id: PieceId) -> Result<Piece, PieceNotFound> {
        let (position, piece) = self.find(id)?;
        self.tiles[position] = None;
        Ok(piece)
    }
    /// Replaces a piece with its promoted form in place. Returns `None`,
    /// leaving the board untouched, if its kind has no promotion.
    pub fn promote_piece(&mut self, id: PieceId) -> Result<Option<Piece>, PieceNotFound> {
        let (position, piece) = self.find(id)?;
        let promoted = piece.promoted();
        if promoted.is_some() {
            self.tiles[position] = promoted;
        }
        Ok(promoted)
    }
}
impl Index<Coord> for BoardState {
    type Output = Option<Piece>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.tiles[index]
    }
}
