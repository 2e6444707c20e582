//! Composable legality checks shared by every rule table.
//!
//! Each check looks at a board snapshot from the point of view of one piece
//! and contributes zero or more options. Leaving the board is never an error:
//! a single-offset check simply adds nothing and a ray stops.

use crate::{
    board::BoardState,
    coord::{Coord, Vector},
    movement::{MovementKind, MovementOption, OptionSet},
    piece::Piece,
};

enum Occupant {
    Empty,
    Friend,
    Enemy,
}

pub struct Reach<'a> {
    board: &'a BoardState,
    piece: Piece,
    origin: Coord,
    options: OptionSet,
}
impl<'a> Reach<'a> {
    pub fn new(board: &'a BoardState, piece: Piece, origin: Coord) -> Self {
        Reach {
            board,
            piece,
            origin,
            options: OptionSet::new(),
        }
    }
    pub fn piece(&self) -> Piece {
        self.piece
    }
    pub fn origin(&self) -> Coord {
        self.origin
    }
    /// Row delta of one step towards the opponent.
    pub fn forward(&self) -> i8 {
        self.piece.side().forward()
    }
    pub fn finish(self) -> OptionSet {
        self.options
    }
    fn occupant(&self, position: Coord) -> Occupant {
        match self.board.piece_at(position) {
            None => Occupant::Empty,
            Some(piece) if piece.side() == self.piece.side() => Occupant::Friend,
            Some(_) => Occupant::Enemy,
        }
    }
    /// Move and capture become `Promote` when a promotable piece lands on its
    /// side's far rank.
    fn push(&mut self, destination: Coord, kind: MovementKind) {
        let kind = match kind {
            MovementKind::Move | MovementKind::Capture
                if self.piece.kind().is_promotable()
                    && destination.row() == self.piece.side().promotion_rank() =>
            {
                MovementKind::Promote
            }
            kind => kind,
        };
        self.options.insert(MovementOption { destination, kind });
    }
    pub fn single_move(&mut self, offset: Vector) {
        if let Some(destination) = self.origin.move_by(offset) {
            self.single_move_absolute(destination);
        }
    }
    pub fn single_move_absolute(&mut self, destination: Coord) {
        if let Occupant::Empty = self.occupant(destination) {
            self.push(destination, MovementKind::Move);
        }
    }
    pub fn single_capture(&mut self, offset: Vector) {
        let Some(destination) = self.origin.move_by(offset) else {
            return;
        };
        if let Occupant::Enemy = self.occupant(destination) {
            self.push(destination, MovementKind::Capture);
        }
    }
    /// Strikes the enemy on `origin + offset` without moving.
    pub fn capture_afar(&mut self, offset: Vector) {
        let Some(target) = self.origin.move_by(offset) else {
            return;
        };
        if let Occupant::Enemy = self.occupant(target) {
            self.push(target, MovementKind::CaptureAfar);
        }
    }
    /// Move or capture on `origin + offset`, jumping over anything between.
    pub fn step(&mut self, offset: Vector) {
        self.single_move(offset);
        self.single_capture(offset);
    }
    pub fn steps(&mut self, offsets: impl IntoIterator<Item = Vector>) {
        for offset in offsets {
            self.step(offset);
        }
    }
    /// Walks at most `limit` tiles in `direction`: empty tiles become moves,
    /// the first occupied tile ends the walk and becomes a capture if it holds
    /// an enemy.
    pub fn ray_up_to(&mut self, direction: Vector, limit: usize) {
        for destination in self.origin.line_exclusive(direction).take(limit) {
            match self.occupant(destination) {
                Occupant::Empty => self.push(destination, MovementKind::Move),
                Occupant::Friend => break,
                Occupant::Enemy => {
                    self.push(destination, MovementKind::Capture);
                    break;
                }
            }
        }
    }
    pub fn ray(&mut self, direction: Vector) {
        self.ray_up_to(direction, usize::MAX);
    }
    pub fn rays(&mut self, directions: impl IntoIterator<Item = Vector>) {
        for direction in directions {
            self.ray(direction);
        }
    }
    pub fn diagonal_front_rays(&mut self) {
        let forward = self.forward();
        self.rays(
            Vector::DIAGONAL
                .into_iter()
                .filter(|direction| direction.row == forward),
        );
    }
    pub fn diagonal_back_rays(&mut self) {
        let forward = self.forward();
        self.rays(
            Vector::DIAGONAL
                .into_iter()
                .filter(|direction| direction.row == -forward),
        );
    }
    pub fn diagonal_rays(&mut self) {
        self.diagonal_front_rays();
        self.diagonal_back_rays();
    }
    pub fn orthogonal_rays(&mut self) {
        self.rays(Vector::ORTHOGONAL);
    }
}
