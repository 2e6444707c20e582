use crate::{
    board::BoardState,
    coord::{COLUMN_COUNT, Coord, Level},
    piece::{Piece, PieceKind},
    side::Side,
};

#[rustfmt::skip]
const GROUND_BACK_RANK: [PieceKind; COLUMN_COUNT as usize] = [
    PieceKind::Oliphant, PieceKind::Unicorn, PieceKind::Hero, PieceKind::Thief,
    PieceKind::Cleric, PieceKind::Mage, PieceKind::King, PieceKind::Paladin,
    PieceKind::Thief, PieceKind::Hero, PieceKind::Unicorn, PieceKind::Oliphant,
];

/// Columns holding a sylph at the start of the game. A grounded sylph may fly
/// back to any of these on its own side.
pub const SYLPH_COLUMNS: [u8; 6] = [1, 3, 5, 7, 9, 11];
const DWARF_COLUMNS: [u8; 6] = [2, 4, 6, 8, 10, 12];

/// `(level, column, kind)` on each side's back rank, outside the ground level.
const BACK_RANK_PIECES: [(Level, u8, PieceKind); 6] = [
    (Level::Sky, 3, PieceKind::Griffin),
    (Level::Sky, 7, PieceKind::Dragon),
    (Level::Sky, 11, PieceKind::Griffin),
    (Level::Underworld, 3, PieceKind::Basilisk),
    (Level::Underworld, 7, PieceKind::Elemental),
    (Level::Underworld, 11, PieceKind::Basilisk),
];

fn placements(side: Side) -> impl Iterator<Item = (Level, u8, u8, PieceKind)> {
    let back = side.back_rank();
    let second = side.second_rank();
    let ground_back = (1..).zip(GROUND_BACK_RANK).map(move |(column, kind)| {
        (Level::Ground, column, back, kind)
    });
    let warriors = (1..=COLUMN_COUNT).map(move |column| {
        (Level::Ground, column, second, PieceKind::Warrior)
    });
    let sylphs = SYLPH_COLUMNS
        .into_iter()
        .map(move |column| (Level::Sky, column, second, PieceKind::Sylph));
    let dwarfs = DWARF_COLUMNS
        .into_iter()
        .map(move |column| (Level::Underworld, column, second, PieceKind::Dwarf));
    let others = BACK_RANK_PIECES
        .into_iter()
        .map(move |(level, column, kind)| (level, column, back, kind));
    ground_back
        .chain(warriors)
        .chain(sylphs)
        .chain(dwarfs)
        .chain(others)
}

/// The standard opening position: 42 pieces per side, Gold on rows 1 and 2,
/// Scarlet mirrored on rows 8 and 7.
pub fn starting_position() -> BoardState {
    let mut board = BoardState::empty();
    for side in Side::ALL {
        for (level, column, row, kind) in placements(side) {
            if let Some(position) = Coord::on(level, column, row) {
                board.set_piece_at(position, Some(Piece::new(kind, side)));
            }
        }
    }
    board
}
#[cfg(test)]
mod test {
    use rustc_hash::FxHashMap;

    use crate::{
        board::BoardState,
        coord,
        layout::starting_position,
        piece::PieceKind,
        side::Side,
    };

    #[test]
    fn piece_counts() {
        let board = starting_position();
        for side in Side::ALL {
            let mut counts: FxHashMap<PieceKind, usize> = FxHashMap::default();
            for (_, piece) in board.pieces_of(side) {
                *counts.entry(piece.kind()).or_default() += 1;
            }
            assert_eq!(counts.values().sum::<usize>(), 42);
            assert_eq!(counts[&PieceKind::King], 1);
            assert_eq!(counts[&PieceKind::Warrior], 12);
            assert_eq!(counts[&PieceKind::Sylph], 6);
            assert_eq!(counts[&PieceKind::Dwarf], 6);
            assert_eq!(counts[&PieceKind::Griffin], 2);
            assert_eq!(counts[&PieceKind::Basilisk], 2);
            assert_eq!(counts[&PieceKind::Dragon], 1);
            assert_eq!(counts[&PieceKind::Elemental], 1);
        }
    }
    #[test]
    fn sides_mirror_each_other() {
        let board = starting_position();
        for (position, piece) in board.pieces_of(Side::Gold) {
            let mirrored = position.to_string();
            let row = 9 - position.row();
            let label = format!("{}{row}", &mirrored[..2]);
            let opposite = board.piece_at(label.parse().unwrap()).unwrap();
            assert_eq!(opposite.kind(), piece.kind());
            assert_eq!(opposite.side(), Side::Scarlet);
        }
    }
    #[test]
    fn known_tiles() {
        let board = starting_position();
        let kind_at = |board: &BoardState, label| board.piece_at(label).map(|piece| piece.kind());
        assert_eq!(kind_at(&board, coord!("2g1")), Some(PieceKind::King));
        assert_eq!(kind_at(&board, coord!("2g8")), Some(PieceKind::King));
        assert_eq!(kind_at(&board, coord!("2c2")), Some(PieceKind::Warrior));
        assert_eq!(kind_at(&board, coord!("3a2")), Some(PieceKind::Sylph));
        assert_eq!(kind_at(&board, coord!("3g1")), Some(PieceKind::Dragon));
        assert_eq!(kind_at(&board, coord!("1c1")), Some(PieceKind::Basilisk));
        assert_eq!(kind_at(&board, coord!("1b7")), Some(PieceKind::Dwarf));
        assert_eq!(kind_at(&board, coord!("2f5")), None);
    }
}
