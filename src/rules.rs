//! Movement tables for every piece kind on every level.
//!
//! Rows are oriented per side: `forward` is towards the opponent's back rank.
//! A kind that has no table for its current level contributes nothing.

use crate::{
    coord::{Coord, Level, Vector},
    layout::SYLPH_COLUMNS,
    piece::PieceKind,
    primitive::Reach,
};

const GRIFFIN_LEAPS: [Vector; 8] = [
    Vector::flat(-2, -3),
    Vector::flat(2, -3),
    Vector::flat(-2, 3),
    Vector::flat(2, 3),
    Vector::flat(-3, -2),
    Vector::flat(3, -2),
    Vector::flat(-3, 2),
    Vector::flat(3, 2),
];

fn raised(offsets: [Vector; 4], level: i8) -> impl Iterator<Item = Vector> {
    offsets.into_iter().map(move |offset| offset.with_level(level))
}
fn scaled(offsets: [Vector; 4], factor: i8) -> impl Iterator<Item = Vector> {
    offsets.into_iter().map(move |offset| offset * factor)
}
/// Vertical step from `level` back towards the ground.
fn towards_ground(level: Level) -> Vector {
    match level {
        Level::Underworld => Vector::UP,
        Level::Ground => Vector::ZERO,
        Level::Sky => Vector::DOWN,
    }
}

pub fn add_options(reach: &mut Reach<'_>) {
    let level = reach.origin().level();
    match reach.piece().kind() {
        PieceKind::Sylph => sylph(reach, level),
        PieceKind::Griffin => griffin(reach, level),
        PieceKind::Dragon => dragon(reach, level),
        PieceKind::Oliphant => match level {
            Level::Ground => reach.orthogonal_rays(),
            Level::Sky | Level::Underworld => {}
        },
        PieceKind::Unicorn => match level {
            Level::Ground => reach.steps(Vector::KNIGHT_MOVES),
            Level::Sky | Level::Underworld => {}
        },
        PieceKind::Hero => hero(reach, level),
        PieceKind::Thief => match level {
            Level::Ground => reach.diagonal_rays(),
            Level::Sky | Level::Underworld => {}
        },
        PieceKind::Cleric => {
            reach.steps(Vector::KING_MOVES);
            reach.steps([Vector::UP, Vector::DOWN]);
        }
        PieceKind::Mage => mage(reach, level),
        PieceKind::King => match level {
            Level::Ground => {
                reach.steps(Vector::KING_MOVES);
                reach.steps([Vector::UP, Vector::DOWN]);
            }
            Level::Sky | Level::Underworld => reach.step(towards_ground(level)),
        },
        PieceKind::Paladin => paladin(reach, level),
        PieceKind::Warrior => warrior(reach, level),
        PieceKind::Basilisk => basilisk(reach, level),
        PieceKind::Elemental => elemental(reach, level),
        PieceKind::Dwarf => dwarf(reach, level),
    }
}

fn sylph(reach: &mut Reach<'_>, level: Level) {
    let forward = reach.forward();
    match level {
        Level::Sky => {
            reach.single_move(Vector::flat(-1, forward));
            reach.single_move(Vector::flat(1, forward));
            reach.single_capture(Vector::flat(0, forward));
            reach.single_capture(Vector::DOWN);
        }
        Level::Ground => {
            reach.single_move(Vector::UP);
            let row = reach.piece().side().second_rank();
            for column in SYLPH_COLUMNS {
                if let Some(home) = Coord::on(Level::Sky, column, row) {
                    reach.single_move_absolute(home);
                }
            }
        }
        Level::Underworld => {}
    }
}
fn griffin(reach: &mut Reach<'_>, level: Level) {
    match level {
        Level::Sky => {
            reach.steps(GRIFFIN_LEAPS);
            reach.steps(raised(Vector::DIAGONAL, -1));
        }
        Level::Ground => {
            reach.steps(Vector::DIAGONAL);
            reach.steps(raised(Vector::DIAGONAL, 1));
        }
        Level::Underworld => {}
    }
}
fn dragon(reach: &mut Reach<'_>, level: Level) {
    match level {
        Level::Sky => {
            reach.diagonal_rays();
            reach.steps(Vector::ORTHOGONAL);
            reach.capture_afar(Vector::DOWN);
            for offset in raised(Vector::ORTHOGONAL, -1) {
                reach.capture_afar(offset);
            }
        }
        Level::Ground | Level::Underworld => {}
    }
}
fn hero(reach: &mut Reach<'_>, level: Level) {
    match level {
        Level::Ground => {
            reach.steps(Vector::DIAGONAL);
            reach.steps(scaled(Vector::DIAGONAL, 2));
            reach.steps(raised(Vector::DIAGONAL, 1));
            reach.steps(raised(Vector::DIAGONAL, -1));
        }
        Level::Sky | Level::Underworld => {
            reach.steps(raised(Vector::DIAGONAL, towards_ground(level).level));
        }
    }
}
fn mage(reach: &mut Reach<'_>, level: Level) {
    match level {
        Level::Ground => {
            reach.orthogonal_rays();
            reach.diagonal_rays();
            reach.steps([Vector::UP, Vector::DOWN]);
        }
        Level::Sky | Level::Underworld => {
            reach.steps(Vector::ORTHOGONAL);
            reach.ray_up_to(towards_ground(level), 2);
        }
    }
}
fn paladin(reach: &mut Reach<'_>, level: Level) {
    reach.steps(Vector::KING_MOVES);
    match level {
        Level::Ground => reach.steps(Vector::KNIGHT_MOVES),
        Level::Sky | Level::Underworld => {}
    }
    for climb in [-1, 1] {
        reach.steps(scaled(Vector::ORTHOGONAL, 2).map(move |offset| offset.with_level(climb)));
    }
    for climb in [-2, 2] {
        reach.steps(raised(Vector::ORTHOGONAL, climb));
    }
}
fn warrior(reach: &mut Reach<'_>, level: Level) {
    let forward = reach.forward();
    match level {
        Level::Ground => {
            reach.single_move(Vector::flat(0, forward));
            reach.single_capture(Vector::flat(-1, forward));
            reach.single_capture(Vector::flat(1, forward));
        }
        Level::Sky | Level::Underworld => {}
    }
}
fn basilisk(reach: &mut Reach<'_>, level: Level) {
    let forward = reach.forward();
    match level {
        Level::Underworld => {
            reach.steps([
                Vector::flat(-1, forward),
                Vector::flat(0, forward),
                Vector::flat(1, forward),
            ]);
            reach.single_move(Vector::flat(0, -forward));
        }
        Level::Ground | Level::Sky => {}
    }
}
fn elemental(reach: &mut Reach<'_>, level: Level) {
    match level {
        Level::Underworld => {
            for direction in Vector::ORTHOGONAL {
                reach.ray_up_to(direction, 2);
            }
            for offset in Vector::DIAGONAL {
                reach.single_move(offset);
            }
            for offset in raised(Vector::ORTHOGONAL, 1) {
                reach.single_capture(offset);
            }
        }
        Level::Ground => reach.steps(raised(Vector::ORTHOGONAL, -1)),
        Level::Sky => {}
    }
}
fn dwarf(reach: &mut Reach<'_>, level: Level) {
    match level {
        Level::Underworld => {
            dwarf_advance(reach);
            reach.single_capture(Vector::UP);
        }
        Level::Ground => {
            dwarf_advance(reach);
            reach.single_move(Vector::DOWN);
        }
        Level::Sky => {}
    }
}
fn dwarf_advance(reach: &mut Reach<'_>) {
    let forward = reach.forward();
    reach.single_move(Vector::flat(0, forward));
    reach.single_move(Vector::flat(-1, 0));
    reach.single_move(Vector::flat(1, 0));
    reach.single_capture(Vector::flat(-1, forward));
    reach.single_capture(Vector::flat(1, forward));
}
