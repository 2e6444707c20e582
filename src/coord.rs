use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    iter::FusedIterator,
    ops::Mul,
    str::FromStr,
};

pub const LEVEL_COUNT: u8 = 3;
pub const COLUMN_COUNT: u8 = 12;
pub const ROW_COUNT: u8 = 8;
pub const TILE_COUNT: usize = LEVEL_COUNT as usize * COLUMN_COUNT as usize * ROW_COUNT as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    InvalidLevel(char),
    InvalidColumn(char),
    InvalidRow(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::InvalidLevel(level) => write!(
                f,
                "found `{level}`, characters from `1` to `3` were expected instead"
            )?,
            ParseCoordError::InvalidColumn(column) => write!(
                f,
                "found `{column}`, characters from `a` to `l` were expected instead"
            )?,
            ParseCoordError::InvalidRow(row) => write!(
                f,
                "found `{row}`, characters from `1` to `8` were expected instead"
            )?,
            ParseCoordError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 3 were expected"
            )?,
            ParseCoordError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseCoordError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBounds {
    pub level: i16,
    pub column: i16,
    pub row: i16,
}
impl Display for OutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position ({}, {}, {}) is out of bounds",
            self.level, self.column, self.row
        )?;
        Ok(())
    }
}
impl Error for OutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Underworld = 1,
    Ground = 2,
    Sky = 3,
}
impl Level {
    pub const ALL: [Self; 3] = [Level::Underworld, Level::Ground, Level::Sky];

    pub fn number(self) -> u8 {
        self as u8
    }
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Level::Underworld),
            2 => Some(Level::Ground),
            3 => Some(Level::Sky),
            _ => None,
        }
    }
    pub fn offset(self, delta: i8) -> Option<Self> {
        Level::from_number(self.number().checked_add_signed(delta)?)
    }
    pub fn below(self) -> Option<Self> {
        self.offset(-1)
    }
    pub fn above(self) -> Option<Self> {
        self.offset(1)
    }
    fn index(self) -> usize {
        (self.number() - 1) as usize
    }
}
impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Level::Underworld => write!(f, "underworld")?,
            Level::Ground => write!(f, "ground")?,
            Level::Sky => write!(f, "sky")?,
        }
        Ok(())
    }
}

/// A tile on one of the three boards. Columns and rows are 1-based, so the
/// label of `(2, 3, 4)` is `2c4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    level: Level,
    column: u8,
    row: u8,
}

impl Coord {
    pub fn is_valid(level: i16, column: i16, row: i16) -> bool {
        (1..=i16::from(LEVEL_COUNT)).contains(&level)
            && (1..=i16::from(COLUMN_COUNT)).contains(&column)
            && (1..=i16::from(ROW_COUNT)).contains(&row)
    }
    pub fn new(level: i16, column: i16, row: i16) -> Result<Self, OutOfBounds> {
        if !Coord::is_valid(level, column, row) {
            return Err(OutOfBounds { level, column, row });
        }
        // the range check above keeps all three values inside u8
        let level = Level::from_number(level as u8).ok_or(OutOfBounds { level, column, row })?;
        Ok(Coord {
            level,
            column: column as u8,
            row: row as u8,
        })
    }
    pub fn on(level: Level, column: u8, row: u8) -> Option<Self> {
        ((1..=COLUMN_COUNT).contains(&column) && (1..=ROW_COUNT).contains(&row))
            .then_some(Coord { level, column, row })
    }
    pub fn from_chars(level: char, column: char, row: char) -> Result<Self, ParseCoordError> {
        let level = match level {
            '1'..='3' => Level::from_number(level as u8 - b'0')
                .ok_or(ParseCoordError::InvalidLevel(level))?,
            _ => return Err(ParseCoordError::InvalidLevel(level)),
        };
        let column = match column {
            'a'..='l' => column as u8 - b'a' + 1,
            _ => return Err(ParseCoordError::InvalidColumn(column)),
        };
        let row = match row {
            '1'..='8' => row as u8 - b'0',
            _ => return Err(ParseCoordError::InvalidRow(row)),
        };
        Ok(Coord { level, column, row })
    }
    pub fn level(self) -> Level {
        self.level
    }
    pub fn column(self) -> u8 {
        self.column
    }
    pub fn row(self) -> u8 {
        self.row
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Coord::on(
            self.level.offset(movement.level)?,
            self.column.checked_add_signed(movement.column)?,
            self.row.checked_add_signed(movement.row)?,
        )
    }
    pub fn with_level(self, level: Level) -> Self {
        Coord { level, ..self }
    }
    /// Every tile reached by repeatedly stepping in `direction`, excluding
    /// `self`, until the edge of the board.
    pub fn line_exclusive(self, direction: Vector) -> impl FusedIterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..)
            .map_while(move |distance| self.move_by(direction * distance))
            .fuse()
    }
    pub fn all() -> impl Iterator<Item = Self> {
        Level::ALL.into_iter().flat_map(|level| {
            (1..=COLUMN_COUNT).flat_map(move |column| {
                (1..=ROW_COUNT).map(move |row| Coord { level, column, row })
            })
        })
    }
    pub(crate) fn index(self) -> usize {
        (self.level.index() * COLUMN_COUNT as usize + (self.column - 1) as usize)
            * ROW_COUNT as usize
            + (self.row - 1) as usize
    }
    pub fn column_char(self) -> char {
        (self.column - 1 + b'a') as char
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.level.number(),
            self.column_char(),
            self.row
        )?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(level) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(0));
        };
        let Some(column) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(1));
        };
        let Some(row) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(2));
        };
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        Coord::from_chars(level, column, row)
    }
}

/// Builds a [`Coord`] from its label, panicking on malformed input. Meant for
/// tests and fixed tables.
#[macro_export]
macro_rules! coord {
    ($label:literal) => {
        <$crate::coord::Coord as ::std::str::FromStr>::from_str($label).unwrap()
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub level: i8,
    pub column: i8,
    pub row: i8,
}
impl Vector {
    pub const ZERO: Self = Vector::flat(0, 0);

    pub const ORTHOGONAL: [Self; 4] = [
        Vector::flat(-1, 0),
        Vector::flat(1, 0),
        Vector::flat(0, -1),
        Vector::flat(0, 1),
    ];
    pub const DIAGONAL: [Self; 4] = [
        Vector::flat(-1, -1),
        Vector::flat(1, -1),
        Vector::flat(-1, 1),
        Vector::flat(1, 1),
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector::flat(-1, -1),
        Vector::flat(0, -1),
        Vector::flat(1, -1),
        Vector::flat(-1, 0),
        Vector::flat(1, 0),
        Vector::flat(-1, 1),
        Vector::flat(0, 1),
        Vector::flat(1, 1),
    ];
    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector::flat(-1, -2),
        Vector::flat(1, -2),
        Vector::flat(-1, 2),
        Vector::flat(1, 2),
        Vector::flat(-2, -1),
        Vector::flat(2, -1),
        Vector::flat(-2, 1),
        Vector::flat(2, 1),
    ];
    pub const UP: Self = Vector::new(1, 0, 0);
    pub const DOWN: Self = Vector::new(-1, 0, 0);

    pub const fn new(level: i8, column: i8, row: i8) -> Self {
        Vector { level, column, row }
    }
    pub const fn flat(column: i8, row: i8) -> Self {
        Vector::new(0, column, row)
    }
    pub const fn with_level(self, level: i8) -> Self {
        Vector { level, ..self }
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            level: self.level * rhs,
            column: self.column * rhs,
            row: self.row * rhs,
        }
    }
}
