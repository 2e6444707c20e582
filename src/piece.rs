use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    num::NonZero,
    sync::atomic::{AtomicU32, Ordering},
};

use crate::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Sylph,
    Griffin,
    Dragon,
    Oliphant,
    Unicorn,
    Hero,
    Thief,
    Cleric,
    Mage,
    King,
    Paladin,
    Warrior,
    Basilisk,
    Elemental,
    Dwarf,
}
impl PieceKind {
    pub const ALL: [Self; 15] = [
        PieceKind::Sylph,
        PieceKind::Griffin,
        PieceKind::Dragon,
        PieceKind::Oliphant,
        PieceKind::Unicorn,
        PieceKind::Hero,
        PieceKind::Thief,
        PieceKind::Cleric,
        PieceKind::Mage,
        PieceKind::King,
        PieceKind::Paladin,
        PieceKind::Warrior,
        PieceKind::Basilisk,
        PieceKind::Elemental,
        PieceKind::Dwarf,
    ];

    /// The kind this one turns into on reaching the far rank.
    pub fn promotion(self) -> Option<Self> {
        match self {
            PieceKind::Warrior => Some(PieceKind::Paladin),
            _ => None,
        }
    }
    pub fn is_promotable(self) -> bool {
        self.promotion().is_some()
    }
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Sylph => 'S',
            PieceKind::Griffin => 'G',
            PieceKind::Dragon => 'R',
            PieceKind::Oliphant => 'O',
            PieceKind::Unicorn => 'U',
            PieceKind::Hero => 'H',
            PieceKind::Thief => 'T',
            PieceKind::Cleric => 'C',
            PieceKind::Mage => 'M',
            PieceKind::King => 'K',
            PieceKind::Paladin => 'P',
            PieceKind::Warrior => 'W',
            PieceKind::Basilisk => 'B',
            PieceKind::Elemental => 'E',
            PieceKind::Dwarf => 'D',
        }
    }
    pub fn lowercase(self) -> char {
        self.uppercase().to_ascii_lowercase()
    }
    pub fn from_letter(c: char) -> Result<Self, InvalidPieceLetter> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.uppercase() == c.to_ascii_uppercase())
            .ok_or(InvalidPieceLetter(c))
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Sylph => "sylph",
            PieceKind::Griffin => "griffin",
            PieceKind::Dragon => "dragon",
            PieceKind::Oliphant => "oliphant",
            PieceKind::Unicorn => "unicorn",
            PieceKind::Hero => "hero",
            PieceKind::Thief => "thief",
            PieceKind::Cleric => "cleric",
            PieceKind::Mage => "mage",
            PieceKind::King => "king",
            PieceKind::Paladin => "paladin",
            PieceKind::Warrior => "warrior",
            PieceKind::Basilisk => "basilisk",
            PieceKind::Elemental => "elemental",
            PieceKind::Dwarf => "dwarf",
        };
        write!(f, "{name}")?;
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidPieceLetter(pub char);
impl Display for InvalidPieceLetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found `{}`, expected one of `s`, `g`, `r`, `o`, `u`, `h`, `t`, `c`, `m`, `k`, `p`, `w`, `b`, `e`, `d`, or uppercase forms of these letters",
            self.0
        )?;
        Ok(())
    }
}
impl Error for InvalidPieceLetter {}

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a piece, unique within the process and kept across promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(NonZero<u32>);
impl PieceId {
    pub fn fresh() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        PieceId(NonZero::new(id).unwrap_or(NonZero::<u32>::MIN))
    }
    pub fn get(self) -> u32 {
        self.0.get()
    }
}
impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    side: Side,
}
impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            id: PieceId::fresh(),
            kind,
            side,
        }
    }
    pub fn id(self) -> PieceId {
        self.id
    }
    pub fn kind(self) -> PieceKind {
        self.kind
    }
    pub fn side(self) -> Side {
        self.side
    }
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }
    /// Same piece, different kind.
    pub fn with_kind(self, kind: PieceKind) -> Self {
        Piece { kind, ..self }
    }
    pub fn promoted(self) -> Option<Self> {
        self.kind.promotion().map(|kind| self.with_kind(kind))
    }
    pub fn letter(self) -> char {
        match self.side {
            Side::Gold => self.kind.uppercase(),
            Side::Scarlet => self.kind.lowercase(),
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.side, self.kind, self.id)?;
        Ok(())
    }
}
