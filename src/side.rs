use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Not,
    str::FromStr,
};

use crate::coord::ROW_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseSideError;
impl Display for ParseSideError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "provided string was not `g`, `s`, `G`, `S`, `gold`, or `scarlet`"
        )?;
        Ok(())
    }
}
impl Error for ParseSideError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Gold,
    Scarlet,
}
impl Side {
    pub const ALL: [Self; 2] = [Side::Gold, Side::Scarlet];

    /// Row delta of a single step towards the opponent.
    pub fn forward(self) -> i8 {
        match self {
            Side::Gold => 1,
            Side::Scarlet => -1,
        }
    }
    pub fn back_rank(self) -> u8 {
        match self {
            Side::Gold => 1,
            Side::Scarlet => ROW_COUNT,
        }
    }
    pub fn second_rank(self) -> u8 {
        match self {
            Side::Gold => 2,
            Side::Scarlet => ROW_COUNT - 1,
        }
    }
    pub fn promotion_rank(self) -> u8 {
        (!self).back_rank()
    }
}
impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Gold => write!(f, "gold")?,
            Side::Scarlet => write!(f, "scarlet")?,
        }
        Ok(())
    }
}
impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let side = match s {
            "g" | "G" | "gold" => Side::Gold,
            "s" | "S" | "scarlet" => Side::Scarlet,
            _ => return Err(ParseSideError),
        };
        Ok(side)
    }
}
impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Side::Gold => Side::Scarlet,
            Side::Scarlet => Side::Gold,
        }
    }
}
