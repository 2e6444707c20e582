use std::fmt::{self, Display, Formatter};

use crate::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndState {
    Win(Side),
    Tie,
}
impl EndState {
    /// Result of a ply after which the given sides may or may not act.
    /// `None` while both sides still have an option.
    pub fn from_mobility(gold: bool, scarlet: bool) -> Option<Self> {
        match (gold, scarlet) {
            (true, true) => None,
            (true, false) => Some(EndState::Win(Side::Gold)),
            (false, true) => Some(EndState::Win(Side::Scarlet)),
            (false, false) => Some(EndState::Tie),
        }
    }
}
impl Display for EndState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EndState::Win(side) => write!(f, "{side} wins")?,
            EndState::Tie => write!(f, "tie")?,
        }
        Ok(())
    }
}
