use std::fmt::{self, Display, Formatter};

use rustc_hash::FxHashMap;

use crate::{coord::Coord, piece::PieceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MovementKind {
    Move,
    Capture,
    /// Removes the piece on the destination while the acting piece stays put.
    CaptureAfar,
    /// Moves, then turns into the promoted kind.
    Promote,
}
impl Display for MovementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Move => write!(f, "move")?,
            MovementKind::Capture => write!(f, "capture")?,
            MovementKind::CaptureAfar => write!(f, "capture afar")?,
            MovementKind::Promote => write!(f, "promote")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovementOption {
    pub destination: Coord,
    pub kind: MovementKind,
}
impl Display for MovementOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.destination)?;
        Ok(())
    }
}

/// Every option of one piece for the current ply, keyed by destination so
/// that no destination is ever offered twice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet(FxHashMap<Coord, MovementKind>);

impl OptionSet {
    pub fn new() -> Self {
        OptionSet::default()
    }
    /// Adds an option unless its destination is already taken, in which case
    /// the earlier option is kept.
    pub fn insert(&mut self, option: MovementOption) {
        let kind = *self.0.entry(option.destination).or_insert(option.kind);
        debug_assert_eq!(
            kind, option.kind,
            "conflicting options for {}",
            option.destination
        );
    }
    pub fn get(&self, destination: Coord) -> Option<MovementOption> {
        self.0
            .get(&destination)
            .map(|kind| MovementOption {
                destination,
                kind: *kind,
            })
    }
    pub fn contains(&self, option: MovementOption) -> bool {
        self.get(option.destination) == Some(option)
    }
    pub fn iter(&self) -> impl Iterator<Item = MovementOption> {
        self.0.iter().map(|(destination, kind)| MovementOption {
            destination: *destination,
            kind: *kind,
        })
    }
    /// Options ordered by destination, for stable display.
    pub fn sorted(&self) -> Vec<MovementOption> {
        let mut options: Vec<_> = self.iter().collect();
        options.sort_unstable();
        options
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}
impl FromIterator<MovementOption> for OptionSet {
    fn from_iter<T: IntoIterator<Item = MovementOption>>(iter: T) -> Self {
        let mut set = OptionSet::new();
        for option in iter {
            set.insert(option);
        }
        set
    }
}

/// Option sets of every piece of one side.
pub type OptionMap = FxHashMap<PieceId, OptionSet>;
