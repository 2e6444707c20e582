use std::ops::{Index, IndexMut};

use crate::coord::{Coord, TILE_COUNT};

/// Dense storage with one slot per tile of all three levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T>(Box<[T]>);

impl<T> Grid<T> {
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Grid(vec![value; TILE_COUNT].into_boxed_slice())
    }
    pub fn positioned_values(&self) -> impl Iterator<Item = (Coord, &T)> {
        Coord::all().map(|position| (position, &self[position]))
    }
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}
impl<T> Default for Grid<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Grid::filled(T::default())
    }
}
impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.0[index.index()]
    }
}
impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}
