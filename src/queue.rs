use std::collections::BTreeSet;
use std::collections::btree_set;
use std::iter::Rev;

use crate::types::Floor;
use crate::types::direction::Heading;

/// Result of looking for the next stop ahead of the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    Found(Floor),
    NoneAhead,
}

/// Pending stops for one heading, kept in the order the car meets them:
/// ascending for [`Heading::Up`], descending for [`Heading::Down`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestQueue {
    heading: Heading,
    floors: BTreeSet<Floor>,
}

impl RequestQueue {
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            floors: BTreeSet::new(),
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Returns false if the floor was already queued.
    pub fn insert(&mut self, floor: Floor) -> bool {
        self.floors.insert(floor)
    }

    pub fn remove(&mut self, floor: Floor) -> bool {
        self.floors.remove(&floor)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    /// First floor in traversal order.
    pub fn head(&self) -> Option<Floor> {
        match self.heading {
            Heading::Up => self.floors.first().copied(),
            Heading::Down => self.floors.last().copied(),
        }
    }

    /// Nearest queued floor strictly beyond `from` in this queue's heading.
    pub fn next_ahead(&self, from: Floor) -> Lookahead {
        let next = match self.heading {
            Heading::Up => self.floors.range(from.saturating_add(1)..).next(),
            Heading::Down => self.floors.range(..from).next_back(),
        };
        match next {
            Some(&floor) => Lookahead::Found(floor),
            None => Lookahead::NoneAhead,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        match self.heading {
            Heading::Up => Iter::Ascending(self.floors.iter()),
            Heading::Down => Iter::Descending(self.floors.iter().rev()),
        }
    }
}

pub enum Iter<'a> {
    Ascending(btree_set::Iter<'a, Floor>),
    Descending(Rev<btree_set::Iter<'a, Floor>>),
}

impl Iterator for Iter<'_> {
    type Item = Floor;

    fn next(&mut self) -> Option<Floor> {
        match self {
            Iter::Ascending(it) => it.next().copied(),
            Iter::Descending(it) => it.next().copied(),
        }
    }
}

impl<'a> IntoIterator for &'a RequestQueue {
    type Item = Floor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
