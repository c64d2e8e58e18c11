//! Parent map and path reconstruction.

use gridsearch_core::{Cell, Range};

/// How a cell was discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Link {
    /// Not discovered yet.
    #[default]
    Unseen,
    /// The search started here.
    Root,
    /// Discovered from the given neighbor.
    From(Cell),
}

/// Flat map from each discovered cell to the cell it was discovered from.
///
/// Built incrementally during a traversal and read back by
/// [`backtrace`](ParentMap::backtrace).
#[derive(Debug, Clone)]
pub struct ParentMap {
    bounds: Range,
    links: Vec<Link>,
    seen: usize,
}

impl ParentMap {
    /// Create an empty map covering `bounds`.
    pub fn new(bounds: Range) -> Self {
        Self {
            bounds,
            links: vec![Link::Unseen; bounds.len()],
            seen: 0,
        }
    }

    /// Link recorded for `c`. Cells outside the bounds are always unseen.
    #[inline]
    pub fn get(&self, c: Cell) -> Link {
        self.bounds
            .index(c)
            .map_or(Link::Unseen, |i| self.links[i])
    }

    /// Whether `c` has been discovered.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.get(c) != Link::Unseen
    }

    /// Number of discovered cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.seen
    }

    /// Whether no cell has been discovered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen == 0
    }

    /// Mark `c` as the root of the search.
    pub fn set_root(&mut self, c: Cell) {
        self.put(c, Link::Root);
    }

    /// Record `parent` as the parent of `c`, overwriting any earlier link.
    pub fn set(&mut self, c: Cell, parent: Cell) {
        self.put(c, Link::From(parent));
    }

    /// Record `parent` for `c` only if `c` is in bounds and still unseen.
    /// Returns whether the link was recorded.
    pub fn discover(&mut self, c: Cell, parent: Cell) -> bool {
        match self.bounds.index(c) {
            Some(i) if self.links[i] == Link::Unseen => {
                self.links[i] = Link::From(parent);
                self.seen += 1;
                true
            }
            _ => false,
        }
    }

    fn put(&mut self, c: Cell, link: Link) {
        if let Some(i) = self.bounds.index(c) {
            if self.links[i] == Link::Unseen {
                self.seen += 1;
            }
            self.links[i] = link;
        }
    }

    /// Walk parent links back from `exit` to the root and return the
    /// cells in root → exit order. Empty if `exit` was never discovered.
    pub fn backtrace(&self, exit: Cell) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = exit;
        // A chain never holds more cells than the map does.
        for _ in 0..self.seen {
            match self.get(cur) {
                Link::Unseen => return Vec::new(),
                Link::Root => {
                    path.push(cur);
                    path.reverse();
                    return path;
                }
                Link::From(parent) => {
                    path.push(cur);
                    cur = parent;
                }
            }
        }
        Vec::new()
    }
}
