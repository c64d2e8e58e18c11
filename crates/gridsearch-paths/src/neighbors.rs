use gridsearch_core::Cell;

/// Reusable neighbor buffer.
///
/// Enumerates the cardinal neighbors of a cell in expansion order (up,
/// down, left, right), filtered by a predicate, without allocating per
/// call.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `c` for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        self.buf.extend(c.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_filters() {
        let mut nb = Neighbors::new();
        let c = Cell::new(1, 1);
        assert_eq!(
            nb.cardinal(c, |_| true),
            [
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ]
        );
        assert_eq!(nb.cardinal(c, |n| n.row == 1), [Cell::new(1, 0), Cell::new(1, 2)]);
        assert!(nb.cardinal(c, |_| false).is_empty());
    }
}
