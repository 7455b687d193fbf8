//! The pen position of the layout.

use printpdf::Pt;

fn max(a: Pt, b: Pt) -> Pt {
    if a >= b {
        a
    } else {
        b
    }
}

/// Where the next cell is drawn, along with the lowest point reached so far.
///
/// Sections receive a cursor and return it. When two columns start from the same position,
/// each one advances its own copy and [`Cursor::join`] brings them back together.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cursor {
    /// The left of the next cell.
    pub x: Pt,

    /// The top of the next cell.
    pub y: Pt,

    /// Where line breaks bring `x` back.
    left: Pt,

    /// The lowest `y` marked so far.
    low_water: Pt,
}

impl Cursor {
    /// Creates a cursor at a position. Line breaks bring it back to `left`.
    pub fn new(left: Pt, top: Pt) -> Cursor {
        Cursor {
            x: left,
            y: top,
            left,
            low_water: top,
        }
    }

    /// Returns the lowest position marked so far.
    pub fn low_water(&self) -> Pt {
        self.low_water
    }

    /// Goes down by `height` and back to the left.
    pub fn br(&mut self, height: Pt) {
        self.y += height;
        self.x = self.left;
    }

    /// Moves horizontally.
    pub fn at_x(&mut self, x: Pt) {
        self.x = x;
    }

    /// Moves vertically.
    pub fn at_y(&mut self, y: Pt) {
        self.y = y;
    }

    /// Advances horizontally, past a cell.
    pub fn advance(&mut self, width: Pt) {
        self.x += width;
    }

    /// Records the current position as reached.
    pub fn mark(&mut self) {
        self.low_water = max(self.low_water, self.y);
    }

    /// Makes sure the low water mark is at least `min`.
    pub fn floor(&mut self, min: Pt) {
        self.low_water = max(self.low_water, min);
    }

    /// Goes to the lowest position reached, on the left.
    pub fn settle(&mut self) {
        self.y = self.low_water;
        self.x = self.left;
    }

    /// Reconciles two columns started from the same position: the result stands below the
    /// lowest of them.
    pub fn join(a: Cursor, b: Cursor) -> Cursor {
        let y = max(a.y, b.y);
        Cursor {
            x: a.left,
            y,
            left: a.left,
            low_water: max(max(a.low_water, b.low_water), y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn br_goes_back_left() {
        let mut cursor = Cursor::new(Pt(40.0), Pt(40.0));
        cursor.at_x(Pt(400.0));
        cursor.br(Pt(20.0));
        assert_eq!(cursor.x, Pt(40.0));
        assert_eq!(cursor.y, Pt(60.0));
    }

    #[test]
    fn marks_only_go_down() {
        let mut cursor = Cursor::new(Pt(40.0), Pt(40.0));
        cursor.br(Pt(100.0));
        cursor.mark();
        cursor.at_y(Pt(50.0));
        cursor.mark();
        assert_eq!(cursor.low_water(), Pt(140.0));

        cursor.floor(Pt(120.0));
        assert_eq!(cursor.low_water(), Pt(140.0));
        cursor.floor(Pt(160.0));
        cursor.settle();
        assert_eq!(cursor.y, Pt(160.0));
    }

    #[test]
    fn join_takes_the_lowest_column() {
        let start = Cursor::new(Pt(40.0), Pt(200.0));

        let mut left = start;
        left.br(Pt(98.0));

        let mut right = start;
        right.at_x(Pt(320.0));
        right.br(Pt(134.0));

        let joined = Cursor::join(left, right);
        assert_eq!(joined.y, Pt(334.0));
        assert_eq!(joined.low_water(), Pt(334.0));
        assert_eq!(joined.x, Pt(40.0));

        assert_eq!(Cursor::join(right, left), joined);
    }
}
