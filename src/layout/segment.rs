use crate::units::Mm;

/// A position on the page, measured from the top-left corner with y growing downwards
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: Mm,
    pub y: Mm,
}

impl Point {
    pub fn new(x: Mm, y: Mm) -> Point {
        Point { x, y }
    }
}

/// A straight line to be stroked from `start` to `end` with the given stroke `width`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub width: Mm,
}

impl Segment {
    pub fn new(start: Point, end: Point, width: Mm) -> Segment {
        Segment { start, end, width }
    }

    /// A horizontal segment at height `y`, running from `x` to `x + length`
    pub fn horizontal(x: Mm, y: Mm, length: Mm, width: Mm) -> Segment {
        Segment::new(Point::new(x, y), Point::new(x + length, y), width)
    }

    /// A vertical segment at `x`, running from `y` down to `y + length`
    pub fn vertical(x: Mm, y: Mm, length: Mm, width: Mm) -> Segment {
        Segment::new(Point::new(x, y), Point::new(x, y + length), width)
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}
