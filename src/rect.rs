use crate::units::*;

/// A rectangle in PDF space, specified by its lower-left and upper-right corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the lower-left corner.
    pub x1: Pt,
    /// The y-coordinate of the lower-left corner.
    pub y1: Pt,
    /// The x-coordinate of the upper-right corner.
    pub x2: Pt,
    /// The y-coordinate of the upper-right corner.
    pub y2: Pt,
}

impl Rect {
    /// A rectangle with its lower-left corner at the origin
    pub fn sized<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: width.into(),
            y2: height.into(),
        }
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
