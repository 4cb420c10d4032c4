use super::group::{render_group, LineGroup, Slant};
use super::margins::Margins;
use super::proportions::resolve;
use super::segment::Point;
use crate::pagesize::PaperSize;
use crate::units::Mm;
use crate::LineaturError;
use tracing::debug;

/// The printable area of a page: the paper minus its margins.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    /// Top-left corner of the printable area
    pub origin: Point,
    pub width: Mm,
    /// The lowest y-coordinate a line group may reach (exclusive)
    pub bottom: Mm,
}

impl PageGeometry {
    pub fn new(paper: &PaperSize, margins: &Margins) -> PageGeometry {
        PageGeometry {
            origin: Point::new(margins.left, margins.top),
            width: paper.width - margins.right - margins.left,
            bottom: paper.height - margins.bottom,
        }
    }
}

/// Everything that describes what a single line group looks like
#[derive(Debug, Clone, PartialEq)]
pub struct Ruling {
    pub line_height: Mm,
    /// Vertical gap between two consecutive line groups
    pub line_spacing: Mm,
    pub proportions: Vec<f32>,
    pub slant: Option<Slant>,
    /// Stroke width of every drawn line
    pub line_width: Mm,
}

impl Ruling {
    /// Vertical distance from the top of one line group to the top of the next
    pub fn period(&self) -> Mm {
        self.line_height + self.line_spacing
    }
}

/// Fill the printable area of a page with line groups, top to bottom.
///
/// Groups are only placed where they fit completely: a group whose bottom edge
/// would touch or cross the bottom margin is not drawn, and whatever space is
/// left below the last group stays blank.
///
/// Fails with [LineaturError::InvalidInput] if consecutive groups wouldn't be
/// moved down the page, i.e. the line height plus spacing isn't positive.
pub fn tile(geometry: &PageGeometry, ruling: &Ruling) -> Result<Vec<LineGroup>, LineaturError> {
    if !(ruling.period() > Mm(0.0)) {
        return Err(LineaturError::InvalidInput(format!(
            "line height plus line spacing must be positive, got {}",
            ruling.period()
        )));
    }
    let distances = resolve(&ruling.proportions, ruling.line_height)?;
    let x = geometry.origin.x;
    let mut y = geometry.origin.y;

    let mut groups = Vec::new();
    while y + ruling.line_height < geometry.bottom {
        let origin = Point::new(x, y);
        let segments = render_group(
            origin,
            ruling.line_height,
            geometry.width,
            &distances,
            ruling.line_width,
            ruling.slant,
        );
        groups.push(LineGroup { origin, segments });
        y += ruling.period();
    }

    debug!(
        groups = groups.len(),
        line_height = *ruling.line_height,
        line_spacing = *ruling.line_spacing,
        "tiled page"
    );
    Ok(groups)
}
