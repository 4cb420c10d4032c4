use super::segment::{Point, Segment};
use crate::units::Mm;
use std::f32::consts::PI;

/// Slanted helper lines drawn across each line group.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Slant {
    /// Angle in degrees, measured from the baseline upwards. Angles up to and
    /// including 90° lean forward; larger angles lean backward.
    pub angle: f32,
    /// How many slanted lines to spread across the width of one line group
    pub count: u32,
}

impl Slant {
    /// Upper bound on slanted lines per line group; past this the lines are
    /// closer together than they are thick
    pub const MAX_COUNT: u32 = 1000;

    pub fn new(angle: f32, count: u32) -> Slant {
        Slant { angle, count }
    }

    /// Build a slant from an `[angle, count]` list. An empty list means no slant;
    /// any other length yields [None]. Counts beyond `u32::MAX` saturate.
    pub fn from_list(values: &[u64]) -> Option<Option<Slant>> {
        match values {
            [] => Some(None),
            &[angle, count] => {
                let count = u32::try_from(count).unwrap_or(u32::MAX);
                Some(Some(Slant::new(angle as f32, count)))
            }
            _ => None,
        }
    }

    /// The horizontal distance a slanted line covers while rising `height`
    pub fn run(&self, height: Mm) -> Mm {
        let theta = PI * (90.0 - self.angle) / 180.0;
        Mm((*height * theta.tan()).abs())
    }

    fn leans_forward(&self) -> bool {
        self.angle <= 90.0
    }
}

/// One repeat unit of the ruling, as placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    /// Top-left corner of the group
    pub origin: Point,
    pub segments: Vec<Segment>,
}

/// Emit the segments of a single line group whose top-left corner is at `origin`.
///
/// With no `distances` only the baseline at the bottom of the group is drawn.
/// Otherwise the top line and one line per cumulative distance are drawn,
/// followed by the left and right borders. Slanted lines, if any, come last.
pub fn render_group(
    origin: Point,
    line_height: Mm,
    width: Mm,
    distances: &[Mm],
    line_width: Mm,
    slant: Option<Slant>,
) -> Vec<Segment> {
    let Point { x, y } = origin;
    let mut segments = Vec::with_capacity(distances.len() + 3);

    if distances.is_empty() {
        segments.push(Segment::horizontal(x, y + line_height, width, line_width));
    } else {
        let mut cursor = y;
        segments.push(Segment::horizontal(x, cursor, width, line_width));
        for d in distances {
            cursor += *d;
            segments.push(Segment::horizontal(x, cursor, width, line_width));
        }

        segments.push(Segment::vertical(x, y, line_height, line_width));
        segments.push(Segment::vertical(x + width, y, line_height, line_width));
    }

    if let Some(slant) = slant {
        segments.extend(slanted_lines(origin, line_height, width, line_width, slant));
    }

    segments
}

fn slanted_lines(
    origin: Point,
    line_height: Mm,
    width: Mm,
    line_width: Mm,
    slant: Slant,
) -> impl Iterator<Item = Segment> {
    let Point { x, y } = origin;
    let run = slant.run(line_height);
    // a lone slanted line starts at the left edge
    let step = if slant.count > 1 {
        (width - run) / (slant.count - 1) as f32
    } else {
        Mm(0.0)
    };
    let bottom = y + line_height;

    (0..slant.count).map(move |i| {
        let xi = x + step * i as f32;
        if slant.leans_forward() {
            Segment::new(Point::new(xi, bottom), Point::new(xi + run, y), line_width)
        } else {
            Segment::new(Point::new(xi + run, bottom), Point::new(xi, y), line_width)
        }
    })
}
