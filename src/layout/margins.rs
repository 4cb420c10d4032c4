use crate::units::Mm;

/// Margins frame the printable area of a page. The ruling is tiled inside
/// them; nothing is drawn in the margins themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Default for Margins {
    /// 5mm at the top and left, 15mm at the right and bottom, which leaves
    /// room for the unprintable strip most printers have
    fn default() -> Self {
        Margins::trbl(Mm(5.0), Mm(15.0), Mm(15.0), Mm(5.0))
    }
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Build margins from a `[top, right, bottom, left]` list; an empty list
    /// gives the default margins. Any other length yields [None].
    pub fn from_list(values: &[f32]) -> Option<Margins> {
        match values {
            [] => Some(Margins::default()),
            &[top, right, bottom, left] => {
                Some(Margins::trbl(Mm(top), Mm(right), Mm(bottom), Mm(left)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_is_clockwise_from_top() {
        let m = Margins::from_list(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.top, Mm(1.0));
        assert_eq!(m.right, Mm(2.0));
        assert_eq!(m.bottom, Mm(3.0));
        assert_eq!(m.left, Mm(4.0));
    }

    #[test]
    fn empty_list_uses_defaults() {
        assert_eq!(Margins::from_list(&[]), Some(Margins::default()));
        assert_eq!(Margins::from_list(&[1.0, 2.0]), None);
    }
}
