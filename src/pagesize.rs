//! Paper sizes supported for printing ruled pages.
//!
//! All sizes are provided in portrait orientation (width ≤ height), in millimetres.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert
//! between portrait and landscape. Print the generated PDF without scaling,
//! otherwise the ruling won't keep its proportions.
//!
//! # Available Sizes
//!
//! `A5`, `A4`, `Invoice`, `Legal`, `Letter`
//!
//! # Example
//!
//! ```
//! use lineatur::pagesize::{self, PageOrientation};
//!
//! let a4 = pagesize::lookup("A4").expect("A4 is catalogued");
//! let landscape = a4.landscape();
//! assert_eq!(landscape.width, a4.height);
//! ```

use crate::units::*;
use crate::LineaturError;
use std::str::FromStr;

/// Physical dimensions of a sheet of paper.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaperSize {
    pub name: &'static str,
    pub width: Mm,
    pub height: Mm,
}

pub const A5: PaperSize = PaperSize {
    name: "A5",
    width: Mm(148.0),
    height: Mm(210.0),
};
pub const A4: PaperSize = PaperSize {
    name: "A4",
    width: Mm(210.0),
    height: Mm(297.0),
};
pub const INVOICE: PaperSize = PaperSize {
    name: "Invoice",
    width: Mm(140.0),
    height: Mm(216.0),
};
pub const LEGAL: PaperSize = PaperSize {
    name: "Legal",
    width: Mm(203.0),
    height: Mm(330.0),
};
pub const LETTER: PaperSize = PaperSize {
    name: "Letter",
    width: Mm(216.0),
    height: Mm(279.0),
};

/// Every paper size that can be selected by name
pub const PAPER_SIZES: [PaperSize; 5] = [A5, A4, INVOICE, LEGAL, LETTER];

/// Find a paper size by its (case-sensitive) name
pub fn lookup(name: &str) -> Result<PaperSize, LineaturError> {
    PAPER_SIZES
        .iter()
        .find(|size| size.name == name)
        .copied()
        .ok_or_else(|| LineaturError::UnknownPaperSize(name.to_string()))
}

impl FromStr for PaperSize {
    type Err = LineaturError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}

/// Convert paper sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PaperSize {
    fn portrait(self) -> Self {
        if self.width <= self.height {
            self
        } else {
            PaperSize {
                width: self.height,
                height: self.width,
                ..self
            }
        }
    }

    fn landscape(self) -> Self {
        if self.width >= self.height {
            self
        } else {
            PaperSize {
                width: self.height,
                height: self.width,
                ..self
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn looks_up_catalogued_sizes() {
        assert_eq!(lookup("A4").unwrap(), A4);
        assert_eq!(lookup("Letter").unwrap().height, Mm(279.0));
        assert_eq!("Invoice".parse::<PaperSize>().unwrap().width, Mm(140.0));
    }

    #[test]
    fn rejects_unknown_sizes() {
        assert!(matches!(
            lookup("a4"),
            Err(LineaturError::UnknownPaperSize(name)) if name == "a4"
        ));
        assert!(lookup("A3").is_err());
    }

    #[test]
    fn orientation_round_trips() {
        let landscape = A5.landscape();
        assert_eq!(landscape.width, Mm(210.0));
        assert_eq!(landscape.height, Mm(148.0));
        assert_eq!(landscape.portrait(), A5);
        assert_eq!(A5.portrait(), A5);
    }
}
