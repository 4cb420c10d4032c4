use derive_more::{Add, AddAssign, Deref, DerefMut, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// A length in millimetres. All ruling geometry is expressed in millimetres,
/// measured from the top-left corner of the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// A length in PDF points (1/72 of an inch), the native unit of the PDF coordinate space
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

const POINTS_PER_MM: f32 = 72.0 / 25.4;

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt(mm.0 * POINTS_PER_MM)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 / POINTS_PER_MM)
    }
}
