//! Geometry of a ruled page.
//!
//! A ruling is built from a handful of numbers: the height of one line group,
//! the relative proportions of the lines within it, an optional slant for
//! helper lines, and the page margins. These are turned into absolute line
//! segments in three steps:
//!
//! - [`resolve`](crate::layout::resolve) turns proportions into absolute distances
//! - [`render_group`](crate::layout::render_group) emits the segments of one line group
//! - [`tile`](crate::layout::tile) repeats line groups down the printable area
//!
//! Everything here is a pure computation; coordinates are in millimetres with
//! the origin in the top-left corner of the page. Turning segments into PDF
//! content is left to [`Page`](crate::Page).
//!
//! # Example
//!
//! ```
//! use lineatur::layout::{tile, Margins, PageGeometry, Ruling, Slant};
//! use lineatur::{pagesize, Mm};
//!
//! // Deutsche Kurrentschrift
//! let ruling = Ruling {
//!     line_height: Mm(10.0),
//!     line_spacing: Mm(5.0),
//!     proportions: vec![2.0, 1.0, 2.0],
//!     slant: Some(Slant::new(60.0, 10)),
//!     line_width: Mm(0.3),
//! };
//! let geometry = PageGeometry::new(&pagesize::A4, &Margins::default());
//! let groups = tile(&geometry, &ruling).expect("proportions are valid");
//! assert_eq!(groups.len(), 18);
//! ```

mod group;
mod margins;
mod proportions;
mod segment;
mod tiler;

pub use group::*;
pub use margins::*;
pub use proportions::*;
pub use segment::*;
pub use tiler::*;
