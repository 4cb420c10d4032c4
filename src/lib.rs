//! Printable ruled paper ("Lineatur") for calligraphy practice.
//!
//! A ruling is described by a line height, the proportions of the lines inside
//! it and optionally the angle and number of slanted helper lines. The
//! [layout] module turns that description into line segments which are tiled
//! down the page, and [Document] writes them out as a PDF.
//!
//! Common rulings (see <https://de.wikipedia.org/wiki/Lineatur>):
//!
//! | proportions | slant | script |
//! |---|---|---|
//! | 1:1:1 | | Sütterlinschrift |
//! | 2:3:2 | 75°–80° | Offenbacher Schrift |
//! | 3:4:3 | | Lateinische Ausgangsschrift |
//! | 2:1:2 | 60° | Deutsche Kurrentschrift |
//! | 3:2:3 | 52°–60° | Copperplate |

/// Command line options and their validation
pub mod config;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod info;
pub use info::*;

/// Pure geometry of ruled pages
pub mod layout;

mod page;
pub use page::*;

/// The catalogue of supported paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
