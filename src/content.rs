//! Turns ruling segments into a PDF content stream.

use crate::layout::{Point, Segment};
use crate::units::*;
use pdf_writer::Content;

/// Stroke every segment into a content stream.
///
/// Segments are measured from the top-left corner of the page in millimetres,
/// while PDF space starts in the bottom-left corner and is measured in points,
/// so every point is flipped against `page_height`. The line width is only
/// re-emitted when it changes between consecutive segments.
pub(crate) fn render_segments(segments: &[Segment], page_height: Pt) -> Vec<u8> {
    if segments.is_empty() {
        return Vec::default();
    }

    let mut content = Content::new();
    content.save_state();

    let mut current_width: Option<Mm> = None;
    for segment in segments {
        if current_width != Some(segment.width) {
            current_width = Some(segment.width);
            content.set_line_width(*Pt::from(segment.width));
        }

        let (x1, y1) = to_pdf_space(segment.start, page_height);
        let (x2, y2) = to_pdf_space(segment.end, page_height);
        content.move_to(x1, y1);
        content.line_to(x2, y2);
        content.stroke();
    }

    content.restore_state();
    content.finish()
}

fn to_pdf_space(point: Point, page_height: Pt) -> (f32, f32) {
    let x: Pt = point.x.into();
    let y: Pt = point.y.into();
    (*x, *(page_height - y))
}
