use crate::content::render_segments;
use crate::layout::{LineGroup, Margins, Segment};
use crate::pagesize::PaperSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::LineaturError;
use pdf_writer::{Finish, Pdf};

/// A single page of the document and the segments that will be stroked on it
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where the ruling lives, i.e. within the margins
    pub content_box: Rect,
    /// Every segment to stroke, in drawing order
    pub contents: Vec<Segment>,
}

impl Page {
    /// Create an empty page of the given paper size. If margins are given,
    /// they determine the `ArtBox` of the page in the generated PDF.
    pub fn new(paper: PaperSize, margins: Option<Margins>) -> Page {
        let media_box = Rect::sized(paper.width, paper.height);
        let content_box = match margins {
            Some(margins) => Rect {
                x1: margins.left.into(),
                y1: margins.bottom.into(),
                x2: (paper.width - margins.right).into(),
                y2: (paper.height - margins.top).into(),
            },
            None => media_box,
        };

        Page {
            media_box,
            content_box,
            contents: Vec::default(),
        }
    }

    pub fn add_segments<I: IntoIterator<Item = Segment>>(&mut self, segments: I) {
        self.contents.extend(segments);
    }

    /// Add all segments of the line groups to the page, group by group
    pub fn add_line_groups<I: IntoIterator<Item = LineGroup>>(&mut self, groups: I) {
        for group in groups {
            self.add_segments(group.segments);
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), LineaturError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or_else(|| missing_ref(RefType::Page(page_index)))?;
        let parent = refs
            .get(RefType::PageTree)
            .ok_or_else(|| missing_ref(RefType::PageTree))?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);
        page.contents(content_id);
        page.finish();

        let rendered = render_segments(&self.contents, self.media_box.height());
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}

fn missing_ref(ref_type: RefType) -> LineaturError {
    LineaturError::MissingObject(format!("{ref_type:?}"))
}
