use crate::{
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    LineaturError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;
use tracing::debug;

#[derive(Default)]
/// A document is the main object that stores all the pages of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Write the entire document to the writer. The document is rendered in memory
    /// first and handed to the writer in one go, so nothing is written if rendering
    /// fails.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), LineaturError> {
        let Document {
            info,
            pages,
            page_order,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not by arena index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages
                .get(*id)
                .ok_or_else(|| LineaturError::MissingObject(format!("page {page_index}")))?;
            page.write(&mut refs, page_index, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        let bytes = writer.finish();
        debug!(pages = page_order.len(), bytes = bytes.len(), "rendered document");
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::{Margins, Ruling, Segment};
    use crate::pagesize::A5;
    use crate::Mm;

    #[test]
    fn writes_a_pdf() {
        let mut doc = Document::default();
        let mut page = Page::new(A5, Some(Margins::default()));
        page.add_segments([Segment::horizontal(Mm(5.0), Mm(15.0), Mm(128.0), Mm(0.3))]);
        doc.add_page(page);
        assert_eq!(doc.page_count(), 1);

        let mut out = Vec::new();
        doc.write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/Type /Page"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn writes_info_block() {
        let mut doc = Document::default();
        let ruling = Ruling {
            line_height: Mm(10.0),
            line_spacing: Mm(5.0),
            proportions: vec![1.0, 1.0, 1.0],
            slant: None,
            line_width: Mm(0.3),
        };
        doc.set_info(Info::for_ruling(&ruling, &A5));
        doc.add_page(Page::new(A5, None));

        let mut out = Vec::new();
        doc.write(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("(Lineatur 1:1:1 A5)"));
        assert!(text.contains("/Creator"));
    }
}
