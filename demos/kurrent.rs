use lineatur::layout::{tile, Margins, PageGeometry, Ruling, Slant};
use lineatur::pagesize;
use lineatur::pagesize::PageOrientation;
use lineatur::Document;
use lineatur::Mm;
use lineatur::Page;

fn main() {
    // Deutsche Kurrentschrift: 2:1:2 with helper lines at 60°
    let ruling = Ruling {
        line_height: Mm(10.0),
        line_spacing: Mm(5.0),
        proportions: vec![2.0, 1.0, 2.0],
        slant: Some(Slant::new(60.0, 10)),
        line_width: Mm(0.3),
    };

    let mut doc = Document::default();
    for paper in [pagesize::A4, pagesize::A4.landscape()] {
        let margins = Margins::all(Mm(10.0));
        let groups = tile(&PageGeometry::new(&paper, &margins), &ruling).unwrap();

        let mut page = Page::new(paper, Some(margins));
        page.add_line_groups(groups);
        doc.add_page(page);
    }

    let mut out = std::fs::File::create("kurrent.pdf").unwrap();
    doc.write(&mut out).unwrap();
}
