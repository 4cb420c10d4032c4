use crate::config::Config;
use crate::layout::tile;
use crate::{Document, Info, LineaturError, Page};
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

/// Lay out the ruling described by `config` on as many pages as requested.
///
/// The page geometry is computed once and every page receives an identical copy
/// of the tiled line groups.
pub fn build_document(config: &Config) -> Result<Document, LineaturError> {
    let groups = tile(&config.geometry(), &config.ruling)?;

    let mut doc = Document::default();
    let info = Info::for_ruling(&config.ruling, &config.paper);
    let info = match &config.title {
        Some(title) => info.with_title(title.as_str()),
        None => info,
    };
    let title = info.title.clone();
    doc.set_info(info);

    for _ in 0..config.pages {
        let mut page = Page::new(config.paper, Some(config.margins));
        page.add_line_groups(groups.iter().cloned());
        doc.add_page(page);
    }

    info!(
        pages = doc.page_count(),
        groups_per_page = groups.len(),
        "laid out {title}"
    );
    Ok(doc)
}

/// Build the document and write it to the configured output file
pub fn write_file(config: &Config) -> Result<(), LineaturError> {
    let doc = build_document(config)?;
    let out = File::create(&config.output)?;
    doc.write(BufWriter::new(out))?;
    info!(path = %config.output.display(), "wrote pdf");
    Ok(())
}
