//! Shared helpers for integration tests.
//!
//! Fixtures are synthesized with lopdf rather than checked in as binary
//! files; the MediaBox width of each page acts as a marker so merged
//! output can be traced back to its source document and page.

use lopdf::{Document, Object, dictionary};
use std::path::{Path, PathBuf};

use pdfedit::metadata::InfoMap;

/// Write a PDF with one page per entry in `widths` and an optional title.
pub fn sample_pdf(dir: &Path, name: &str, widths: &[i64], title: Option<&str>) -> PathBuf {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::new();
    for width in widths {
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), (*width).into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(title) = title {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Author" => Object::string_literal("Someone"),
            "Trapped" => Object::Name(b"False".to_vec()),
        });
        doc.trailer.set("Info", info_id);
    }

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// MediaBox widths of the document's pages, in page order.
pub fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .values()
        .map(|page_id| {
            let dict = doc.get_object(*page_id).unwrap().as_dict().unwrap();
            let mediabox = dict.get(b"MediaBox").unwrap().as_array().unwrap();
            mediabox[2].as_i64().unwrap()
        })
        .collect()
}

/// Title metadata of the PDF at `path`.
pub fn title_of(path: &Path) -> Option<String> {
    let doc = Document::load(path).unwrap();
    InfoMap::from_document(&doc).title()
}

/// Build CLI arguments for `pdfedit::run` without going through clap.
pub fn cli_for(
    pdfs: &[&Path],
    merge: bool,
    out: Option<&Path>,
    dry_run: bool,
    continue_on_error: bool,
) -> pdfedit::cli::Cli {
    pdfedit::cli::Cli {
        pdfs: pdfs.iter().map(|p| p.display().to_string()).collect(),
        merge,
        rename: !merge,
        out: out.map(|p| p.to_path_buf()),
        dry_run,
        quiet: true,
        verbose: false,
        continue_on_error,
    }
}
