//! Integration tests for the skim pipeline.

use std::io::Write;

use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use pdfskim::{
    render_for_console, skim_bytes, skim_bytes_with_options, skim_file, Error, ExtractOptions,
    Skimmer,
};

/// Build an in-memory PDF with one page per entry in `page_texts`.
///
/// A non-empty entry becomes a single `Tj` text run in Helvetica; an empty
/// entry produces a page with no content stream at all.
fn create_text_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids: Vec<Object> = Vec::new();
    for text in page_texts {
        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => Object::Dictionary(dictionary! {
                "Font" => Object::Dictionary(dictionary! {
                    "F1" => font_id,
                }),
            }),
        };

        if !text.is_empty() {
            let content = format!("BT /F1 12 Tf 72 700 Td ({}) Tj ET", text);
            let stream = Stream::new(lopdf::Dictionary::new(), content.into_bytes());
            let content_id = doc.add_object(Object::Stream(stream));
            page_dict.set("Contents", content_id);
        }

        let page_id = doc.add_object(page_dict);
        page_ids.push(page_id.into());
    }

    let count = page_texts.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

fn marker_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.starts_with("--- Page "))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_three_pages_under_default_limit() {
    let data = create_text_pdf(&["Alpha", "Bravo", "Charlie"]);
    let skim = skim_bytes(&data).unwrap();

    assert_eq!(skim.total_pages, 3);
    assert_eq!(skim.processed_pages(), 3);

    let text = skim.to_text();
    assert_eq!(
        marker_lines(&text),
        vec![
            "--- Page 1 / 3 ---",
            "--- Page 2 / 3 ---",
            "--- Page 3 / 3 ---",
        ]
    );
    assert!(text.contains("Alpha"));
    assert!(text.contains("Bravo"));
    assert!(text.contains("Charlie"));
}

#[test]
fn test_limit_clamps_page_count() {
    let data = create_text_pdf(&["one", "two", "three", "four"]);
    let options = ExtractOptions::new().with_max_pages(2);
    let skim = skim_bytes_with_options(&data, &options).unwrap();

    assert_eq!(skim.total_pages, 4);
    assert_eq!(skim.processed_pages(), 2);

    // Markers still report the full document page count
    let text = skim.to_text();
    assert_eq!(
        marker_lines(&text),
        vec!["--- Page 1 / 4 ---", "--- Page 2 / 4 ---"]
    );
    assert!(!text.contains("three"));
    assert!(!text.contains("four"));
}

#[test]
fn test_page_count_matches_document() {
    let data = create_text_pdf(&["a", "b", "c", "d", "e", "f"]);
    let skimmer = Skimmer::from_bytes(&data).unwrap();
    assert_eq!(skimmer.page_count(), 6);
}

#[test]
fn test_limit_larger_than_document() {
    let data = create_text_pdf(&["first", "second"]);
    let options = ExtractOptions::new().with_max_pages(50);
    let skim = skim_bytes_with_options(&data, &options).unwrap();

    assert_eq!(skim.total_pages, 2);
    assert_eq!(skim.processed_pages(), 2);
}

#[test]
fn test_empty_page_yields_marker_only_block() {
    let data = create_text_pdf(&["before", "", "after"]);
    let skim = skim_bytes(&data).unwrap();

    assert!(skim.pages[1].is_empty());

    // The empty page's marker is immediately followed by the next block
    let text = skim.to_text();
    assert!(text.contains("--- Page 2 / 3 ---\n\n--- Page 3 / 3 ---"));
}

#[test]
fn test_whitespace_only_page_is_filtered_to_empty() {
    let data = create_text_pdf(&["   "]);
    let skim = skim_bytes(&data).unwrap();

    assert_eq!(skim.processed_pages(), 1);
    assert!(skim.pages[0].is_empty());
    assert_eq!(skim.to_text(), "\n--- Page 1 / 1 ---");
}

#[test]
fn test_output_layout_is_exact() {
    let data = create_text_pdf(&["hello"]);
    let skim = skim_bytes(&data).unwrap();

    assert_eq!(skim.to_text(), "\n--- Page 1 / 1 ---\nhello");
}

#[test]
fn test_skim_file_from_disk() {
    let data = create_text_pdf(&["on disk"]);
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(&data).unwrap();

    let skim = skim_file(file.path()).unwrap();
    assert_eq!(skim.total_pages, 1);
    assert!(skim.to_text().contains("on disk"));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = skim_file("/definitely/not/here.pdf");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_renamed_text_file_is_format_error() {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"this is not a PDF at all").unwrap();

    let result = skim_file(file.path());
    assert!(matches!(result, Err(Error::UnknownFormat)));
}

#[test]
fn test_truncated_pdf_is_parse_error() {
    // Valid header, garbage body
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF-1.4\nnothing else of substance").unwrap();

    let result = skim_file(file.path());
    assert!(matches!(result, Err(Error::PdfParse(_))));
}

#[test]
fn test_console_rendering_never_fails_on_narrow_encoding() {
    let target = encoding_rs::WINDOWS_1252;

    // A skim whose content includes characters outside windows-1252
    let skim = pdfskim::Skim {
        total_pages: 1,
        pages: vec![pdfskim::PageText::from_raw(1, "arrows → and 漢字 here")],
    };
    let text = skim.to_text();

    let rendered = render_for_console(&text, target);
    assert!(rendered.chars().count() < text.chars().count());
    assert!(rendered.contains("--- Page 1 / 1 ---"));

    let (_, _, had_unmappable) = target.encode(&rendered);
    assert!(!had_unmappable);
}
