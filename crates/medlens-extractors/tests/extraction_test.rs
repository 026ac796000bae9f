//! End-to-end extraction tests against synthetic PDF documents.

use std::time::Duration;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use medlens_extractors::{
    ExtractError, ExtractionPipeline, Extractor, ExtractorFactory, MediaType, PdfExtractor,
    SourceDocument,
};

/// Build an in-memory PDF with one page per entry of `page_texts`.
fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(page_texts.len());
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 32.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
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
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[tokio::test]
async fn pages_join_in_physical_order_with_blank_line() {
    let bytes = pdf_with_pages(&["A", "B", "C"]);
    let extracted = PdfExtractor::new().extract(&bytes).await.unwrap();

    assert_eq!(extracted.content, "A\n\nB\n\nC");
    assert_eq!(extracted.source_page_count, 3);
}

#[tokio::test]
async fn single_page_extracts_verbatim() {
    let bytes = pdf_with_pages(&["Blood test results within normal range"]);
    let extracted = PdfExtractor::new().extract(&bytes).await.unwrap();

    assert_eq!(extracted.content, "Blood test results within normal range");
    assert_eq!(extracted.source_page_count, 1);
}

#[tokio::test]
async fn pages_with_no_text_are_an_empty_document() {
    let bytes = pdf_with_pages(&["", "", ""]);
    let result = PdfExtractor::new().extract(&bytes).await;

    assert!(matches!(result, Err(ExtractError::EmptyDocument)));
}

#[tokio::test]
async fn time_budget_leaves_normal_extraction_untouched() {
    let bytes = pdf_with_pages(&["Scan summary"]);
    let extractor = PdfExtractor::with_timeout(Duration::from_secs(30));

    let extracted = extractor.extract(&bytes).await.unwrap();
    assert_eq!(extracted.content, "Scan summary");
}

#[tokio::test]
async fn exhausted_time_budget_fails_with_timeout() {
    let bytes = pdf_with_pages(&["A", "B", "C"]);
    let extractor = PdfExtractor::with_timeout(Duration::ZERO);

    let result = extractor.extract(&bytes).await;
    assert!(matches!(result, Err(ExtractError::Timeout(0))));
}

#[tokio::test]
async fn pipeline_routes_pdf_documents() {
    let bytes = pdf_with_pages(&["Diagnosis: unremarkable"]);
    let pipeline = ExtractionPipeline::with_defaults();

    let document = SourceDocument::new(bytes, MediaType::Pdf);
    let extracted = pipeline.extract_document(&document).await.unwrap();
    assert_eq!(extracted.content, "Diagnosis: unremarkable");
}

#[tokio::test]
async fn pipeline_rejects_image_documents_before_parsing() {
    let pipeline = ExtractionPipeline::with_defaults();

    let result = pipeline.extract(b"\x89PNG\r\n", "image/png").await;
    assert!(matches!(result, Err(ExtractError::UnsupportedType(_))));
}

#[test]
fn factory_rejects_media_types_without_adapter() {
    for media_type in [MediaType::Jpeg, MediaType::Png] {
        let result = ExtractorFactory::for_media_type(media_type);
        assert!(matches!(result, Err(ExtractError::UnsupportedType(_))));
    }
}
