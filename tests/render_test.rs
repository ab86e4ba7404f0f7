mod utils;

use albedo::apod::StaticFetcher;
use albedo::render::{render_card, Document, RenderError};
use utils::sample_record;

const SHELL: &str =
    r#"<html><body><div id="placeholder"><p>loading</p></div></body></html>"#;

#[test]
fn card_contains_title_and_explanation_verbatim() {
    let record = sample_record();
    let markup = render_card(&record).unwrap();
    assert!(markup.contains("Moon Mountains Magnified during Ring of Fire Eclipse"));
    assert!(markup.contains("the lunar limb grazed the solar disk"));
    assert!(markup.contains(r#"src="https://apod.nasa.gov/apod/image/2404/eclipse_big.jpg""#));
    assert!(markup.contains("Josh Dury"));
}

#[test]
fn rendering_the_same_record_is_idempotent() {
    let record = sample_record();
    let first = render_card(&record).unwrap();
    let second = render_card(&record).unwrap();
    assert_eq!(first, second);
}

#[test]
fn video_records_render_an_embedded_frame() {
    let mut record = sample_record();
    record.media_type = "video".to_string();
    record.url = "https://www.youtube.com/embed/demo".to_string();
    let markup = render_card(&record).unwrap();
    assert!(markup.contains(r#"<iframe src="https://www.youtube.com/embed/demo""#));
    assert!(!markup.contains("<img"));
}

#[test]
fn injection_fully_replaces_previous_content() {
    let doc = Document::new(SHELL);
    let first = doc.inject("placeholder", "<p>first</p>").unwrap();
    assert!(first.contains("<p>first</p>"));
    assert!(!first.contains("loading"));

    // A second render on the resulting page leaves only the second record.
    let second = Document::new(first)
        .inject("placeholder", "<p>second</p>")
        .unwrap();
    assert!(second.contains("<p>second</p>"));
    assert!(!second.contains("first"));
}

#[test]
fn injecting_into_a_missing_container_is_an_error() {
    let err = Document::new(SHELL)
        .inject("nonexistent", "<p>x</p>")
        .unwrap_err();
    assert!(matches!(err, RenderError::MissingContainer(id) if id == "nonexistent"));
}

#[test]
fn demo_record_renders_both_demo_strings() {
    let record = StaticFetcher::placeholder_record();
    let markup = render_card(&record).unwrap();
    let page = Document::new(SHELL).inject("placeholder", &markup).unwrap();
    assert!(page.contains("<h2>DEMO</h2>"));
    assert!(page.matches("DEMO").count() >= 2);
}
