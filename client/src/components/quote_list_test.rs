use super::*;
use viewer::doc::QuoteLocation;

fn quote(page: Option<u32>, location_page: Option<u32>) -> Quote {
    Quote {
        id: 1,
        text: "q".to_owned(),
        page,
        location: Some(QuoteLocation { page: location_page, text_location: String::new(), rect: None }),
        tags: Vec::new(),
    }
}

#[test]
fn page_badge_shows_known_page() {
    assert_eq!(page_badge(&quote(Some(3), None)), "Page 3");
}

#[test]
fn page_badge_falls_back_to_location_page() {
    assert_eq!(page_badge(&quote(None, Some(5))), "Page 5");
}

#[test]
fn page_badge_marks_unknown_page() {
    assert_eq!(page_badge(&quote(None, None)), "Page ?");
}
