use super::*;

#[test]
fn coordinate_labels_use_one_decimal() {
    let labels = coordinate_labels(Rect::new(200.0, 200.24, 400.0, 399.96));
    assert_eq!(labels, ["200.0", "200.2", "400.0", "400.0"].map(str::to_owned));
}

#[test]
fn no_selection_off_the_browser() {
    #[cfg(not(feature = "csr"))]
    assert_eq!(current(), None);
}
