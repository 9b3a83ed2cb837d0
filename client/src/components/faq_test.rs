use super::*;

#[test]
fn clicking_a_closed_item_opens_only_it() {
    assert_eq!(toggle_item(None, 1), Some(1));
    assert_eq!(toggle_item(Some(0), 2), Some(2));
}

#[test]
fn clicking_the_open_item_closes_it() {
    assert_eq!(toggle_item(Some(1), 1), None);
}
