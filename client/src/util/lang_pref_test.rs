#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_default_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Lang::Az);
}

#[test]
fn save_returns_the_saved_language() {
    assert_eq!(save(Lang::Ru), Lang::Ru);
    assert_eq!(save(Lang::En), Lang::En);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Lang::Az);
}
