use super::*;

#[test]
fn ui_state_defaults_to_azerbaijani_with_menu_closed() {
    let state = UiState::default();
    assert_eq!(state.lang, Lang::Az);
    assert!(!state.menu_open);
}

#[test]
fn ui_state_translates_in_active_language() {
    let state = UiState { lang: Lang::En, ..UiState::default() };
    assert_eq!(state.t("logout"), "Log out");
    assert_eq!(state.t("unknownKey"), "unknownKey");
}
