#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn sleep_resolves_immediately_outside_the_browser() {
    futures::executor::block_on(sleep_ms(1_500));
}

#[test]
fn focus_and_scroll_are_noops_but_callable() {
    focus_by_id("code-0");
    scroll_into_view("chat-end");
}
