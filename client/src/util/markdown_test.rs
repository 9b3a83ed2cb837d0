use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_html("# Vectors\n\nA *vector* has **direction**.");
    assert!(html.contains("<h1>Vectors</h1>"));
    assert!(html.contains("<em>vector</em>"));
    assert!(html.contains("<strong>direction</strong>"));
}

#[test]
fn strips_raw_html() {
    let html = render_html("before <script>alert(1)</script> after\n\n<div onclick=\"x()\">block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("before"));
}

#[test]
fn renders_tables() {
    let html = render_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_html(""), "");
}

// =============================================================
// Link and image targets
// =============================================================

#[test]
fn script_links_are_neutralized() {
    let html = render_html("[click me](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r##"<a href="#">click me</a>"##));
}

#[test]
fn script_images_and_data_urls_are_neutralized() {
    let html = render_html("![x](data:text/html;base64,PHNjcmlwdD4=) ![y](vbscript:msgbox)");
    assert!(!html.contains("data:"));
    assert!(!html.contains("vbscript:"));
}

#[test]
fn obfuscated_schemes_are_caught() {
    assert!(!is_safe_url("JaVaScRiPt:alert(1)"));
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url(" javascript:alert(1)"));
}

#[test]
fn web_mail_and_relative_targets_survive() {
    let html = render_html("[a](https://novademy.az/x) [b](mailto:help@novademy.az) [c](/course/1) [d](#top)");
    assert!(html.contains(r#"href="https://novademy.az/x""#));
    assert!(html.contains(r#"href="mailto:help@novademy.az""#));
    assert!(html.contains(r#"href="/course/1""#));
    assert!(html.contains(r##"href="#top""##));
    assert!(is_safe_url("lesson/2?t=5:00"));
}
