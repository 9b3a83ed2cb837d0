use super::*;

#[derive(Debug, PartialEq)]
struct Row {
    id: &'static str,
}

fn row_id(row: &Row) -> &str {
    row.id
}

#[test]
fn remove_by_id_drops_only_the_matching_row() {
    let mut rows = vec![Row { id: "a" }, Row { id: "b" }, Row { id: "c" }];
    assert!(remove_by_id(&mut rows, "b", row_id));
    assert_eq!(rows, vec![Row { id: "a" }, Row { id: "c" }]);
}

#[test]
fn remove_by_id_reports_missing_rows() {
    let mut rows = vec![Row { id: "a" }];
    assert!(!remove_by_id(&mut rows, "zzz", row_id));
    assert_eq!(rows.len(), 1);
}

#[test]
fn edit_href_encodes_the_id() {
    assert_eq!(edit_href("courses", "c-1"), "/admin/courses/c-1/edit");
    assert_eq!(edit_href("quizzes", "a b"), "/admin/quizzes/a%20b/edit");
}
