use super::*;

// =============================================================
// Helpers
// =============================================================

fn package(id: &str, course_ids: &[&str]) -> Package {
    Package {
        id: id.to_owned(),
        title: format!("Package {id}"),
        description: String::new(),
        price: 10.0,
        image_url: None,
        course_ids: course_ids.iter().map(|s| (*s).to_owned()).collect(),
        discount: 0.0,
        duration: None,
        status: None,
    }
}

fn course(id: &str) -> Course {
    Course {
        id: id.to_owned(),
        title: format!("Course {id}"),
        description: String::new(),
        subject: crate::net::types::SubjectType::Math,
        image_url: None,
        created_at: None,
        updated_at: None,
    }
}

fn lesson(id: &str, course_id: &str, order: i32) -> Lesson {
    Lesson {
        id: id.to_owned(),
        title: id.to_owned(),
        description: String::new(),
        video_url: None,
        order,
        transcript: None,
        content: None,
        image_url: None,
        course_id: course_id.to_owned(),
        created_at: None,
        updated_at: None,
    }
}

fn subscription(package_id: &str) -> Subscription {
    Subscription {
        id: format!("s-{package_id}"),
        user_id: "u-1".to_owned(),
        package_id: package_id.to_owned(),
        start_date: String::new(),
        end_date: String::new(),
        is_active: true,
    }
}

// =============================================================
// Building
// =============================================================

#[test]
fn build_dedupes_packages_keeping_first() {
    let mut dup = package("p1", &["c2"]);
    dup.title = "Duplicate".to_owned();
    let tree = CatalogTree::build(
        vec![package("p1", &["c1"]), dup, package("p2", &["c2"])],
        &[course("c1"), course("c2")],
        &HashMap::new(),
    );
    assert_eq!(tree.packages.len(), 2);
    assert_eq!(tree.packages[0].title, "Package p1");
    assert_eq!(tree.packages[0].courses[0].course.id, "c1");
}

#[test]
fn build_follows_course_id_order_and_skips_unknown_ids() {
    let tree = CatalogTree::build(
        vec![package("p1", &["c2", "missing", "c1"])],
        &[course("c1"), course("c2")],
        &HashMap::new(),
    );
    let ids: Vec<&str> = tree.packages[0].courses.iter().map(|c| c.course.id.as_str()).collect();
    assert_eq!(ids, vec!["c2", "c1"]);
    assert!(tree.packages[0].courses.iter().all(|c| c.lessons.is_empty()));
}

#[test]
fn build_sorts_lessons_by_order() {
    let mut lessons = HashMap::new();
    lessons.insert(
        "c1".to_owned(),
        vec![lesson("l3", "c1", 3), lesson("l1", "c1", 1), lesson("l2", "c1", 2)],
    );
    let tree = CatalogTree::build(vec![package("p1", &["c1"])], &[course("c1")], &lessons);
    let ids: Vec<&str> = tree.packages[0].courses[0].lessons.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l1", "l2", "l3"]);
    assert_eq!(tree.first_lesson().map(|l| l.id.as_str()), Some("l1"));
    assert_eq!(tree.find_lesson("l3").map(|l| l.order), Some(3));
}

#[test]
fn course_of_finds_the_owning_course() {
    let mut lessons = HashMap::new();
    lessons.insert("c2".to_owned(), vec![lesson("l9", "c2", 0)]);
    let tree = CatalogTree::build(vec![package("p1", &["c1", "c2"])], &[course("c1"), course("c2")], &lessons);
    assert_eq!(tree.course_of("l9").map(|c| c.course.id.as_str()), Some("c2"));
    assert!(tree.course_of("nope").is_none());
}

#[test]
fn has_no_courses_detects_empty_packages() {
    let tree = CatalogTree::build(vec![package("p1", &["gone"])], &[], &HashMap::new());
    assert!(tree.has_no_courses());
    assert!(CatalogTree::default().has_no_courses());
}

#[test]
fn unique_course_ids_flattens_in_first_seen_order() {
    let ids = unique_course_ids(&[package("p1", &["c1", "c2"]), package("p2", &["c2", "c3", "c1"])]);
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}

#[test]
fn subscribed_package_ids_are_distinct() {
    let ids = subscribed_package_ids(&[subscription("p1"), subscription("p2"), subscription("p1")]);
    assert_eq!(ids, vec!["p1", "p2"]);
}

// =============================================================
// Expansion
// =============================================================

#[test]
fn toggling_package_collapses_open_course() {
    let mut exp = TreeExpansion::default();
    exp.toggle_package("p1");
    exp.toggle_course("c1");
    assert!(exp.is_course_open("c1"));

    exp.toggle_package("p2");
    assert!(exp.is_package_open("p2"));
    assert!(!exp.is_package_open("p1"));
    assert_eq!(exp.course, None);
}

#[test]
fn toggling_open_node_closes_it() {
    let mut exp = TreeExpansion::default();
    exp.toggle_package("p1");
    exp.toggle_package("p1");
    assert_eq!(exp.package, None);

    exp.toggle_course("c1");
    exp.toggle_course("c1");
    assert_eq!(exp.course, None);
}

#[test]
fn selecting_lesson_highlights_only_that_lesson() {
    let mut exp = TreeExpansion::default();
    exp.select_lesson("l1");
    exp.select_lesson("l2");
    assert!(exp.is_selected("l2"));
    assert!(!exp.is_selected("l1"));
}

#[test]
fn dashboard_errors_map_to_keys() {
    assert_eq!(DashboardError::NoActiveSubscription.key(), "noActiveSubscription");
    assert_eq!(DashboardError::NoCoursesInPackages.key(), "noCoursesInPackages");
    assert_eq!(DashboardError::FailedToLoadCourses.key(), "failedToLoadCourses");
    assert!(DashboardError::NoActiveSubscription.suggests_packages());
    assert!(!DashboardError::FailedToLoadCourses.suggests_packages());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_tree_reports_failure_outside_the_browser() {
    let result = futures::executor::block_on(load_tree("u-1"));
    assert_eq!(result, Err(DashboardError::FailedToLoadCourses));
}
