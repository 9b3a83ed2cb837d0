//! Dashboard sidebar tree: package → course → lesson.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard fetches active subscriptions, their packages, the packages'
//! courses and each course's lessons, then hands everything to
//! [`CatalogTree::build`]. [`TreeExpansion`] holds which branch is open and
//! which lesson is selected.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::{Course, Lesson, Package, Subscription};
use crate::net::{api_auth, api_catalog};
use crate::state::progress::sort_lessons;

#[derive(Clone, Debug, PartialEq)]
pub struct CourseNode {
    pub course: Course,
    /// Sorted by `order`.
    pub lessons: Vec<Lesson>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PackageNode {
    pub id: String,
    pub title: String,
    pub courses: Vec<CourseNode>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogTree {
    pub packages: Vec<PackageNode>,
}

impl CatalogTree {
    /// Assemble the tree. Duplicate packages keep their first occurrence,
    /// course ids with no fetched course are skipped, and a course with no
    /// lesson entry gets an empty list.
    pub fn build(
        packages: Vec<Package>,
        courses: &[Course],
        lessons_by_course: &HashMap<String, Vec<Lesson>>,
    ) -> Self {
        let by_id: HashMap<&str, &Course> = courses.iter().map(|c| (c.id.as_str(), c)).collect();
        let packages = dedupe_packages(packages)
            .into_iter()
            .map(|pkg| PackageNode {
                courses: pkg
                    .course_ids
                    .iter()
                    .filter_map(|cid| by_id.get(cid.as_str()))
                    .map(|course| CourseNode {
                        course: (*course).clone(),
                        lessons: sort_lessons(
                            lessons_by_course.get(&course.id).cloned().unwrap_or_default(),
                        ),
                    })
                    .collect(),
                id: pkg.id,
                title: pkg.title,
            })
            .collect();
        Self { packages }
    }

    /// True when no package contains a fetched course.
    pub fn has_no_courses(&self) -> bool {
        self.packages.iter().all(|p| p.courses.is_empty())
    }

    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.packages
            .iter()
            .flat_map(|p| &p.courses)
            .flat_map(|c| &c.lessons)
            .find(|l| l.id == lesson_id)
    }

    /// The course node containing `lesson_id`.
    pub fn course_of(&self, lesson_id: &str) -> Option<&CourseNode> {
        self.packages
            .iter()
            .flat_map(|p| &p.courses)
            .find(|c| c.lessons.iter().any(|l| l.id == lesson_id))
    }

    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.packages
            .iter()
            .flat_map(|p| &p.courses)
            .flat_map(|c| &c.lessons)
            .next()
    }
}

/// Keep the first package for each id.
pub fn dedupe_packages(packages: Vec<Package>) -> Vec<Package> {
    let mut seen = HashSet::new();
    packages.into_iter().filter(|p| seen.insert(p.id.clone())).collect()
}

/// Distinct package ids of `subscriptions`, in order.
pub fn subscribed_package_ids(subscriptions: &[Subscription]) -> Vec<String> {
    let mut seen = HashSet::new();
    subscriptions
        .iter()
        .filter(|s| seen.insert(s.package_id.as_str()))
        .map(|s| s.package_id.clone())
        .collect()
}

/// Distinct course ids across `packages`, in first-seen order.
pub fn unique_course_ids(packages: &[Package]) -> Vec<String> {
    let mut seen = HashSet::new();
    packages
        .iter()
        .flat_map(|p| &p.course_ids)
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Which package and course are open, and which lesson is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeExpansion {
    pub package: Option<String>,
    pub course: Option<String>,
    pub lesson: Option<String>,
}

impl TreeExpansion {
    /// Open `id` (or close it if open). Either way the open course closes.
    pub fn toggle_package(&mut self, id: &str) {
        self.package = if self.package.as_deref() == Some(id) { None } else { Some(id.to_owned()) };
        self.course = None;
    }

    pub fn toggle_course(&mut self, id: &str) {
        self.course = if self.course.as_deref() == Some(id) { None } else { Some(id.to_owned()) };
    }

    pub fn select_lesson(&mut self, id: &str) {
        self.lesson = Some(id.to_owned());
    }

    pub fn is_package_open(&self, id: &str) -> bool {
        self.package.as_deref() == Some(id)
    }

    pub fn is_course_open(&self, id: &str) -> bool {
        self.course.as_deref() == Some(id)
    }

    pub fn is_selected(&self, lesson_id: &str) -> bool {
        self.lesson.as_deref() == Some(lesson_id)
    }
}

/// Why the dashboard could not show a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardError {
    NoActiveSubscription,
    NoCoursesInPackages,
    FailedToLoadCourses,
}

impl DashboardError {
    /// Translation key.
    pub fn key(self) -> &'static str {
        match self {
            Self::NoActiveSubscription => "noActiveSubscription",
            Self::NoCoursesInPackages => "noCoursesInPackages",
            Self::FailedToLoadCourses => "failedToLoadCourses",
        }
    }

    /// Whether to offer a link to the package list.
    pub fn suggests_packages(self) -> bool {
        matches!(self, Self::NoActiveSubscription)
    }
}

/// Fetch everything the sidebar needs for `user_id` and build the tree.
///
/// # Errors
///
/// Returns [`DashboardError::NoActiveSubscription`] or
/// [`DashboardError::NoCoursesInPackages`] for empty results, and
/// [`DashboardError::FailedToLoadCourses`] when the subscription, a package or
/// a course cannot be fetched. A course whose lessons fail to load gets an
/// empty list instead.
pub async fn load_tree(user_id: &str) -> Result<CatalogTree, DashboardError> {
    let subscriptions = api_auth::active_subscriptions(user_id)
        .await
        .map_err(|_| DashboardError::FailedToLoadCourses)?;
    if subscriptions.is_empty() {
        return Err(DashboardError::NoActiveSubscription);
    }

    let mut packages = Vec::new();
    for id in subscribed_package_ids(&subscriptions) {
        let package = api_catalog::package(&id)
            .await
            .map_err(|_| DashboardError::FailedToLoadCourses)?;
        packages.push(package);
    }

    let course_ids = unique_course_ids(&packages);
    if course_ids.is_empty() {
        return Err(DashboardError::NoCoursesInPackages);
    }

    let mut courses = Vec::with_capacity(course_ids.len());
    let mut lessons = HashMap::new();
    for id in course_ids {
        let course = api_catalog::course(&id)
            .await
            .map_err(|_| DashboardError::FailedToLoadCourses)?;
        let course_lessons = api_catalog::course_lessons(&id).await.unwrap_or_default();
        lessons.insert(id, course_lessons);
        courses.push(course);
    }
    Ok(CatalogTree::build(packages, &courses, &lessons))
}
