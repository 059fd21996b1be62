//! # Course Page
//!
//! The course screen needs five independent resources. They are requested
//! concurrently and joined; each part keeps its own [`Outcome`] so the screen
//! can show live data next to fixture data.

use shared::{AssignmentListItem, CourseGrades, CourseModuleMaterials, CourseOverview, CourseTestListItem};

use crate::core::LmsService;
use crate::services::api::Outcome;

#[derive(Debug, Clone, PartialEq)]
pub struct CoursePage {
    pub overview: Outcome<CourseOverview>,
    pub materials: Outcome<Vec<CourseModuleMaterials>>,
    pub assignments: Outcome<Vec<AssignmentListItem>>,
    pub tests: Outcome<Vec<CourseTestListItem>>,
    pub grades: Outcome<CourseGrades>,
}

impl CoursePage {
    /// True when any part of the page is fixture data.
    pub fn is_degraded(&self) -> bool {
        self.overview.is_fallback()
            || self.materials.is_fallback()
            || self.assignments.is_fallback()
            || self.tests.is_fallback()
            || self.grades.is_fallback()
    }

    /// Assignments whose `module` label equals `module_title` exactly.
    pub fn assignments_for_module<'a>(
        &'a self,
        module_title: &'a str,
    ) -> impl Iterator<Item = &'a AssignmentListItem> + 'a {
        self.assignments
            .data()
            .iter()
            .filter(move |assignment| assignment.module == module_title)
    }
}

/// Load everything the course screen shows.
#[tracing::instrument(skip(service))]
pub async fn load_course_page<S>(service: &S, course_id: &str) -> CoursePage
where
    S: LmsService + ?Sized,
{
    let start = std::time::Instant::now();

    let (overview, materials, assignments, tests, grades) = tokio::join!(
        service.get_course_overview(course_id),
        service.get_course_materials(course_id),
        service.get_course_assignments(course_id),
        service.get_course_tests(course_id),
        service.get_course_grades(course_id),
    );

    let page = CoursePage {
        overview,
        materials,
        assignments,
        tests,
        grades,
    };

    tracing::info!(
        degraded = page.is_degraded(),
        duration_ms = start.elapsed().as_millis(),
        "Course page loaded"
    );
    page
}
