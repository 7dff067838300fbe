//! Academics screen: courses and departments

use campus_portal::catalog;
use campus_portal::filter::{count_label, FilterState};
use campus_portal::warn;

/// Handle `courses`
pub fn courses(state: &FilterState) {
    let departments = catalog::departments();
    if !departments.iter().any(|d| d.id == state.category) {
        warn!("Unknown department '{}'", state.category);
    }

    let courses = catalog::courses();
    let visible = state.apply(&courses);

    println!("\n=== Courses ===\n");
    println!("{}\n", count_label(visible.len(), "course", "found"));
    for course in visible {
        println!("[{}] {}", course.id, course.title);
        println!("    {} · {} · {}", course.level, course.duration, course.department);
        println!("    {}", course.description);
    }
}

/// Handle `departments`
pub fn departments() {
    println!("\n=== Departments ===\n");
    for department in catalog::departments() {
        println!("  {:<12} {}", department.id, department.name);
    }
}
