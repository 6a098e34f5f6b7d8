use std::collections::HashMap;

use crate::model::Course;

/// One entry per course id, in the order ids were first seen. A repeated id
/// takes the name from its latest entry.
#[must_use]
pub fn unique_courses(entries: Vec<Course>) -> Vec<Course> {
    let mut index_by_id: HashMap<String, usize> = HashMap::new();
    let mut courses: Vec<Course> = Vec::new();

    for entry in entries {
        match index_by_id.get(&entry.course_id) {
            Some(&idx) => courses[idx].course_name = entry.course_name,
            None => {
                index_by_id.insert(entry.course_id.clone(), courses.len());
                courses.push(entry);
            }
        }
    }

    courses
}

#[must_use]
pub fn find_course<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    courses.iter().find(|course| course.course_id == course_id)
}
