use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A course the user has played, as listed by the course source.
///
/// The same struct is posted back as the coaching analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "courseID", deserialize_with = "string_or_number")]
    pub course_id: String,
    #[serde(rename = "courseName", default)]
    pub course_name: String,
}

impl Course {
    #[must_use]
    pub fn new(course_id: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
        }
    }
}

// course ids come back numeric from some imports
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "courseID must be a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_and_string_ids() {
        let courses: Vec<Course> = serde_json::from_str(
            r#"[{"courseID":12,"courseName":"Pinehurst No. 2"},{"courseID":"a7","courseName":"Bandon"}]"#,
        )
        .unwrap();
        assert_eq!(courses[0], Course::new("12", "Pinehurst No. 2"));
        assert_eq!(courses[1].course_id, "a7");
    }

    #[test]
    fn serializes_backend_field_names() {
        let json = serde_json::to_value(Course::new("12", "Pinehurst")).unwrap();
        assert_eq!(json["courseID"], "12");
        assert_eq!(json["courseName"], "Pinehurst");
    }
}
