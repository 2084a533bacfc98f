use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Active => "active",
            CourseStatus::Draft => "draft",
            CourseStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub instructor: String,
    pub students: u32,
    pub lessons: u32,
    pub status: CourseStatus,
    pub category: String,
    pub duration: String,
}

/// Draft captured by the create-course form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCourse {
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub duration: String,
    pub lessons: u32,
    pub status: CourseStatus,
}
