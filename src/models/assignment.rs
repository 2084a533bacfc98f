use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assignment with its nested submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub course: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub max_points: u32,
    pub submissions: Vec<Submission>,
}

impl Assignment {
    /// The submission turned in by the given student, if any.
    pub fn submission_by<'a>(&'a self, student: &str) -> Option<&'a Submission> {
        self.submissions.iter().find(|s| s.student == student)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub student: String,
    pub submitted_at: NaiveDate,
    /// Uploaded file name; text-only submissions carry none.
    pub attachment: Option<String>,
    pub grade: Option<u32>,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

/// Draft captured by the create-assignment form. The due date stays a raw
/// string until the store validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub title: String,
    pub course: String,
    pub description: String,
    pub due_date: String,
    pub max_points: u32,
}

impl Default for NewAssignment {
    fn default() -> Self {
        Self {
            title: String::new(),
            course: String::new(),
            description: String::new(),
            due_date: String::new(),
            max_points: 100,
        }
    }
}
