use chrono::NaiveDate;

use crate::models::{Assignment, NewAssignment, Submission};

/// Assignments plus their nested submissions. Admins create and grade;
/// students append submissions through the same book.
#[derive(Clone, PartialEq, Debug)]
pub struct AssignmentBook {
    assignments: Vec<Assignment>,
    next_id: i64,
}

impl AssignmentBook {
    pub fn seeded() -> Self {
        let assignments = vec![
            Assignment {
                id: 1,
                title: "Maths Worksheet 1".to_string(),
                course: "Maths for Beginners".to_string(),
                description: "Addition and subtraction exercises".to_string(),
                due_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap_or_default(),
                max_points: 100,
                submissions: vec![
                    Submission {
                        id: 1,
                        student: "Ali Khan".to_string(),
                        submitted_at: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap_or_default(),
                        attachment: Some("worksheet1_ali.pdf".to_string()),
                        grade: Some(90),
                    },
                    Submission {
                        id: 2,
                        student: "Sara Ahmed".to_string(),
                        submitted_at: NaiveDate::from_ymd_opt(2025, 8, 11).unwrap_or_default(),
                        attachment: None,
                        grade: None,
                    },
                ],
            },
            Assignment {
                id: 2,
                title: "Economics Essay".to_string(),
                course: "Economics 101".to_string(),
                description: "Complete the essay on market structures".to_string(),
                due_date: NaiveDate::from_ymd_opt(2025, 8, 16).unwrap_or_default(),
                max_points: 50,
                submissions: Vec::new(),
            },
        ];
        Self {
            assignments,
            next_id: 3,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Validate and append a new assignment with an empty submission list.
    pub fn add(&mut self, draft: NewAssignment) -> Result<Assignment, String> {
        if draft.title.trim().is_empty() || draft.course.trim().is_empty() {
            return Err("Please fill all required fields.".to_string());
        }
        let due_date = NaiveDate::parse_from_str(draft.due_date.trim(), "%Y-%m-%d")
            .map_err(|_| "Please enter a valid due date.".to_string())?;
        if draft.max_points == 0 {
            return Err("Max points must be at least 1.".to_string());
        }

        let assignment = Assignment {
            id: self.next_id,
            title: draft.title.trim().to_string(),
            course: draft.course.trim().to_string(),
            description: draft.description.trim().to_string(),
            due_date,
            max_points: draft.max_points,
            submissions: Vec::new(),
        };
        self.next_id += 1;
        self.assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Append an ungraded submission to the addressed assignment. One
    /// submission per student; turning in again is rejected.
    pub fn submit(
        &mut self,
        assignment_id: i64,
        student: &str,
        attachment: Option<String>,
        submitted_at: NaiveDate,
    ) -> Result<Submission, String> {
        let student = student.trim();
        if student.is_empty() {
            return Err("A submission needs a student name.".to_string());
        }
        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| "Unknown assignment.".to_string())?;
        if assignment.submissions.iter().any(|s| s.student == student) {
            return Err("This assignment has already been submitted.".to_string());
        }

        let id = assignment
            .submissions
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0)
            + 1;
        let submission = Submission {
            id,
            student: student.to_string(),
            submitted_at,
            attachment,
            grade: None,
        };
        assignment.submissions.push(submission.clone());
        Ok(submission)
    }

    /// Grade one submission. Returns `false` when either id does not match;
    /// no other row is touched in any case.
    pub fn grade(&mut self, assignment_id: i64, submission_id: i64, points: u32) -> bool {
        let Some(assignment) = self.assignments.iter_mut().find(|a| a.id == assignment_id) else {
            return false;
        };
        let capped = points.min(assignment.max_points);
        match assignment
            .submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
        {
            Some(submission) => {
                submission.grade = Some(capped);
                true
            }
            None => false,
        }
    }
}

impl Default for AssignmentBook {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewAssignment {
        NewAssignment {
            title: "Physics Lab Report".to_string(),
            course: "Physics for everyone".to_string(),
            description: "Write up the pendulum experiment".to_string(),
            due_date: "2025-09-01".to_string(),
            max_points: 50,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_add_grows_the_list_by_exactly_one() {
        let mut book = AssignmentBook::seeded();
        let before = book.len();

        let assignment = book.add(draft()).unwrap();

        assert_eq!(book.len(), before + 1);
        assert!(assignment.submissions.is_empty());
        assert_eq!(assignment.due_date, day(2025, 9, 1));
    }

    #[test]
    fn malformed_due_date_is_rejected_without_mutation() {
        let mut book = AssignmentBook::seeded();
        let before = book.clone();

        let mut bad = draft();
        bad.due_date = "20-07-2025".to_string();
        assert!(book.add(bad).is_err());

        let mut empty = draft();
        empty.title = String::new();
        assert!(book.add(empty).is_err());

        assert_eq!(book, before);
    }

    #[test]
    fn zero_max_points_is_rejected() {
        let mut book = AssignmentBook::seeded();
        let mut bad = draft();
        bad.max_points = 0;
        assert!(book.add(bad).is_err());
    }

    #[test]
    fn submit_appends_an_ungraded_submission_to_the_addressed_assignment() {
        let mut book = AssignmentBook::seeded();

        let submission = book
            .submit(2, "Tariq Aziz", Some("essay.docx".to_string()), day(2025, 8, 14))
            .unwrap();

        assert!(!submission.is_graded());
        assert_eq!(submission.attachment.as_deref(), Some("essay.docx"));
        assert_eq!(book.assignments()[1].submissions.len(), 1);
        // The other assignment keeps its roster.
        assert_eq!(book.assignments()[0].submissions.len(), 2);
    }

    #[test]
    fn submit_ids_continue_past_the_existing_roster() {
        let mut book = AssignmentBook::seeded();

        let submission = book.submit(1, "Tariq Aziz", None, day(2025, 8, 14)).unwrap();

        assert_eq!(submission.id, 3);
    }

    #[test]
    fn submitting_twice_is_rejected_without_mutation() {
        let mut book = AssignmentBook::seeded();
        book.submit(2, "Tariq Aziz", None, day(2025, 8, 14)).unwrap();
        let before = book.clone();

        assert!(book.submit(2, "Tariq Aziz", None, day(2025, 8, 15)).is_err());
        assert_eq!(book, before);
    }

    #[test]
    fn submit_rejects_unknown_assignment_and_blank_student() {
        let mut book = AssignmentBook::seeded();
        let before = book.clone();

        assert!(book.submit(99, "Tariq Aziz", None, day(2025, 8, 14)).is_err());
        assert!(book.submit(1, "   ", None, day(2025, 8, 14)).is_err());
        assert_eq!(book, before);
    }

    #[test]
    fn grading_mutates_only_the_addressed_submission() {
        let mut book = AssignmentBook::seeded();

        assert!(book.grade(1, 2, 75));

        let assignment = &book.assignments()[0];
        assert_eq!(assignment.submissions[1].grade, Some(75));
        // The already graded row keeps its grade.
        assert_eq!(assignment.submissions[0].grade, Some(90));
    }

    #[test]
    fn grades_are_capped_at_max_points() {
        let mut book = AssignmentBook::seeded();
        assert!(book.grade(1, 2, 500));
        assert_eq!(book.assignments()[0].submissions[1].grade, Some(100));
    }

    #[test]
    fn grading_unknown_ids_is_a_no_op() {
        let mut book = AssignmentBook::seeded();
        let before = book.clone();

        assert!(!book.grade(99, 1, 10));
        assert!(!book.grade(1, 99, 10));
        assert_eq!(book, before);
    }
}
