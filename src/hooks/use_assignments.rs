use yew::prelude::*;

use crate::hooks::use_toast;
use crate::models::NewAssignment;
use crate::stores::AssignmentBook;

#[derive(Clone, PartialEq)]
pub struct UseAssignmentsHandle {
    pub book: UseStateHandle<AssignmentBook>,
    pub create: Callback<NewAssignment>,
    /// (assignment id, student, attachment file name)
    pub submit: Callback<(i64, String, Option<String>)>,
    /// (assignment id, submission id, points)
    pub grade: Callback<(i64, i64, u32)>,
}

/// Assignment list with nested submissions: admins create and grade,
/// students turn in.
#[hook]
pub fn use_assignments() -> UseAssignmentsHandle {
    let toast = use_toast();
    let book = use_state(AssignmentBook::seeded);

    let create = {
        let book = book.clone();
        let toast = toast.clone();
        Callback::from(move |draft: NewAssignment| {
            let mut next = (*book).clone();
            match next.add(draft) {
                Ok(assignment) => {
                    toast.toast(
                        "Assignment Created",
                        &format!("\"{}\" has been added.", assignment.title),
                    );
                    book.set(next);
                }
                Err(msg) => {
                    toast.toast_destructive("Invalid Assignment", &msg);
                }
            }
        })
    };

    let submit = {
        let book = book.clone();
        let toast = toast.clone();
        Callback::from(
            move |(assignment_id, student, attachment): (i64, String, Option<String>)| {
                let today = chrono::Local::now().date_naive();
                let mut next = (*book).clone();
                match next.submit(assignment_id, &student, attachment, today) {
                    Ok(_) => {
                        toast.toast(
                            "Assignment Submitted!",
                            "Your assignment has been successfully submitted.",
                        );
                        book.set(next);
                    }
                    Err(msg) => {
                        toast.toast_destructive("Submission Failed", &msg);
                    }
                }
            },
        )
    };

    let grade = {
        let book = book.clone();
        Callback::from(move |(assignment_id, submission_id, points): (i64, i64, u32)| {
            let mut next = (*book).clone();
            if next.grade(assignment_id, submission_id, points) {
                book.set(next);
            } else {
                log::warn!(
                    "⚠️ Ignoring grade for unknown submission {}/{}",
                    assignment_id,
                    submission_id
                );
            }
        })
    };

    UseAssignmentsHandle {
        book,
        create,
        submit,
        grade,
    }
}
