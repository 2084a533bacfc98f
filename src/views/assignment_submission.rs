use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::{use_assignments, use_session_context, use_toast};

/// Student assignment list with file/text submission. Submissions land in
/// the same assignment book the admin side grades.
#[function_component(AssignmentSubmission)]
pub fn assignment_submission() -> Html {
    let handle = use_session_context();
    let assignments = use_assignments();
    let toast = use_toast();
    let selected_file = use_state(|| None::<String>);
    let submission_text = use_state(String::new);

    // The gate only lets authenticated users in here, so a session exists.
    let student = handle
        .session
        .as_ref()
        .map(|s| s.email.clone())
        .unwrap_or_else(|| "Student".to_string());

    let on_file_change = {
        let selected_file = selected_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let name = input.files().and_then(|files| files.get(0)).map(|f| f.name());
            selected_file.set(name);
        })
    };

    let on_text_input = {
        let submission_text = submission_text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            submission_text.set(area.value());
        })
    };

    let on_submit = {
        let submit = assignments.submit.clone();
        let selected_file = selected_file.clone();
        let submission_text = submission_text.clone();
        let toast = toast.clone();
        let student = student.clone();
        Callback::from(move |id: i64| {
            if selected_file.is_none() && submission_text.trim().is_empty() {
                toast.toast_destructive(
                    "Submission Required",
                    "Please upload a file or enter a text submission",
                );
                return;
            }

            submit.emit((id, student.clone(), (*selected_file).clone()));
            selected_file.set(None);
            submission_text.set(String::new());
        })
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{"Assignments"}</h1>
                <p class="text-gray-600 mt-2">{"Submit your coursework and track your progress"}</p>
            </div>

            <div class="grid gap-6">
                { for assignments.book.assignments().iter().map(|assignment| {
                    let own_submission = assignment.submission_by(&student);
                    let submit = {
                        let on_submit = on_submit.clone();
                        let id = assignment.id;
                        Callback::from(move |_| on_submit.emit(id))
                    };
                    html! {
                        <div class="card overflow-hidden">
                            <div class="card-header assignment-header">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h2 class="card-title text-xl text-gray-900">{ &assignment.title }</h2>
                                        <p class="text-blue-600 font-medium mt-1">{ &assignment.course }</p>
                                    </div>
                                    <div class="text-right text-sm text-gray-600">
                                        <p>{ format!("📅 Due: {}", assignment.due_date) }</p>
                                        <p>{ format!("⏱ {} points", assignment.max_points) }</p>
                                    </div>
                                </div>
                            </div>

                            <div class="card-content p-6">
                                <p class="text-gray-700 mb-6">{ &assignment.description }</p>

                                if let Some(submission) = own_submission {
                                    <div class="submitted-banner bg-green-50 border border-green-200 rounded-lg p-4">
                                        <div class="flex items-center justify-between">
                                            <span class="font-medium text-green-800">
                                                { format!("Submitted on {}", submission.submitted_at) }
                                            </span>
                                            if let Some(grade) = submission.grade {
                                                <span class="text-green-700 font-semibold">
                                                    { format!("Grade: {}/{}", grade, assignment.max_points) }
                                                </span>
                                            }
                                        </div>
                                    </div>
                                } else {
                                    <div class="space-y-4">
                                        <div class="upload-zone border-2 border-dashed border-gray-300 rounded-lg p-6 text-center">
                                            <span class="text-4xl">{"📤"}</span>
                                            <p class="text-gray-600 mt-2">{"Upload your assignment file"}</p>
                                            <input
                                                type="file"
                                                accept=".pdf,.doc,.docx,.txt,.zip"
                                                onchange={on_file_change.clone()}
                                            />
                                            if let Some(name) = &*selected_file {
                                                <p class="text-sm text-blue-600 mt-2">{ format!("📄 {}", name) }</p>
                                            }
                                        </div>

                                        <div class="space-y-2">
                                            <label class="text-sm font-medium text-gray-700">
                                                {"Text Submission (Optional)"}
                                            </label>
                                            <textarea
                                                placeholder="Enter your assignment text or additional notes..."
                                                rows="4"
                                                value={(*submission_text).clone()}
                                                oninput={on_text_input.clone()}
                                            />
                                        </div>

                                        <div class="flex justify-end space-x-3">
                                            <button class="btn-outline">{"Save as Draft"}</button>
                                            <button class="btn-primary" onclick={submit}>
                                                {"Submit Assignment"}
                                            </button>
                                        </div>
                                    </div>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
