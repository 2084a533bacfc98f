use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_assignments;
use crate::models::NewAssignment;

/// Assignment administration: create assignments and grade submissions.
/// Embedded in the admin dashboard rather than routed on its own.
#[function_component(AssignmentAdmin)]
pub fn assignment_admin() -> Html {
    let assignments = use_assignments();
    let show_create = use_state(|| false);
    let new_assignment = use_state(NewAssignment::default);

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(true))
    };
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    let edit_field = |apply: fn(&mut NewAssignment, String)| {
        let new_assignment = new_assignment.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = (*new_assignment).clone();
            apply(&mut draft, input.value());
            new_assignment.set(draft);
        })
    };

    let on_title = edit_field(|draft, value| draft.title = value);
    let on_course = edit_field(|draft, value| draft.course = value);
    let on_description = edit_field(|draft, value| draft.description = value);
    let on_due_date = edit_field(|draft, value| draft.due_date = value);
    let on_max_points = edit_field(|draft, value| draft.max_points = value.parse().unwrap_or(0));

    let on_create = {
        let create = assignments.create.clone();
        let new_assignment = new_assignment.clone();
        let show_create = show_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = (*new_assignment).clone();
            let complete = !draft.title.trim().is_empty()
                && !draft.course.trim().is_empty()
                && !draft.due_date.trim().is_empty();
            create.emit(draft);
            if complete {
                show_create.set(false);
                new_assignment.set(NewAssignment::default());
            }
        })
    };

    html! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Assignment Management"}</h1>
                <button class="btn-primary" onclick={open_create}>{"➕ Create Assignment"}</button>
            </div>

            if *show_create {
                <div class="card mb-6">
                    <div class="card-header"><h2 class="card-title">{"Create New Assignment"}</h2></div>
                    <div class="card-content">
                        <form class="grid grid-cols-1 md:grid-cols-2 gap-4" onsubmit={on_create}>
                            <div>
                                <label>{"Title"}</label>
                                <input value={(*new_assignment).title.clone()} oninput={on_title} />
                            </div>
                            <div>
                                <label>{"Course"}</label>
                                <input value={(*new_assignment).course.clone()} oninput={on_course} />
                            </div>
                            <div class="col-span-2">
                                <label>{"Description"}</label>
                                <input
                                    placeholder="What should students hand in?"
                                    value={(*new_assignment).description.clone()}
                                    oninput={on_description}
                                />
                            </div>
                            <div>
                                <label>{"Due Date"}</label>
                                <input type="date" value={(*new_assignment).due_date.clone()} oninput={on_due_date} />
                            </div>
                            <div>
                                <label>{"Max Points"}</label>
                                <input
                                    type="number"
                                    min="1"
                                    value={(*new_assignment).max_points.to_string()}
                                    oninput={on_max_points}
                                />
                            </div>
                            <div class="col-span-2 flex gap-4 mt-4">
                                <button type="submit" class="btn-primary">{"Create"}</button>
                                <button type="button" class="btn-outline" onclick={close_create}>{"Cancel"}</button>
                            </div>
                        </form>
                    </div>
                </div>
            }

            <div class="space-y-6">
                { for assignments.book.assignments().iter().map(|assignment| html! {
                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">{ &assignment.title }</h2>
                            <div class="text-sm text-gray-500">
                                { format!(
                                    "Course: {} | Due: {} | Max Points: {}",
                                    assignment.course, assignment.due_date, assignment.max_points
                                ) }
                            </div>
                            if !assignment.description.is_empty() {
                                <p class="text-sm text-gray-600 mt-1">{ &assignment.description }</p>
                            }
                        </div>
                        <div class="card-content">
                            <h4 class="font-semibold mb-2">{"Submissions"}</h4>
                            <div class="overflow-x-auto">
                                <table class="min-w-full border text-sm">
                                    <thead>
                                        <tr class="bg-gray-50">
                                            <th class="p-2 border">{"Student"}</th>
                                            <th class="p-2 border">{"Submitted At"}</th>
                                            <th class="p-2 border">{"Attachment"}</th>
                                            <th class="p-2 border">{"Grade"}</th>
                                            <th class="p-2 border">{"Status"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        if assignment.submissions.is_empty() {
                                            <tr>
                                                <td colspan="5" class="text-center p-4 text-gray-400">
                                                    {"No submissions yet."}
                                                </td>
                                            </tr>
                                        }
                                        { for assignment.submissions.iter().map(|submission| {
                                            let on_grade = {
                                                let grade = assignments.grade.clone();
                                                let assignment_id = assignment.id;
                                                let submission_id = submission.id;
                                                Callback::from(move |e: Event| {
                                                    let input: HtmlInputElement = e.target_unchecked_into();
                                                    if let Ok(points) = input.value().parse::<u32>() {
                                                        grade.emit((assignment_id, submission_id, points));
                                                    }
                                                })
                                            };
                                            html! {
                                                <tr>
                                                    <td class="p-2 border">{ &submission.student }</td>
                                                    <td class="p-2 border">{ submission.submitted_at.to_string() }</td>
                                                    <td class="p-2 border">
                                                        { match &submission.attachment {
                                                            Some(name) => format!("📄 {}", name),
                                                            None => "Text only".to_string(),
                                                        } }
                                                    </td>
                                                    <td class="p-2 border">
                                                        <input
                                                            type="number"
                                                            class="w-20"
                                                            min="0"
                                                            max={assignment.max_points.to_string()}
                                                            value={submission.grade.map(|g| g.to_string()).unwrap_or_default()}
                                                            onchange={on_grade}
                                                        />
                                                    </td>
                                                    <td class="p-2 border">
                                                        if submission.is_graded() {
                                                            <span class="text-green-600">{"✔ Graded"}</span>
                                                        } else {
                                                            <span class="text-gray-400">{"✖ Not Graded"}</span>
                                                        }
                                                    </td>
                                                </tr>
                                            }
                                        }) }
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
