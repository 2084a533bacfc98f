use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_courses;
use crate::models::{CourseStatus, NewCourse};

/// Admin panel: searchable course cards with create / delete.
#[function_component(CourseManagement)]
pub fn course_management() -> Html {
    let courses = use_courses();
    let search_term = use_state(String::new);
    let show_create = use_state(|| false);
    let new_course = use_state(NewCourse::default);

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(true))
    };
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    let edit_field = |apply: fn(&mut NewCourse, String)| {
        let new_course = new_course.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = (*new_course).clone();
            apply(&mut draft, input.value());
            new_course.set(draft);
        })
    };

    let on_title = edit_field(|draft, value| draft.title = value);
    let on_instructor = edit_field(|draft, value| draft.instructor = value);
    let on_category = edit_field(|draft, value| draft.category = value);
    let on_duration = edit_field(|draft, value| draft.duration = value);
    let on_lessons = edit_field(|draft, value| draft.lessons = value.parse().unwrap_or(0));

    let on_create = {
        let add = courses.add.clone();
        let new_course = new_course.clone();
        let show_create = show_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = (*new_course).clone();
            let complete =
                !draft.title.trim().is_empty() && !draft.instructor.trim().is_empty();
            add.emit(draft);
            if complete {
                show_create.set(false);
                new_course.set(NewCourse::default());
            }
        })
    };

    let catalog = &*courses.catalog;
    let filtered = catalog.filter(&search_term);

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{"Course Management"}</h1>
                    <p class="text-gray-600 mt-2">{"Create and manage learning courses"}</p>
                </div>
                <button class="btn-primary" onclick={open_create}>{"➕ Create New Course"}</button>
            </div>

            if *show_create {
                <div class="card mb-6">
                    <div class="card-header"><h2 class="card-title">{"Create New Course"}</h2></div>
                    <div class="card-content">
                        <form class="grid grid-cols-1 md:grid-cols-2 gap-4" onsubmit={on_create}>
                            <div>
                                <label>{"Title"}</label>
                                <input value={(*new_course).title.clone()} oninput={on_title} />
                            </div>
                            <div>
                                <label>{"Instructor"}</label>
                                <input value={(*new_course).instructor.clone()} oninput={on_instructor} />
                            </div>
                            <div>
                                <label>{"Category"}</label>
                                <input value={(*new_course).category.clone()} oninput={on_category} />
                            </div>
                            <div>
                                <label>{"Duration"}</label>
                                <input placeholder="e.g. 6 weeks" value={(*new_course).duration.clone()} oninput={on_duration} />
                            </div>
                            <div>
                                <label>{"Lessons"}</label>
                                <input type="number" min="0" value={(*new_course).lessons.to_string()} oninput={on_lessons} />
                            </div>
                            <div class="col-span-2 flex gap-4 mt-4">
                                <button type="submit" class="btn-primary">{"Create"}</button>
                                <button type="button" class="btn-outline" onclick={close_create}>{"Cancel"}</button>
                            </div>
                        </form>
                    </div>
                </div>
            }

            <div class="card">
                <div class="card-header">
                    <div class="flex items-center justify-between">
                        <h2 class="card-title">{ format!("📚 All Courses ({})", filtered.len()) }</h2>
                        <input
                            class="search-input w-64"
                            placeholder="Search courses..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                </div>
                <div class="card-content grid gap-6">
                    { for filtered.iter().map(|course| {
                        let delete = {
                            let remove = courses.remove.clone();
                            let id = course.id;
                            Callback::from(move |_| remove.emit(id))
                        };
                        let status_badge = match course.status {
                            CourseStatus::Active => "badge badge-green",
                            CourseStatus::Draft => "badge badge-yellow",
                            CourseStatus::Archived => "badge badge-gray",
                        };
                        html! {
                            <div class="card course-card p-6">
                                <div class="flex items-start justify-between">
                                    <div class="flex-1">
                                        <div class="flex items-center space-x-3 mb-2">
                                            <h3 class="text-xl font-semibold text-gray-900">{ &course.title }</h3>
                                            <span class={status_badge}>{ course.status.to_string() }</span>
                                            <span class="badge badge-blue">{ &course.category }</span>
                                        </div>
                                        <p class="text-gray-600 mb-4">{ format!("Instructor: {}", course.instructor) }</p>
                                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 text-sm text-gray-600">
                                            <span>{ format!("👥 {} students enrolled", course.students) }</span>
                                            <span>{ format!("🎬 {} lessons", course.lessons) }</span>
                                            <span>{ format!("📚 {}", course.duration) }</span>
                                        </div>
                                    </div>
                                    <button class="btn-outline btn-sm text-red-600 ml-4" title="Delete" onclick={delete}>{"🗑"}</button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <div class="card p-6 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Total Courses"}</h3>
                    <p class="text-2xl font-bold text-blue-600">{ catalog.len() }</p>
                </div>
                <div class="card p-6 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Active Courses"}</h3>
                    <p class="text-2xl font-bold text-green-600">{ catalog.count_with_status(CourseStatus::Active) }</p>
                </div>
                <div class="card p-6 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Total Students"}</h3>
                    <p class="text-2xl font-bold text-purple-600">{ catalog.total_students() }</p>
                </div>
                <div class="card p-6 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Draft Courses"}</h3>
                    <p class="text-2xl font-bold text-orange-600">{ catalog.count_with_status(CourseStatus::Draft) }</p>
                </div>
            </div>
        </div>
    }
}
