use yew::prelude::*;

use crate::hooks::use_session_context;

struct RecentCourse {
    title: &'static str,
    instructor: &'static str,
    progress: u32,
}

struct UpcomingAssignment {
    title: &'static str,
    course: &'static str,
    due_date: &'static str,
    submitted: bool,
}

/// Student landing view: static stats plus recent courses and upcoming
/// assignments.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let handle = use_session_context();

    let recent_courses = [
        RecentCourse {
            title: "Maths for Beginners",
            instructor: "Shanti Nelapu",
            progress: 75,
        },
        RecentCourse {
            title: "Programming Fundamentals",
            instructor: "Shanti Nelapu",
            progress: 90,
        },
        RecentCourse {
            title: "Economics 101",
            instructor: "Prabhav Sharma",
            progress: 45,
        },
    ];

    let assignments = [
        UpcomingAssignment {
            title: "Maths Worksheet 1",
            course: "Maths for Beginners",
            due_date: "2025-08-15",
            submitted: false,
        },
        UpcomingAssignment {
            title: "Economics Essay",
            course: "Economics 101",
            due_date: "2025-08-16",
            submitted: true,
        },
    ];

    let stats = [
        ("Total Courses", "12", "📚", "stat-blue"),
        ("Completed", "8", "📈", "stat-green"),
        ("Assignments", "5", "📝", "stat-purple"),
        ("Hours Studied", "124", "📅", "stat-orange"),
    ];

    let greeting = handle
        .session
        .as_ref()
        .map(|s| format!("Welcome back, {}!", s.email))
        .unwrap_or_else(|| "Welcome back!".to_string());

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{ greeting }</h1>
                <p class="text-gray-600 mt-2">{"Continue your learning journey"}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                { for stats.iter().map(|(title, value, icon, color)| html! {
                    <div class={classes!("card", "stat-card", *color, "p-6")}>
                        <div class="flex items-center justify-between">
                            <div>
                                <p class="stat-title">{ *title }</p>
                                <p class="text-2xl font-bold">{ *value }</p>
                            </div>
                            <span class="text-3xl">{ *icon }</span>
                        </div>
                    </div>
                }) }
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card">
                    <div class="card-header"><h2 class="card-title">{"Recent Courses"}</h2></div>
                    <div class="card-content space-y-4">
                        { for recent_courses.iter().map(|course| html! {
                            <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
                                <div class="flex-1">
                                    <h3 class="font-semibold text-gray-900">{ course.title }</h3>
                                    <p class="text-sm text-gray-600">{ format!("Instructor: {}", course.instructor) }</p>
                                    <div class="mt-2">
                                        <div class="flex items-center justify-between text-sm">
                                            <span>{"Progress"}</span>
                                            <span>{ format!("{}%", course.progress) }</span>
                                        </div>
                                        <div class="progress mt-1">
                                            <div class="progress-bar" style={format!("width: {}%", course.progress)} />
                                        </div>
                                    </div>
                                </div>
                                <button class="btn-outline btn-sm ml-4">{"Continue"}</button>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="card">
                    <div class="card-header"><h2 class="card-title">{"Upcoming Assignments"}</h2></div>
                    <div class="card-content space-y-4">
                        { for assignments.iter().map(|assignment| html! {
                            <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
                                <div>
                                    <h3 class="font-semibold text-gray-900">{ assignment.title }</h3>
                                    <p class="text-sm text-gray-600">{ assignment.course }</p>
                                    <p class="text-sm text-gray-500">{ format!("Due: {}", assignment.due_date) }</p>
                                </div>
                                <span class={classes!("badge", if assignment.submitted { "badge-green" } else { "badge-yellow" })}>
                                    { if assignment.submitted { "submitted" } else { "pending" } }
                                </span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}
