use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::views::AssignmentAdmin;

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Overview,
    Assignments,
}

/// Admin landing page: platform stats, quick links into the management
/// panels, and an embedded assignment administration tab.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let tab = use_state(|| AdminTab::Overview);

    let stats = [
        ("Total Users", "1,234", "👥", "+12% from last month"),
        ("Active Courses", "45", "📚", "+3 new this week"),
        ("Assignments", "128", "📝", "23 awaiting grading"),
        ("Completion Rate", "87%", "📊", "+5% from last month"),
    ];

    let select_tab = |next: AdminTab| {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(next))
    };

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{"Admin Dashboard"}</h1>
                <p class="text-gray-600 mt-2">{"Monitor and manage your learning platform"}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                { for stats.iter().map(|(title, value, icon, hint)| html! {
                    <div class="card stat-card p-6">
                        <div class="flex items-center justify-between">
                            <div>
                                <p class="text-sm font-medium text-gray-600">{ *title }</p>
                                <p class="text-2xl font-bold text-gray-900 mt-1">{ *value }</p>
                                <p class="text-xs text-gray-500 mt-1">{ *hint }</p>
                            </div>
                            <span class="text-3xl">{ *icon }</span>
                        </div>
                    </div>
                }) }
            </div>

            <div class="flex space-x-2 border-b border-gray-200">
                <button
                    class={classes!(
                        "tab-button",
                        (*tab == AdminTab::Overview).then_some("tab-button-active")
                    )}
                    onclick={select_tab(AdminTab::Overview)}
                >
                    {"Overview"}
                </button>
                <button
                    class={classes!(
                        "tab-button",
                        (*tab == AdminTab::Assignments).then_some("tab-button-active")
                    )}
                    onclick={select_tab(AdminTab::Assignments)}
                >
                    {"Assignments"}
                </button>
            </div>

            {
                match *tab {
                    AdminTab::Overview => html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <Link<Route> to={Route::AdminUsers} classes="card quick-action p-8 text-center">
                                <span class="text-5xl">{"👥"}</span>
                                <h2 class="text-xl font-semibold text-gray-900 mt-4">{"Manage Users"}</h2>
                                <p class="text-gray-600 mt-2">
                                    {"Add, remove, and update students and instructors"}
                                </p>
                            </Link<Route>>
                            <Link<Route> to={Route::AdminCourses} classes="card quick-action p-8 text-center">
                                <span class="text-5xl">{"📚"}</span>
                                <h2 class="text-xl font-semibold text-gray-900 mt-4">{"Manage Courses"}</h2>
                                <p class="text-gray-600 mt-2">
                                    {"Create courses and keep the catalogue up to date"}
                                </p>
                            </Link<Route>>
                        </div>
                    },
                    AdminTab::Assignments => html! { <AssignmentAdmin /> },
                }
            }
        </div>
    }
}
