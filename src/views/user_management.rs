use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_users;
use crate::models::{AccountRole, NewUser, UserStatus};

/// Admin panel: searchable user table with add / delete / status toggle.
#[function_component(UserManagement)]
pub fn user_management() -> Html {
    let users = use_users();
    let search_term = use_state(String::new);
    let show_add_modal = use_state(|| false);
    let new_user = use_state(NewUser::default);

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let open_modal = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_| show_add_modal.set(true))
    };
    let close_modal = {
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_| show_add_modal.set(false))
    };

    let on_name = {
        let new_user = new_user.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = (*new_user).clone();
            draft.name = input.value();
            new_user.set(draft);
        })
    };
    let on_email = {
        let new_user = new_user.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = (*new_user).clone();
            draft.email = input.value();
            new_user.set(draft);
        })
    };
    let on_role = {
        let new_user = new_user.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut draft = (*new_user).clone();
            draft.role = AccountRole::parse(&select.value());
            new_user.set(draft);
        })
    };
    let on_status = {
        let new_user = new_user.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut draft = (*new_user).clone();
            draft.status = if select.value() == "inactive" {
                UserStatus::Inactive
            } else {
                UserStatus::Active
            };
            new_user.set(draft);
        })
    };
    let on_courses = {
        let new_user = new_user.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = (*new_user).clone();
            draft.courses = input.value().parse().unwrap_or(0);
            new_user.set(draft);
        })
    };

    let on_add = {
        let users_add = users.add.clone();
        let new_user = new_user.clone();
        let show_add_modal = show_add_modal.clone();
        Callback::from(move |_| {
            let draft = (*new_user).clone();
            // Validation feedback comes from the hook; only reset on a
            // complete draft.
            let complete = !draft.name.trim().is_empty() && !draft.email.trim().is_empty();
            users_add.emit(draft);
            if complete {
                show_add_modal.set(false);
                new_user.set(NewUser::default());
            }
        })
    };

    let directory = &*users.directory;
    let filtered = directory.filter(&search_term);

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{"User Management"}</h1>
                    <p class="text-gray-600 mt-2">{"Manage students, instructors, and administrators"}</p>
                </div>
                <button class="btn-primary" onclick={open_modal}>{"➕ Add New User"}</button>
            </div>

            if *show_add_modal {
                <div class="modal-backdrop fixed inset-0 z-50 flex items-center justify-center">
                    <div class="bg-white rounded-lg shadow-lg p-8 w-full max-w-md">
                        <h2 class="text-xl font-bold mb-4">{"Add New User"}</h2>
                        <div class="space-y-3">
                            <input placeholder="Name" value={(*new_user).name.clone()} oninput={on_name} />
                            <input placeholder="Email" value={(*new_user).email.clone()} oninput={on_email} />
                            <select class="w-full border rounded px-3 py-2" onchange={on_role}>
                                <option value="student" selected={(*new_user).role == AccountRole::Student}>{"Student"}</option>
                                <option value="instructor" selected={(*new_user).role == AccountRole::Instructor}>{"Instructor"}</option>
                                <option value="admin" selected={(*new_user).role == AccountRole::Admin}>{"Admin"}</option>
                            </select>
                            <select class="w-full border rounded px-3 py-2" onchange={on_status}>
                                <option value="active" selected={(*new_user).status == UserStatus::Active}>{"Active"}</option>
                                <option value="inactive" selected={(*new_user).status == UserStatus::Inactive}>{"Inactive"}</option>
                            </select>
                            <input
                                type="number"
                                placeholder="Courses"
                                value={(*new_user).courses.to_string()}
                                oninput={on_courses}
                            />
                        </div>
                        <div class="flex justify-end space-x-2 mt-6">
                            <button class="btn-outline" onclick={close_modal}>{"Cancel"}</button>
                            <button class="btn-primary" onclick={on_add}>{"Add User"}</button>
                        </div>
                    </div>
                </div>
            }

            <div class="card">
                <div class="card-header">
                    <div class="flex items-center justify-between">
                        <h2 class="card-title">{ format!("👥 All Users ({})", filtered.len()) }</h2>
                        <input
                            class="search-input w-64"
                            placeholder="Search users..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                </div>
                <div class="card-content overflow-x-auto">
                    <table class="w-full">
                        <thead>
                            <tr class="border-b border-gray-200">
                                <th class="text-left py-3 px-4">{"User"}</th>
                                <th class="text-left py-3 px-4">{"Role"}</th>
                                <th class="text-left py-3 px-4">{"Status"}</th>
                                <th class="text-left py-3 px-4">{"Courses"}</th>
                                <th class="text-left py-3 px-4">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for filtered.iter().map(|user| {
                                let toggle = {
                                    let toggle_status = users.toggle_status.clone();
                                    let id = user.id;
                                    Callback::from(move |_| toggle_status.emit(id))
                                };
                                let delete = {
                                    let remove = users.remove.clone();
                                    let id = user.id;
                                    Callback::from(move |_| remove.emit(id))
                                };
                                let role_badge = match user.role {
                                    AccountRole::Admin => "badge badge-red",
                                    AccountRole::Instructor => "badge badge-blue",
                                    AccountRole::Student => "badge badge-green",
                                };
                                let status_badge = match user.status {
                                    UserStatus::Active => "badge badge-green",
                                    UserStatus::Inactive => "badge badge-gray",
                                };
                                html! {
                                    <tr class="border-b border-gray-100 hover:bg-gray-50">
                                        <td class="py-4 px-4">
                                            <div class="font-medium text-gray-900">{ &user.name }</div>
                                            <div class="text-sm text-gray-600">{ &user.email }</div>
                                        </td>
                                        <td class="py-4 px-4"><span class={role_badge}>{ user.role.to_string() }</span></td>
                                        <td class="py-4 px-4"><span class={status_badge}>{ user.status.to_string() }</span></td>
                                        <td class="py-4 px-4">{ user.courses }</td>
                                        <td class="py-4 px-4">
                                            <div class="flex items-center space-x-2">
                                                <button class="btn-outline btn-sm" title="Toggle status" onclick={toggle}>{"✔"}</button>
                                                <button class="btn-outline btn-sm text-red-600" title="Delete" onclick={delete}>{"🗑"}</button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="card p-6 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Total Students"}</h3>
                    <p class="text-2xl font-bold text-blue-600">{ directory.count_with_role(AccountRole::Student) }</p>
                </div>
                <div class="card p-6 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Instructors"}</h3>
                    <p class="text-2xl font-bold text-green-600">{ directory.count_with_role(AccountRole::Instructor) }</p>
                </div>
                <div class="card p-6 text-center">
                    <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Active Users"}</h3>
                    <p class="text-2xl font-bold text-purple-600">{ directory.active_count() }</p>
                </div>
            </div>
        </div>
    }
}
