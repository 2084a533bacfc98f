use yew::prelude::*;

use crate::hooks::use_session_context;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_menu_click: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let handle = use_session_context();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    // The guard redirects to /auth once the session is gone; the header only
    // has to ask for the sign-out.
    let on_sign_out = {
        let sign_out = handle.sign_out.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            menu_open.set(false);
            sign_out.emit(());
        })
    };

    let email = handle
        .session
        .as_ref()
        .map(|s| s.email.clone())
        .unwrap_or_else(|| "User Account".to_string());

    html! {
        <header class="bg-white border-b border-gray-200 px-6 py-4">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-4">
                    <button class="menu-button lg:hidden" onclick={props.on_menu_click.reform(|_| ())}>{"☰"}</button>
                    <h2 class="text-xl font-semibold text-gray-800">{"Learning Management System"}</h2>
                </div>

                <div class="flex items-center space-x-4">
                    <button class="icon-button">{"🔔"}</button>

                    <div class="relative">
                        <button class="icon-button" onclick={toggle_menu}>{"👤"}</button>
                        if *menu_open {
                            <div class="dropdown absolute right-0 mt-2 w-56 bg-white rounded-lg shadow-lg border border-gray-100 py-1">
                                <p class="px-4 py-2 text-sm font-medium text-gray-900 border-b border-gray-100">{ email }</p>
                                <button
                                    class="w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-50"
                                    onclick={on_sign_out}
                                >
                                    {"Sign Out"}
                                </button>
                            </div>
                        }
                    </div>
                </div>
            </div>
        </header>
    }
}
