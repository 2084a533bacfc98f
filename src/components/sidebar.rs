use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::navigation::links_for;
use crate::routes::Route;
use crate::utils::APP_NAME;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub is_open: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let handle = use_session_context();
    let current = use_route::<Route>();

    let links = links_for(handle.role);

    let width_class = if props.is_open { "w-64" } else { "w-16" };

    let profile = handle.session.as_ref().map(|session| {
        let initial = session
            .email
            .chars()
            .next()
            .unwrap_or('?')
            .to_ascii_uppercase();
        html! {
            <div class="p-4 border-b border-gray-100 flex items-center space-x-2">
                <div class="avatar w-8 h-8 rounded-full bg-blue-600 text-white flex items-center justify-center">
                    { initial }
                </div>
                if props.is_open {
                    <div class="flex-1">
                        <p class="text-sm font-medium text-gray-900 truncate">{ &session.email }</p>
                        <p class="text-xs text-gray-500 capitalize">{ handle.role.to_string() }</p>
                    </div>
                }
            </div>
        }
    });

    html! {
        <div class={classes!("sidebar", "flex", "flex-col", "h-screen", "bg-white", "shadow-lg", "border-r", "border-gray-200", width_class)}>
            <div class="p-4 border-b border-gray-100 flex justify-between items-center">
                <div class="flex items-center space-x-2">
                    <div class="w-8 h-8 bg-blue-600 rounded-lg flex items-center justify-center text-white">{"🎓"}</div>
                    if props.is_open {
                        <h1 class="text-xl font-bold text-gray-800">{ APP_NAME }</h1>
                    }
                </div>
                <button
                    class="sidebar-toggle"
                    onclick={props.on_toggle.reform(|_| ())}
                >
                    { if props.is_open { "◀" } else { "▶" } }
                </button>
            </div>

            { for profile }

            <nav class="flex-1 overflow-y-auto py-4">
                { for links.into_iter().map(|link| {
                    let active = current.as_ref() == Some(&link.route);
                    let mut classes = classes!(
                        "nav-link", "flex", "items-center", "px-4", "py-3", "text-gray-700"
                    );
                    if active {
                        classes.push("nav-link-active");
                    }
                    html! {
                        <Link<Route> to={link.route} classes={classes}>
                            <span class="w-5 h-5">{ link.icon }</span>
                            if props.is_open {
                                <span class="ml-3">{ link.label }</span>
                            }
                        </Link<Route>>
                    }
                }) }
            </nav>
        </div>
    }
}
