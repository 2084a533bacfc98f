use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::hooks::use_session_context;
use crate::routes::{access_for, Access, Route};

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub route: Route,
    pub children: Children,
}

/// Route gate. Applies the single authorization policy to the target route:
/// unauthenticated visitors go to sign-in, non-admins leaving their area go
/// back to the dashboard, everyone else gets the page inside the app chrome.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let handle = use_session_context();

    if handle.loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50">
                <div class="spinner" aria-label="Loading" />
            </div>
        };
    }

    match access_for(handle.role, &props.route) {
        Access::Granted => html! {
            <Layout>{ props.children.clone() }</Layout>
        },
        Access::RequiresSignIn => html! {
            <Redirect<Route> to={Route::Auth} />
        },
        Access::Forbidden => html! {
            <Redirect<Route> to={Route::Dashboard} />
        },
    }
}
