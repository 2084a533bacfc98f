// ============================================================================
// APP - Root component: providers + router
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastProvider;
use crate::hooks::SessionProvider;
use crate::routes::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <SessionProvider>
                    <Switch<Route> render={switch} />
                </SessionProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}
