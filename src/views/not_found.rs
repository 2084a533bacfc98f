use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="bg-white rounded-2xl shadow p-10 text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-2">{"404 - Page Not Found"}</h1>
                <p class="text-gray-600 mb-6">{"The page you're looking for doesn't exist."}</p>
                <Link<Route> to={Route::Dashboard} classes="btn-primary">
                    {"Back to Dashboard"}
                </Link<Route>>
            </div>
        </div>
    }
}
