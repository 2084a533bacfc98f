use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_session_context, use_toast};
use crate::routes::Route;
use crate::utils::APP_NAME;

/// Landing + sign-in/sign-up screen. Redirects home as soon as a session
/// exists.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let handle = use_session_context();
    let toast = use_toast();
    let navigator = use_navigator();

    let is_login = use_state(|| true);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let full_name = use_state(String::new);

    // Already authenticated? Straight to the dashboard.
    {
        let navigator = navigator.clone();
        use_effect_with(handle.session.is_some(), move |signed_in| {
            if *signed_in {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };
    let on_full_name = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };

    let on_submit = {
        let is_login = is_login.clone();
        let email = email.clone();
        let password = password.clone();
        let full_name = full_name.clone();
        let toast = toast.clone();
        let sign_in = handle.sign_in.clone();
        let sign_up = handle.sign_up.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = (*email).trim().to_string();
            let password_value = (*password).clone();
            let name_value = (*full_name).trim().to_string();

            if email_value.is_empty()
                || password_value.is_empty()
                || (!*is_login && name_value.is_empty())
            {
                toast.toast_destructive("Missing Fields", "Please fill all required fields.");
                return;
            }

            if *is_login {
                sign_in.emit((email_value, password_value));
            } else {
                sign_up.emit((email_value, password_value, name_value));
            }
        })
    };

    let switch_to_signup = {
        let is_login = is_login.clone();
        Callback::from(move |_| is_login.set(false))
    };
    let toggle_mode = {
        let is_login = is_login.clone();
        Callback::from(move |_| is_login.set(!*is_login))
    };

    let (heading, subheading, submit_label) = if *is_login {
        (
            "Welcome Back",
            "Sign in to access your learning dashboard",
            "Sign In",
        )
    } else {
        (
            "Create Account",
            "Join our learning management system",
            "Create Account",
        )
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center px-4">
            <div class="w-full max-w-8xl mx-auto flex items-center justify-between py-7 px-9 bg-white rounded-2xl shadow mb-8">
                <span class="font-bold text-xl text-gray-700 tracking-tight">{ APP_NAME }</span>
                <button class="text-gray-500" onclick={switch_to_signup}>{"Sign up"}</button>
            </div>

            <div class="max-w-7xl w-full bg-white rounded-2xl shadow-xl p-10 flex flex-col md:flex-row items-center gap-16">
                <div class="flex-1 flex flex-col gap-8">
                    <div>
                        <h1 class="text-7xl font-extrabold text-gray-900 leading-tight mb-6">
                            {"LEARNING "}<br />
                            <span class="text-green-600">{"WITHOUT"}</span><br />
                            <span class="text-green-600">{"LIMITS"}</span>
                        </h1>
                        <p class="text-lg text-gray-600 mb-8">
                            {"Join our online community and learn from professionals."}
                        </p>
                        <div class="flex gap-12 text-center mb-8">
                            <div>
                                <p class="text-2xl font-bold text-green-600">{"95%"}</p>
                                <p class="text-xs text-gray-500">{"student approval"}</p>
                            </div>
                            <div>
                                <p class="text-2xl font-bold text-green-600">{"+120"}</p>
                                <p class="text-xs text-gray-500">{"online courses"}</p>
                            </div>
                            <div>
                                <p class="text-2xl font-bold text-green-600">{"+20"}</p>
                                <p class="text-xs text-gray-500">{"categories"}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="flex-1 flex flex-col items-center justify-center w-full max-w-md">
                    <div class="w-full bg-white rounded-2xl shadow-lg p-8 border border-gray-100">
                        <h2 class="text-2xl font-bold text-center mb-2">{ heading }</h2>
                        <p class="text-center text-gray-500 mb-6">{ subheading }</p>

                        <form onsubmit={on_submit} class="space-y-4">
                            if !*is_login {
                                <div class="space-y-2">
                                    <label for="fullName">{"Full Name"}</label>
                                    <input
                                        id="fullName"
                                        type="text"
                                        placeholder="Enter your full name"
                                        value={(*full_name).clone()}
                                        oninput={on_full_name}
                                    />
                                </div>
                            }
                            <div class="space-y-2">
                                <label for="email">{"Email"}</label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="Enter your email"
                                    value={(*email).clone()}
                                    oninput={on_email}
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="password">{"Password"}</label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="Enter your password"
                                    value={(*password).clone()}
                                    oninput={on_password}
                                />
                            </div>

                            <button type="submit" class="btn-primary w-full" disabled={handle.loading}>
                                { if handle.loading { "Please wait..." } else { submit_label } }
                            </button>
                        </form>

                        <button class="w-full text-center text-sm text-gray-500 mt-4" onclick={toggle_mode}>
                            { if *is_login {
                                "Don't have an account? Sign up"
                            } else {
                                "Already have an account? Sign in"
                            } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
