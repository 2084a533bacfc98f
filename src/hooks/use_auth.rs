use yew::prelude::*;

use crate::hooks::use_toast;
use crate::models::Session;
use crate::services::auth_service;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_SESSION};

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True while restoring the saved session or while a sign-in/out call is
    /// in flight. The route gate shows a spinner instead of redirecting.
    pub loading: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub sign_in: Callback<(String, String)>,
    pub sign_up: Callback<(String, String, String)>,
    pub sign_out: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let toast = use_toast();
    let state = use_state(|| AuthState {
        session: None,
        loading: true,
    });

    // Restore a saved session on mount.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            match load_from_storage::<Session>(STORAGE_KEY_SESSION) {
                Some(session) => {
                    log::info!("✅ Restored session for {}", session.email);
                    state.set(AuthState {
                        session: Some(session),
                        loading: false,
                    });
                }
                None => {
                    state.set(AuthState {
                        session: None,
                        loading: false,
                    });
                }
            }
            || ()
        });
    }

    let sign_in = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            let toast = toast.clone();
            state.set(AuthState {
                session: (*state).session.clone(),
                loading: true,
            });
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::sign_in(&email, &password).await {
                    Ok(session) => {
                        log::info!("✅ Signed in: {}", session.email);
                        if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, &session) {
                            log::warn!("⚠️ Could not persist session: {}", e);
                        }
                        toast.toast("Welcome back!", "You have been successfully logged in.");
                        state.set(AuthState {
                            session: Some(session),
                            loading: false,
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Sign in failed: {}", e);
                        toast.toast_destructive("Login Failed", &e);
                        state.set(AuthState {
                            session: None,
                            loading: false,
                        });
                    }
                }
            });
        })
    };

    let sign_up = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |(email, password, full_name): (String, String, String)| {
            let state = state.clone();
            let toast = toast.clone();
            state.set(AuthState {
                session: (*state).session.clone(),
                loading: true,
            });
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::sign_up(&email, &password, &full_name).await {
                    Ok(()) => {
                        log::info!("✅ Account created for {}", email);
                        toast.toast(
                            "Account Created!",
                            "Please check your email to verify your account.",
                        );
                    }
                    Err(e) => {
                        log::error!("❌ Sign up failed: {}", e);
                        toast.toast_destructive("Signup Failed", &e);
                    }
                }
                state.set(AuthState {
                    session: (*state).session.clone(),
                    loading: false,
                });
            });
        })
    };

    let sign_out = {
        let state = state.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let Some(session) = (*state).session.clone() else {
                return;
            };
            let state = state.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = auth_service::sign_out(&session.access_token).await {
                    log::error!("❌ Sign out failed: {}", e);
                    toast.toast_destructive(
                        "Error signing out",
                        "There was a problem signing out. Please try again.",
                    );
                    return;
                }

                let _ = remove_from_storage(STORAGE_KEY_SESSION);
                log::info!("👋 Signed out: {}", session.email);
                toast.toast(
                    "Signed out successfully",
                    "You have been logged out of your account.",
                );
                state.set(AuthState {
                    session: None,
                    loading: false,
                });
            });
        })
    };

    UseAuthHandle {
        state,
        sign_in,
        sign_up,
        sign_out,
    }
}
