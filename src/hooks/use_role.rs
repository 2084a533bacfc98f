use yew::prelude::*;

use crate::models::{Role, Session};
use crate::services::profile_service;

/// Resolve the profile role for the current session.
///
/// Returns `(role, loading)`. While a lookup is pending the loading flag is
/// true and the role value must not be trusted. A failed lookup logs and
/// falls back to the student role instead of failing the page.
#[hook]
pub fn use_role(session: Option<Session>) -> (Role, bool) {
    // (user_id, role) of the last completed lookup. Deriving the loading
    // flag from this avoids a render where a signed-in user still looks
    // anonymous.
    let resolved = use_state(|| None::<(String, Role)>);

    {
        let resolved = resolved.clone();
        use_effect_with(
            session.as_ref().map(|s| s.user_id.clone()),
            move |user_id| {
                if let Some(user_id) = user_id.clone() {
                    wasm_bindgen_futures::spawn_local(async move {
                        let role = match profile_service::fetch_role(&user_id).await {
                            Ok(role) => {
                                log::info!("✅ Resolved role for {}: {}", user_id, role);
                                role
                            }
                            Err(e) => {
                                log::warn!("⚠️ Role lookup failed ({}), defaulting to student", e);
                                Role::Student
                            }
                        };
                        resolved.set(Some((user_id, role)));
                    });
                }
                || ()
            },
        );
    }

    match &session {
        None => (Role::Anonymous, false),
        Some(current) => match &*resolved {
            Some((user_id, role)) if *user_id == current.user_id => (*role, false),
            _ => (Role::Student, true),
        },
    }
}
