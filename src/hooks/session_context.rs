// ============================================================================
// SESSION CONTEXT - one provider for session + resolved role
// ============================================================================
// Initialized at app start, torn down on sign-out. Everything below the
// provider reads the same handle, so router gate and sidebar can never
// disagree about who is signed in.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::use_auth;
use crate::hooks::use_role::use_role;
use crate::models::{Role, Session};

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Option<Session>,
    pub role: Role,
    /// True while the saved session is being restored, an auth call is in
    /// flight, or the role lookup is pending.
    pub loading: bool,
    pub sign_in: Callback<(String, String)>,
    pub sign_up: Callback<(String, String, String)>,
    pub sign_out: Callback<()>,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let auth = use_auth();
    let (role, role_loading) = use_role(auth.state.session.clone());

    let handle = SessionHandle {
        session: auth.state.session.clone(),
        role,
        loading: auth.state.loading || role_loading,
        sign_in: auth.sign_in.clone(),
        sign_up: auth.sign_up.clone(),
        sign_out: auth.sign_out.clone(),
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[hook]
pub fn use_session_context() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session_context called outside of SessionProvider")
}
