//! Session check exposed to views as an `AuthState` context.

use yew::prelude::*;
use storefront_common::{AuthGate, AuthState, AuthUser};
use crate::api_client::session::get_session;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::hooks::FetchState;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Checks the session once on mount and provides the result to its children.
/// Signed-out visitors are sent to the configured login page.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let (session, _) = use_fetch_with_refetch(get_session);
    let state = session_to_auth(&session);

    {
        let denied = matches!(state.gate(), AuthGate::Denied);
        use_effect_with(denied, move |denied| {
            if *denied {
                redirect_to_login();
            }
            || ()
        });
    }

    html! {
        <ContextProvider<AuthState> context={state}>
            {props.children.clone()}
        </ContextProvider<AuthState>>
    }
}

/// Current auth state. Without an `AuthProvider` above, nobody is signed in.
#[hook]
pub fn use_auth() -> AuthState {
    use_context::<AuthState>().unwrap_or_else(|| {
        log::warn!("use_auth called outside AuthProvider");
        AuthState::signed_out()
    })
}

fn session_to_auth(session: &FetchState<Option<AuthUser>>) -> AuthState {
    match session {
        FetchState::NotStarted | FetchState::Loading => AuthState::checking(),
        FetchState::Success(Some(user)) => AuthState::signed_in(user.clone()),
        FetchState::Success(None) => AuthState::signed_out(),
        FetchState::Error(err) => {
            log::warn!("Treating failed session check as signed out: {}", err);
            AuthState::signed_out()
        }
    }
}

fn redirect_to_login() {
    let login_path = settings::get_settings().login_path;
    log::info!("No active session, redirecting to {}", login_path);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&login_path) {
            log::error!("Redirect to {} failed: {:?}", login_path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AuthUser {
        AuthUser {
            id: "u-1".to_string(),
            email: "admin@example.com".to_string(),
            name: None,
        }
    }

    #[test]
    fn test_session_to_auth() {
        assert_eq!(session_to_auth(&FetchState::Loading), AuthState::checking());
        assert_eq!(session_to_auth(&FetchState::NotStarted), AuthState::checking());
        assert_eq!(session_to_auth(&FetchState::Success(None)), AuthState::signed_out());
        assert_eq!(
            session_to_auth(&FetchState::Success(Some(admin()))),
            AuthState::signed_in(admin())
        );
        assert_eq!(
            session_to_auth(&FetchState::Error("HTTP error: 401".to_string())),
            AuthState::signed_out()
        );
    }
}
