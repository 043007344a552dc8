use serde::{Deserialize, Serialize};

/// Identity reported by the session endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Response of `GET /auth/session`. `user` is absent or null when signed out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Current identity plus whether the check is still running.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

/// What an auth-gated view may render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthGate<'a> {
    Checking,
    Denied,
    Granted(&'a AuthUser),
}

impl AuthState {
    pub fn checking() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn gate(&self) -> AuthGate<'_> {
        match (&self.user, self.loading) {
            (_, true) => AuthGate::Checking,
            (None, false) => AuthGate::Denied,
            (Some(user), false) => AuthGate::Granted(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn admin() -> AuthUser {
        AuthUser {
            id: "u-1".to_string(),
            email: "admin@example.com".to_string(),
            name: None,
        }
    }

    #[test]
    fn test_gate_phases() {
        assert_eq!(AuthState::checking().gate(), AuthGate::Checking);
        assert_eq!(AuthState::signed_out().gate(), AuthGate::Denied);

        let state = AuthState::signed_in(admin());
        assert_eq!(state.gate(), AuthGate::Granted(&admin()));
    }

    #[test]
    fn test_loading_wins_over_stale_user() {
        let state = AuthState {
            user: Some(admin()),
            loading: true,
        };
        assert_eq!(state.gate(), AuthGate::Checking);
    }

    #[test]
    fn test_session_response() {
        let signed_out: SessionResponse = serde_json::from_value(json!({"user": null})).unwrap();
        assert_eq!(signed_out.user, None);

        let empty: SessionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.user, None);

        let signed_in: SessionResponse = serde_json::from_value(json!({
            "user": {"id": "u-1", "email": "admin@example.com", "name": "Ada"}
        }))
        .unwrap();
        assert_eq!(signed_in.user.as_ref().map(|u| u.display_name()), Some("Ada"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(admin().display_name(), "admin@example.com");
    }
}
