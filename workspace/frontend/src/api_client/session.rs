use storefront_common::{AuthUser, SessionResponse};
use crate::api_client;

/// Ask the backend who is signed in
pub async fn get_session() -> Result<Option<AuthUser>, String> {
    log::trace!("Checking session");
    let result = api_client::get::<SessionResponse>("/auth/session").await;
    match &result {
        Ok(SessionResponse { user: Some(user) }) => log::info!("Session active for {}", user.email),
        Ok(SessionResponse { user: None }) => log::info!("No active session"),
        Err(e) => log::error!("Session check failed: {}", e),
    }
    result.map(|session| session.user)
}
