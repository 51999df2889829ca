//! Token storage utilities using browser localStorage/sessionStorage

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "finity_access_token";
const REFRESH_TOKEN_KEY: &str = "finity_refresh_token";
const TOKEN_EXPIRY_KEY: &str = "finity_token_expiry";
const USER_INFO_KEY: &str = "finity_user_info";
const CODE_VERIFIER_KEY: &str = "finity_code_verifier";
const STATE_KEY: &str = "finity_oauth_state";

/// Consider a token expired when less than 5 minutes remain
const EXPIRY_BUFFER_MS: u64 = 5 * 60 * 1000;

/// User information from the OIDC userinfo endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub preferred_username: Option<String>,
}

impl UserInfo {
    /// Short handle shown in the chrome next to the sign-out affordance
    pub fn display_handle(&self) -> &str {
        self.preferred_username
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.sub)
    }
}

/// Store access token in localStorage
pub fn store_access_token(token: &str) {
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Store refresh token in localStorage
pub fn store_refresh_token(token: &str) {
    let _ = LocalStorage::set(REFRESH_TOKEN_KEY, token);
}

/// Get refresh token from localStorage
pub fn get_refresh_token() -> Option<String> {
    LocalStorage::get(REFRESH_TOKEN_KEY).ok()
}

/// Store token expiry timestamp (epoch milliseconds)
pub fn store_token_expiry(expiry_ms: u64) {
    let _ = LocalStorage::set(TOKEN_EXPIRY_KEY, expiry_ms.to_string());
}

/// Get token expiry timestamp
pub fn get_token_expiry() -> Option<u64> {
    LocalStorage::get::<String>(TOKEN_EXPIRY_KEY)
        .ok()
        .and_then(|s| s.parse().ok())
}

/// Store user info
pub fn store_user_info(user_info: &UserInfo) {
    let _ = LocalStorage::set(USER_INFO_KEY, user_info);
}

/// Get stored user info
pub fn get_user_info() -> Option<UserInfo> {
    LocalStorage::get(USER_INFO_KEY).ok()
}

/// Clear all auth state from storage
pub fn clear_tokens() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(REFRESH_TOKEN_KEY);
    LocalStorage::delete(TOKEN_EXPIRY_KEY);
    LocalStorage::delete(USER_INFO_KEY);
}

/// Store PKCE code verifier in sessionStorage (temporary)
pub fn store_code_verifier(verifier: &str) {
    let _ = SessionStorage::set(CODE_VERIFIER_KEY, verifier);
}

/// Get and remove PKCE code verifier from sessionStorage
pub fn take_code_verifier() -> Option<String> {
    let verifier = SessionStorage::get(CODE_VERIFIER_KEY).ok();
    SessionStorage::delete(CODE_VERIFIER_KEY);
    verifier
}

/// Store OAuth state in sessionStorage (temporary)
pub fn store_oauth_state(state: &str) {
    let _ = SessionStorage::set(STATE_KEY, state);
}

/// Get and remove OAuth state from sessionStorage
pub fn take_oauth_state() -> Option<String> {
    let state = SessionStorage::get(STATE_KEY).ok();
    SessionStorage::delete(STATE_KEY);
    state
}

/// Check if the user is signed in (has a valid non-expired token)
pub fn is_authenticated() -> bool {
    let token = get_access_token();
    let expiry = get_token_expiry();

    match (token, expiry) {
        (Some(_), Some(exp)) => token_is_fresh(exp, js_sys::Date::now() as u64),
        _ => false,
    }
}

/// Expiry check with the safety buffer applied
fn token_is_fresh(expiry_ms: u64, now_ms: u64) -> bool {
    now_ms < expiry_ms.saturating_sub(EXPIRY_BUFFER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_within_buffer_counts_as_expired() {
        let now = 1_000_000_000;
        // expires in 4 minutes: inside the 5 minute buffer
        assert!(!token_is_fresh(now + 4 * 60 * 1000, now));
        // expires in 6 minutes: still fresh
        assert!(token_is_fresh(now + 6 * 60 * 1000, now));
    }

    #[test]
    fn expiry_in_the_past_never_underflows() {
        assert!(!token_is_fresh(0, 1));
        assert!(!token_is_fresh(1000, 1000));
    }

    #[test]
    fn display_handle_prefers_username() {
        let user: UserInfo = serde_json::from_str(
            r#"{
                "sub": "usr_9f2c",
                "email": "ada@example.com",
                "name": "Ada Lovelace",
                "preferred_username": "ada"
            }"#,
        )
        .unwrap();
        assert_eq!(user.display_handle(), "ada");
    }

    #[test]
    fn display_handle_falls_back_to_subject() {
        let user = UserInfo {
            sub: "usr_9f2c".to_string(),
            email: None,
            name: None,
            preferred_username: None,
        };
        assert_eq!(user.display_handle(), "usr_9f2c");
    }
}
