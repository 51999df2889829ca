use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::oauth::OAuthService;
use super::storage::{self, UserInfo};

/// Ambient auth state: the signed-in user handle supplied by the identity
/// provider, or `None` when signed out
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: ReadSignal<Option<UserInfo>>,
    pub set_user: WriteSignal<Option<UserInfo>>,
}

impl AuthContext {
    /// Reactive signed-in check
    pub fn is_signed_in(&self) -> bool {
        self.user.get().is_some()
    }

    /// Record a completed sign-in
    pub fn signed_in(&self, user: UserInfo) {
        self.set_user.set(Some(user));
    }

    /// Clear local tokens and hand off to the provider's end-session page
    pub fn sign_out(&self) {
        self.set_user.set(None);
        OAuthService::new().sign_out();
    }
}

/// Provide auth context to the application.
/// Restores the session from storage when a fresh token is present.
pub fn provide_auth_context() {
    let initial = if storage::is_authenticated() {
        storage::get_user_info()
    } else {
        None
    };

    let (user, set_user) = create_signal(initial);

    // Recover an expired session silently when a refresh token is still around
    if user.get_untracked().is_none() && storage::get_refresh_token().is_some() {
        spawn_local(async move {
            match OAuthService::new().refresh_token().await {
                Ok(()) => set_user.set(storage::get_user_info()),
                Err(err) => {
                    log::debug!("session refresh failed: {err}");
                    storage::clear_tokens();
                }
            }
        });
    }

    provide_context(AuthContext { user, set_user });
}

/// Hook to access auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext must be provided by a parent component")
}
