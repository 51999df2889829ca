//! OAuth2 Authorization Code Flow with PKCE against the hosted identity
//! provider. The provider owns the sign-in and sign-up forms; this module
//! only builds redirects and exchanges codes for tokens.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{get_origin, AuthConfig};

use super::storage::{
    clear_tokens, get_refresh_token, store_access_token, store_code_verifier, store_oauth_state,
    store_refresh_token, store_token_expiry, store_user_info, take_code_verifier,
    take_oauth_state, UserInfo,
};

/// Errors surfaced by the token exchange
#[derive(Error, Debug, Clone)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Identity provider error {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("State parameter mismatch - sign-in flow was not started here")]
    InvalidState,
    #[error("Missing PKCE verifier - sign-in flow was not started here")]
    MissingVerifier,
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for AuthError {
    fn from(err: gloo_net::Error) -> Self {
        AuthError::Network(err.to_string())
    }
}

/// Token response from the provider
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
    refresh_token: Option<String>,
    #[allow(dead_code)]
    scope: Option<String>,
}

/// OAuth service for authentication operations
pub struct OAuthService {
    config: AuthConfig,
}

impl OAuthService {
    pub fn new() -> Self {
        Self {
            config: AuthConfig::from_env(),
        }
    }

    /// Start the authorization flow - redirects to the provider's hosted UI
    pub async fn sign_in(&self) {
        let (code_verifier, code_challenge) = generate_pkce().await;
        let state = generate_random_string(32);

        // Store PKCE verifier and state for callback validation
        store_code_verifier(&code_verifier);
        store_oauth_state(&state);

        let auth_url = build_authorize_url(&self.config, &state, &code_challenge);

        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&auth_url);
        }
    }

    /// Handle the provider callback - exchange code for tokens
    pub async fn handle_callback(&self, code: &str, state: &str) -> Result<UserInfo, AuthError> {
        // Validate state to prevent CSRF
        let stored_state = take_oauth_state().ok_or(AuthError::InvalidState)?;
        if state != stored_state {
            return Err(AuthError::InvalidState);
        }

        let code_verifier = take_code_verifier().ok_or(AuthError::MissingVerifier)?;

        let token_url = format!("{}/application/o/token/", self.config.provider_url);

        let body = format!(
            "grant_type=authorization_code&code={}&redirect_uri={}&client_id={}&code_verifier={}",
            js_sys::encode_uri_component(code),
            js_sys::encode_uri_component(&self.config.redirect_uri),
            js_sys::encode_uri_component(&self.config.client_id),
            js_sys::encode_uri_component(&code_verifier),
        );

        let token_data = self.request_tokens(&token_url, body).await?;

        // Fetch the user handle shown in the chrome
        let user_info = self.fetch_user_info(&token_data.access_token).await?;
        store_user_info(&user_info);

        Ok(user_info)
    }

    /// Refresh the access token using the stored refresh token
    pub async fn refresh_token(&self) -> Result<(), AuthError> {
        let refresh_token = get_refresh_token().ok_or_else(|| {
            AuthError::Provider {
                status: 401,
                message: "No refresh token".to_string(),
            }
        })?;

        let token_url = format!("{}/application/o/token/", self.config.provider_url);

        let body = format!(
            "grant_type=refresh_token&refresh_token={}&client_id={}",
            js_sys::encode_uri_component(&refresh_token),
            js_sys::encode_uri_component(&self.config.client_id),
        );

        self.request_tokens(&token_url, body).await?;

        Ok(())
    }

    /// POST to the token endpoint and store the returned tokens
    async fn request_tokens(&self, token_url: &str, body: String) -> Result<TokenResponse, AuthError> {
        let response = Request::post(token_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Provider {
                status: response.status(),
                message,
            });
        }

        let token_data: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Deserialization(e.to_string()))?;

        store_access_token(&token_data.access_token);
        if let Some(ref refresh_token) = token_data.refresh_token {
            store_refresh_token(refresh_token);
        }

        let now = js_sys::Date::now() as u64;
        store_token_expiry(now + token_data.expires_in * 1000);

        Ok(token_data)
    }

    /// Fetch user info from the provider's userinfo endpoint
    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo, AuthError> {
        let userinfo_url = format!("{}/application/o/userinfo/", self.config.provider_url);

        let response = Request::get(&userinfo_url)
            .header("Authorization", &format!("Bearer {}", access_token))
            .send()
            .await?;

        if !response.ok() {
            return Err(AuthError::Provider {
                status: response.status(),
                message: "Failed to fetch user info".to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::Deserialization(e.to_string()))
    }

    /// Sign out - clear tokens and redirect to the provider's end-session page
    pub fn sign_out(&self) {
        clear_tokens();

        let logout_url = format!(
            "{}/application/o/{}/end-session/?post_logout_redirect_uri={}",
            self.config.provider_url,
            self.config.client_id,
            js_sys::encode_uri_component(&get_origin()),
        );

        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&logout_url);
        }
    }
}

impl Default for OAuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the provider authorization URL for a PKCE flow
fn build_authorize_url(config: &AuthConfig, state: &str, code_challenge: &str) -> String {
    format!(
        "{}/application/o/authorize/?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}&code_challenge={}&code_challenge_method=S256",
        config.provider_url,
        js_sys::encode_uri_component(&config.client_id),
        js_sys::encode_uri_component(&config.redirect_uri),
        js_sys::encode_uri_component(&config.scopes),
        js_sys::encode_uri_component(state),
        js_sys::encode_uri_component(code_challenge),
    )
}

/// Generate PKCE code verifier and S256 challenge
async fn generate_pkce() -> (String, String) {
    let code_verifier = generate_random_string(64);

    let encoder = web_sys::TextEncoder::new().unwrap();
    let data = encoder.encode_with_input(&code_verifier);

    let data_array = js_sys::Uint8Array::from(data.as_slice());

    let crypto = web_sys::window().unwrap().crypto().unwrap();
    let subtle = crypto.subtle();

    let hash_promise = subtle
        .digest_with_str_and_buffer_source("SHA-256", &data_array)
        .unwrap();

    let hash = wasm_bindgen_futures::JsFuture::from(hash_promise)
        .await
        .unwrap();

    let hash_array = js_sys::Uint8Array::new(&hash);
    let hash_bytes: Vec<u8> = hash_array.to_vec();

    let code_challenge = base64url_encode(&hash_bytes);

    (code_verifier, code_challenge)
}

/// Generate cryptographically random string
fn generate_random_string(length: usize) -> String {
    let crypto = web_sys::window().unwrap().crypto().unwrap();
    let mut array = vec![0u8; length];
    crypto.get_random_values_with_u8_array(&mut array).unwrap();

    array
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
        .chars()
        .take(length)
        .collect()
}

/// Base64url encode bytes (RFC 4648, no padding)
fn base64url_encode(bytes: &[u8]) -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64url_has_no_padding_or_url_unsafe_chars() {
        let encoded = base64url_encode(&[0xff, 0xef, 0xbe, 0xad, 0xde]);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn token_response_tolerates_missing_optional_fields() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"access_token":"at","token_type":"Bearer","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(parsed.access_token, "at");
        assert_eq!(parsed.token_type, "Bearer");
        assert_eq!(parsed.expires_in, 3600);
        assert!(parsed.refresh_token.is_none());
    }
}
