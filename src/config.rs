//! Runtime configuration read from `window.ENV`
//!
//! The hosting page may inject a small `ENV` object before the WASM bundle
//! loads; every field falls back to the production default when absent.

use wasm_bindgen::JsValue;

/// Identity provider configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub provider_url: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: String,
}

impl AuthConfig {
    /// Load configuration from window.ENV
    pub fn from_env() -> Self {
        let (provider_url, client_id, redirect_uri) = get_auth_config_from_env();

        Self {
            provider_url,
            client_id,
            redirect_uri,
            scopes: "openid profile email".to_string(),
        }
    }
}

/// Get identity provider config from window.ENV
fn get_auth_config_from_env() -> (String, String, String) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(env) = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")) {
                if !env.is_undefined() {
                    let provider_url = js_sys::Reflect::get(&env, &JsValue::from_str("AUTH_URL"))
                        .ok()
                        .and_then(|v| v.as_string())
                        .unwrap_or_else(default_provider_url);

                    let client_id =
                        js_sys::Reflect::get(&env, &JsValue::from_str("OAUTH_CLIENT_ID"))
                            .ok()
                            .and_then(|v| v.as_string())
                            .unwrap_or_else(default_client_id);

                    let redirect_uri =
                        js_sys::Reflect::get(&env, &JsValue::from_str("OAUTH_REDIRECT_URI"))
                            .ok()
                            .and_then(|v| v.as_string())
                            .unwrap_or_else(default_redirect_uri);

                    return (provider_url, client_id, redirect_uri);
                }
            }
        }
    }

    // Default fallback
    (
        default_provider_url(),
        default_client_id(),
        default_redirect_uri(),
    )
}

fn default_provider_url() -> String {
    "https://id.finity.app".to_string()
}

fn default_client_id() -> String {
    "finity-web".to_string()
}

fn default_redirect_uri() -> String {
    format!("{}/sign-in/callback", get_origin())
}

/// Get current origin (e.g., "https://app.finity.app")
pub fn get_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "https://app.finity.app".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "https://app.finity.app".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_hosted_provider() {
        let config = AuthConfig::from_env();
        assert_eq!(config.provider_url, "https://id.finity.app");
        assert_eq!(config.client_id, "finity-web");
        assert!(config.redirect_uri.ends_with("/sign-in/callback"));
        assert_eq!(config.scopes, "openid profile email");
    }
}
