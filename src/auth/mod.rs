//! Authentication is delegated to the hosted identity provider.
//! OAuth2 Authorization Code Flow with PKCE; this crate never renders the
//! provider's sign-in forms, it only redirects to them.

mod context;
mod oauth;
mod storage;

pub use context::*;
pub use oauth::*;
pub use storage::*;
