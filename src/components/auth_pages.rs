use leptos::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

use crate::auth::{use_auth, OAuthService};

/// Sign-in page. The actual form lives with the hosted identity provider;
/// this page only starts the redirect. Already signed-in visitors go home.
#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();

    let start_sign_in = move |_| {
        spawn_local(async {
            OAuthService::new().sign_in().await;
        });
    };

    view! {
        <Show
            when=move || !auth.is_signed_in()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <div class="auth-page">
                <div class="card auth-card">
                    <span class="brand-mark">"FINITY"</span>
                    <h2>"Sign in"</h2>
                    <p>"You will be redirected to the FINITY identity service to continue."</p>
                    <button class="primary-button" on:click=start_sign_in>
                        "Continue to sign in"
                    </button>
                    <p class="auth-switch">
                        "New to FINITY? " <A href="/sign-up">"Create an account"</A>
                    </p>
                </div>
            </div>
        </Show>
    }
}

/// Sign-up page; enrollment itself happens on the provider's hosted UI
#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();

    let start_sign_up = move |_| {
        spawn_local(async {
            OAuthService::new().sign_in().await;
        });
    };

    view! {
        <Show
            when=move || !auth.is_signed_in()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <div class="auth-page">
                <div class="card auth-card">
                    <span class="brand-mark">"FINITY"</span>
                    <h2>"Create your account"</h2>
                    <p>"Registration is handled by the FINITY identity service; you can enroll after the redirect."</p>
                    <button class="primary-button" on:click=start_sign_up>
                        "Continue to sign up"
                    </button>
                    <p class="auth-switch">
                        "Already have an account? " <A href="/sign-in">"Sign in"</A>
                    </p>
                </div>
            </div>
        </Show>
    }
}

/// OAuth redirect target: exchanges the code, stores the session and goes home
#[component]
pub fn AuthCallback() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let (error, set_error) = create_signal(None::<String>);

    create_effect(move |_| {
        let code = query.with(|q| q.get("code").cloned());
        let state = query.with(|q| q.get("state").cloned());

        match (code, state) {
            (Some(code), Some(state)) => {
                let navigate = navigate.clone();
                spawn_local(async move {
                    match OAuthService::new().handle_callback(&code, &state).await {
                        Ok(user) => {
                            log::info!("signed in as {}", user.display_handle());
                            auth.signed_in(user);
                            navigate("/", Default::default());
                        }
                        Err(err) => {
                            log::error!("sign-in failed: {err}");
                            set_error.set(Some(err.to_string()));
                        }
                    }
                });
            }
            _ => set_error.set(Some("The sign-in response is missing its code or state".to_string())),
        }
    });

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                {move || match error.get() {
                    None => view! {
                        <h2>"Completing sign-in"</h2>
                        <p>"Talking to the identity service\u{2026}"</p>
                    }
                    .into_view(),
                    Some(message) => view! {
                        <h2>"Sign-in failed"</h2>
                        <p class="auth-error">{message}</p>
                        <p class="auth-switch">
                            <A href="/sign-in">"Back to sign in"</A>
                        </p>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
