use leptos::*;

use crate::dashboards::Dashboard;

/// Inline-frame host for one externally hosted dashboard.
///
/// Starts in embedding mode and flips to the fallback panel when the frame
/// fires its native error event. There is no way back to embedding short of
/// a remount.
#[component]
pub fn EmbeddedDashboard(dashboard: &'static Dashboard) -> impl IntoView {
    let (embed_failed, set_embed_failed) = create_signal(false);

    view! {
        <div class="page embed-page">
            <div class="page-header">
                <h2>{dashboard.title}</h2>
                <p class="page-subtitle">{dashboard.description}</p>
            </div>
            <Show
                when=move || !embed_failed.get()
                fallback=move || view! { <FallbackPanel dashboard=dashboard /> }
            >
                <iframe
                    class="embed-frame"
                    src=dashboard.url
                    title=dashboard.title
                    sandbox="allow-same-origin allow-scripts allow-forms allow-popups"
                    on:error=move |_| set_embed_failed.set(true)
                ></iframe>
            </Show>
        </div>
    }
}

/// Shown in place of a failed embed; offers the same URL in its own tab
#[component]
fn FallbackPanel(dashboard: &'static Dashboard) -> impl IntoView {
    view! {
        <div class="card fallback-panel">
            <h3>{format!("Unable to embed the {} directly", dashboard.title)}</h3>
            <p>"The dashboard could not be loaded inside this page. It is still available in a separate tab."</p>
            <button class="primary-button" on:click=move |_| open_in_new_tab(dashboard.url)>
                "Open in New Tab"
            </button>
        </div>
    }
}

/// Open a URL in a new top-level browsing context
fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}
