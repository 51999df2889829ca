use leptos::*;

use crate::components::embed::EmbeddedDashboard;
use crate::dashboards;

/// Cross-border compliance dashboard, embedded at /crossborder
#[component]
pub fn CrossBorder() -> impl IntoView {
    view! { <EmbeddedDashboard dashboard=&dashboards::CROSS_BORDER /> }
}
