use leptos::*;

use crate::components::embed::EmbeddedDashboard;
use crate::dashboards;

/// GDP data dashboard, embedded at /gdp
#[component]
pub fn GdpInsights() -> impl IntoView {
    view! { <EmbeddedDashboard dashboard=&dashboards::GDP_INSIGHTS /> }
}
