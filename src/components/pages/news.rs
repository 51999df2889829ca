use leptos::*;

use crate::components::embed::EmbeddedDashboard;
use crate::dashboards;

/// Stock news dashboard, embedded at /mutualfunds
#[component]
pub fn StockNews() -> impl IntoView {
    view! { <EmbeddedDashboard dashboard=&dashboards::STOCK_NEWS /> }
}
