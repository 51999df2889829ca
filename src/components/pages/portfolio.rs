use leptos::*;

use crate::components::embed::EmbeddedDashboard;
use crate::dashboards;

/// Portfolio optimization dashboard, embedded at /portfolio
#[component]
pub fn PortfolioOptimizer() -> impl IntoView {
    view! { <EmbeddedDashboard dashboard=&dashboards::PORTFOLIO_OPTIMIZER /> }
}
