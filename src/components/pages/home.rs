use leptos::*;
use leptos_router::*;

use crate::dashboards;

/// Landing page: headline figures and quick links to the embedded dashboards
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Overview"</h2>
                <p class="page-subtitle">"Your financial workspace at a glance"</p>
            </div>

            <div class="dashboard-grid">
                <StatCard label="Portfolio Value" value="$128,420" note="+2.1% today" />
                <StatCard label="Day P&L" value="+$2,640" note="across 14 positions" />
                <StatCard label="Watchlist Alerts" value="3" note="2 earnings, 1 dividend" />
                <StatCard label="Compliance Checks" value="All clear" note="last run this morning" />
            </div>

            <h3 class="section-title">"Dashboards"</h3>
            <div class="dashboard-grid">
                {dashboards::ALL
                    .iter()
                    .copied()
                    .map(|dashboard| view! { <DashboardLink dashboard=dashboard /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Headline figure card
#[component]
fn StatCard(
    label: &'static str,
    value: &'static str,
    note: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
            <span class="stat-note">{note}</span>
        </div>
    }
}

/// Quick-link card for one embedded dashboard
#[component]
fn DashboardLink(dashboard: &'static dashboards::Dashboard) -> impl IntoView {
    view! {
        <div class="card link-card">
            <h3>{dashboard.title}</h3>
            <p>{dashboard.description}</p>
            <A href=format!("/{}", dashboard.slug) class="card-action">
                "Open"
            </A>
        </div>
    }
}
