use leptos::*;

use crate::models::chart::{
    arc_path, pie_slices, polyline_points, scale_height, ASSET_ALLOCATION, BENCHMARK_INDEX,
    MONTHS, PORTFOLIO_INDEX, SECTOR_EXPOSURE,
};

const PLOT_WIDTH: f64 = 600.0;
const PLOT_HEIGHT: f64 = 240.0;

/// Sector exposure bar chart at /bar
#[component]
pub fn BarChartPage() -> impl IntoView {
    let max = SECTOR_EXPOSURE
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0, f64::max);
    let bar_width = PLOT_WIDTH / SECTOR_EXPOSURE.len() as f64;

    let bars = SECTOR_EXPOSURE
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let height = scale_height(*value, max, PLOT_HEIGHT);
            let x = bar_width * i as f64 + bar_width * 0.15;
            let y = PLOT_HEIGHT - height;
            view! {
                <g>
                    <rect
                        class=format!("chart-fill-{}", i % 6)
                        x=format!("{x:.2}")
                        y=format!("{y:.2}")
                        width=format!("{:.2}", bar_width * 0.7)
                        height=format!("{height:.2}")
                    ></rect>
                    <text
                        class="chart-label"
                        x=format!("{:.2}", bar_width * i as f64 + bar_width / 2.0)
                        y=format!("{:.2}", PLOT_HEIGHT + 16.0)
                        text-anchor="middle"
                    >
                        {*label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Bar Chart"</h2>
                <p class="page-subtitle">"Sector exposure, percent of book"</p>
            </div>
            <div class="card chart-card">
                <svg
                    viewBox=format!("0 0 {PLOT_WIDTH} {}", PLOT_HEIGHT + 24.0)
                    role="img"
                    aria-label="Sector exposure bar chart"
                >
                    {bars}
                </svg>
            </div>
        </div>
    }
}

/// Asset allocation pie chart at /pie
#[component]
pub fn PieChartPage() -> impl IntoView {
    let values: Vec<f64> = ASSET_ALLOCATION.iter().map(|(_, value)| *value).collect();
    let slices = pie_slices(&values);

    let wedges = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            view! {
                <path
                    class=format!("chart-fill-{}", i % 6)
                    d=arc_path(130.0, 130.0, 120.0, *slice)
                ></path>
            }
        })
        .collect_view();

    let legend = ASSET_ALLOCATION
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            view! {
                <li>
                    <span class=format!("legend-swatch chart-fill-{}", i % 6)></span>
                    {format!("{label} \u{2013} {value}%")}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Pie Chart"</h2>
                <p class="page-subtitle">"Asset-class allocation"</p>
            </div>
            <div class="card chart-card chart-row">
                <svg viewBox="0 0 260 260" role="img" aria-label="Asset allocation pie chart">
                    {wedges}
                </svg>
                <ul class="chart-legend">{legend}</ul>
            </div>
        </div>
    }
}

/// Portfolio vs benchmark line chart at /line
#[component]
pub fn LineChartPage() -> impl IntoView {
    let portfolio = polyline_points(&PORTFOLIO_INDEX, PLOT_WIDTH, PLOT_HEIGHT);
    let benchmark = polyline_points(&BENCHMARK_INDEX, PLOT_WIDTH, PLOT_HEIGHT);

    let labels = MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let step = PLOT_WIDTH / (MONTHS.len() - 1) as f64;
            view! {
                <text
                    class="chart-label"
                    x=format!("{:.2}", step * i as f64)
                    y=format!("{:.2}", PLOT_HEIGHT + 16.0)
                    text-anchor="middle"
                >
                    {*month}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Line Chart"</h2>
                <p class="page-subtitle">"Growth of 100: portfolio vs benchmark"</p>
            </div>
            <div class="card chart-card">
                <svg
                    viewBox=format!("0 0 {PLOT_WIDTH} {}", PLOT_HEIGHT + 24.0)
                    role="img"
                    aria-label="Portfolio versus benchmark line chart"
                >
                    <polyline class="chart-line chart-stroke-0" points=portfolio></polyline>
                    <polyline class="chart-line chart-stroke-1" points=benchmark></polyline>
                    {labels}
                </svg>
                <ul class="chart-legend">
                    <li>
                        <span class="legend-swatch chart-fill-0"></span>
                        "Portfolio"
                    </li>
                    <li>
                        <span class="legend-swatch chart-fill-1"></span>
                        "Benchmark"
                    </li>
                </ul>
            </div>
        </div>
    }
}
