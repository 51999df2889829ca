use leptos::*;
use leptos_router::*;

use crate::auth::use_auth;
use crate::state::{use_theme, Theme};

/// Authenticated chrome: sidebar, topbar and the routed page outlet.
/// Unauthenticated visits are sent to the sign-in flow.
#[component]
pub fn Layout() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    // UI-only guard; the identity provider still owns the session
    create_effect(move |_| {
        if !auth.is_signed_in() {
            navigate("/sign-in", Default::default());
        }
    });

    // Collapse flag lives with the shell and resets on every page load
    let (sidebar_open, set_sidebar_open) = create_signal(true);

    view! {
        <Show when=move || auth.is_signed_in() fallback=|| ()>
            <div class="layout">
                <Sidebar open=sidebar_open />
                <div class="content-column">
                    <Topbar on_menu_toggle=move |_| set_sidebar_open.update(|open| *open = !*open) />
                    <main class="main-content">
                        <Outlet />
                    </main>
                </div>
            </div>
        </Show>
    }
}

/// Navigation sidebar mirroring the route table
#[component]
fn Sidebar(open: ReadSignal<bool>) -> impl IntoView {
    view! {
        <aside class=move || if open.get() { "sidebar" } else { "sidebar hidden" }>
            <div class="sidebar-brand">
                <span class="brand-mark">"FINITY"</span>
                <span class="brand-tagline">"Financial dashboards"</span>
            </div>
            <nav class="sidebar-nav">
                <NavItem href="/" label="Overview" />

                <span class="nav-section">"Dashboards"</span>
                <NavItem href="/mutualfunds" label="Stock News" />
                <NavItem href="/portfolio" label="Portfolio Optimizer" />
                <NavItem href="/crossborder" label="Cross-Border" />
                <NavItem href="/gdp" label="GDP Insights" />

                <span class="nav-section">"Data"</span>
                <NavItem href="/contacts" label="Contacts" />
                <NavItem href="/invoices" label="Invoices" />

                <span class="nav-section">"Pages"</span>
                <NavItem href="/form" label="Profile Form" />
                <NavItem href="/calendar" label="Calendar" />
                <NavItem href="/faq" label="FAQ" />
                <NavItem href="/about" label="About Us" />

                <span class="nav-section">"Charts"</span>
                <NavItem href="/bar" label="Bar Chart" />
                <NavItem href="/pie" label="Pie Chart" />
                <NavItem href="/line" label="Line Chart" />
            </nav>
        </aside>
    }
}

/// Single sidebar link with active-path highlight
#[component]
fn NavItem(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();

    let class = move || {
        let current = location.pathname.get();
        let active = if href == "/" {
            current == "/"
        } else {
            current.starts_with(href)
        };
        if active {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <A href=href class=class>
            {label}
        </A>
    }
}

/// Topbar with collapse toggle, search, theme toggle and the user menu
#[component]
fn Topbar(#[prop(into)] on_menu_toggle: Callback<()>) -> impl IntoView {
    let auth = use_auth();

    view! {
        <header class="topbar">
            <button
                class="icon-button"
                aria-label="Toggle sidebar"
                on:click=move |_| on_menu_toggle.call(())
            >
                "\u{2630}"
            </button>
            <div class="topbar-search">
                <input type="search" placeholder="Search" aria-label="Search" />
            </div>
            <div class="topbar-actions">
                <ThemeToggle />
                <span class="user-handle">
                    {move || {
                        auth.user
                            .get()
                            .map(|user| user.display_handle().to_string())
                            .unwrap_or_default()
                    }}
                </span>
                <button class="sign-out-button" on:click=move |_| auth.sign_out()>
                    "Sign Out"
                </button>
            </div>
        </header>
    }
}

/// Theme toggle button
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme();

    let icon = move || {
        match theme_ctx.theme.get() {
            Theme::Light => "Dark", // Show what clicking will do
            Theme::Dark => "Light",
        }
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme_ctx.toggle()
        >
            {icon}
        </button>
    }
}
