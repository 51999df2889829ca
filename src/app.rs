use leptos::*;
use leptos_router::*;

use crate::auth::{provide_auth_context, use_auth};
use crate::components::auth_pages::{AuthCallback, SignInPage, SignUpPage};
use crate::components::layout::Layout;
use crate::components::pages::{
    About, BarChartPage, CalendarPage, Contacts, CrossBorder, Faq, GdpInsights, Home, Invoices,
    LineChartPage, PieChartPage, PortfolioOptimizer, ProfileForm, StockNews,
};
use crate::state::provide_theme_context;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // Ambient contexts for every descendant
    provide_theme_context();
    provide_auth_context();

    view! {
        <Router>
            <Routes>
                <Route path="/sign-in" view=SignInPage />
                <Route path="/sign-in/callback" view=AuthCallback />
                <Route path="/sign-up" view=SignUpPage />
                <Route path="/" view=Layout>
                    <Route path="" view=Home />
                    <Route path="contacts" view=Contacts />
                    <Route path="invoices" view=Invoices />
                    <Route path="mutualfunds" view=StockNews />
                    <Route path="portfolio" view=PortfolioOptimizer />
                    <Route path="crossborder" view=CrossBorder />
                    <Route path="gdp" view=GdpInsights />
                    <Route path="form" view=ProfileForm />
                    <Route path="bar" view=BarChartPage />
                    <Route path="pie" view=PieChartPage />
                    <Route path="line" view=LineChartPage />
                    <Route path="faq" view=Faq />
                    <Route path="calendar" view=CalendarPage />
                    <Route path="about" view=About />
                </Route>
                <Route path="/*any" view=UnknownRoute />
            </Routes>
        </Router>
    }
}

/// Unmapped paths: signed-out visitors are sent to the sign-in flow,
/// signed-in visitors get the router's default empty render
#[component]
fn UnknownRoute() -> impl IntoView {
    let auth = use_auth();

    move || {
        if auth.is_signed_in() {
            ().into_view()
        } else {
            view! { <Redirect path="/sign-in" /> }.into_view()
        }
    }
}
