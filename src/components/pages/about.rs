use leptos::*;

/// About Us page, hardcoded prose
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h2>"About Us"</h2>
                <p class="page-subtitle">"The team behind FINITY"</p>
            </div>

            <div class="card prose-card">
                <p>
                    "FINITY started as a weekend project to stop juggling browser "
                    "bookmarks: one tab for market headlines, one for a portfolio "
                    "optimizer, one for compliance lookups, one for macro data. We "
                    "kept the dashboards where they already run well and built the "
                    "part that was missing: a single place to sign in and move "
                    "between them."
                </p>
                <p>
                    "The shell you are using owns deliberately little. Authentication "
                    "belongs to our identity service, and each dashboard remains an "
                    "independent product maintained by its own team. That separation "
                    "keeps your data where it lives today and lets every dashboard "
                    "ship on its own schedule."
                </p>
                <p>
                    "We are a small remote team of engineers and former portfolio "
                    "analysts. Questions, ideas or bug reports are always welcome at "
                    <a href="mailto:hello@finity.app">"hello@finity.app"</a> "."
                </p>
            </div>
        </div>
    }
}
