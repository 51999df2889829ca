use leptos::*;

const ENTRIES: [(&str, &str); 6] = [
    (
        "What is FINITY?",
        "FINITY is a single workspace that brings together stock news, portfolio \
         optimization, cross-border compliance and macro data. The analytics \
         themselves run as hosted dashboards; FINITY signs you in once and puts \
         them behind one navigation shell.",
    ),
    (
        "Where does the portfolio optimization run?",
        "In the hosted Portfolio Optimizer service. It covers sector relative \
         strength, GTAA, maximum-Sharpe and minimum-volatility strategies and is \
         embedded here unchanged.",
    ),
    (
        "Why does a dashboard sometimes open in a new tab?",
        "Some browsers or network policies block embedding external sites. When a \
         dashboard cannot load inside the page, FINITY offers the same dashboard \
         in its own tab instead.",
    ),
    (
        "Is my sign-in handled by FINITY?",
        "No. Sign-in and sign-up are delegated to the FINITY identity service; \
         this application only learns whether you are signed in and which handle \
         to display.",
    ),
    (
        "Does FINITY store my financial data?",
        "No. FINITY keeps no financial data of its own; everything you see inside \
         the embedded dashboards stays with those services.",
    ),
    (
        "Can I use FINITY on a phone?",
        "Yes, the shell is responsive, though the embedded dashboards are laid \
         out for wide screens and work best on a desktop.",
    ),
];

/// Frequently asked questions accordion
#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h2>"FAQ"</h2>
                <p class="page-subtitle">"Frequently asked questions"</p>
            </div>

            <div class="faq-list">
                {ENTRIES
                    .iter()
                    .map(|(question, answer)| {
                        view! {
                            <details class="card faq-entry">
                                <summary>{*question}</summary>
                                <p>{*answer}</p>
                            </details>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
