//! The four externally hosted analytics dashboards composed by the shell.
//!
//! Each entry is an opaque external service reached at a fixed URL; the shell
//! embeds it in a sandboxed inline frame and owns nothing of its internals.

/// One embeddable external dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dashboard {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const STOCK_NEWS: Dashboard = Dashboard {
    slug: "mutualfunds",
    title: "Stock News Feed",
    description: "Live finance, stocks, crypto, ESG and IPO headlines with sentiment context.",
    url: "https://finity-stock-news.streamlit.app/?embed=true",
};

pub const PORTFOLIO_OPTIMIZER: Dashboard = Dashboard {
    slug: "portfolio",
    title: "Portfolio Optimizer",
    description: "Sector relative strength, GTAA, maximum-Sharpe and minimum-volatility strategies.",
    url: "https://finity-portfolio-optimizer.streamlit.app/?embed=true",
};

pub const CROSS_BORDER: Dashboard = Dashboard {
    slug: "crossborder",
    title: "Cross-Border Compliance Portal",
    description: "AML thresholds, data-privacy rules and remittance limits across jurisdictions.",
    url: "https://finity-crossborder.streamlit.app/?embed=true",
};

pub const GDP_INSIGHTS: Dashboard = Dashboard {
    slug: "gdp",
    title: "GDP Insights",
    description: "Macro view of GDP trends and country comparisons.",
    url: "https://finity-gdp-insights.streamlit.app/?embed=true",
};

pub const ALL: [&Dashboard; 4] = [
    &STOCK_NEWS,
    &PORTFOLIO_OPTIMIZER,
    &CROSS_BORDER,
    &GDP_INSIGHTS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.slug, b.slug);
                assert_ne!(a.url, b.url);
            }
        }
    }

    #[test]
    fn urls_are_absolute_https() {
        for dashboard in ALL {
            assert!(
                dashboard.url.starts_with("https://"),
                "{} must embed over https",
                dashboard.slug
            );
        }
    }

    #[test]
    fn portfolio_title_matches_fallback_copy() {
        // The fallback panel renders "Unable to embed the {title} directly"
        assert_eq!(PORTFOLIO_OPTIMIZER.title, "Portfolio Optimizer");
    }
}
