mod about;
mod calendar;
mod charts;
mod contacts;
mod crossborder;
mod faq;
mod gdp;
mod home;
mod invoices;
mod news;
mod portfolio;
mod profile_form;

pub use about::About;
pub use calendar::CalendarPage;
pub use charts::{BarChartPage, LineChartPage, PieChartPage};
pub use contacts::Contacts;
pub use crossborder::CrossBorder;
pub use faq::Faq;
pub use gdp::GdpInsights;
pub use home::Home;
pub use invoices::Invoices;
pub use news::StockNews;
pub use portfolio::PortfolioOptimizer;
pub use profile_form::ProfileForm;
