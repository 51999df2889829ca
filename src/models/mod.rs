pub mod chart;
pub mod contact;
pub mod invoice;

pub use contact::{sample_contacts, Contact};
pub use invoice::{outstanding_total, sample_invoices, Invoice};
