use leptos::*;

use crate::models::{outstanding_total, sample_invoices, Invoice};

/// Invoice balances table over fixture rows
#[component]
pub fn Invoices() -> impl IntoView {
    let invoices = sample_invoices();
    let total = outstanding_total(&invoices);

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Invoices"</h2>
                <p class="page-subtitle">"Open invoice balances"</p>
            </div>

            <div class="card table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Client"</th>
                            <th>"Email"</th>
                            <th>"Date"</th>
                            <th class="numeric">"Cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {invoices
                            .into_iter()
                            .map(|invoice| view! { <InvoiceRow invoice=invoice /> })
                            .collect_view()}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="4">"Total outstanding"</td>
                            <td class="numeric">{format!("${total:.2}")}</td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </div>
    }
}

#[component]
fn InvoiceRow(invoice: Invoice) -> impl IntoView {
    view! {
        <tr>
            <td>{invoice.id}</td>
            <td>{invoice.client}</td>
            <td>{invoice.email}</td>
            <td>{invoice.date}</td>
            <td class="numeric">{format!("${:.2}", invoice.cost)}</td>
        </tr>
    }
}
