use leptos::*;

use crate::models::{sample_contacts, Contact};

/// Contacts table over fixture rows
#[component]
pub fn Contacts() -> impl IntoView {
    let contacts = sample_contacts();

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Contacts"</h2>
                <p class="page-subtitle">"People you work with"</p>
            </div>

            <div class="card table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"City"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {contacts
                            .into_iter()
                            .map(|contact| view! { <ContactRow contact=contact /> })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn ContactRow(contact: Contact) -> impl IntoView {
    view! {
        <tr>
            <td>{contact.id}</td>
            <td>{contact.name}</td>
            <td>{contact.email}</td>
            <td>{contact.phone}</td>
            <td>{contact.city}</td>
        </tr>
    }
}
