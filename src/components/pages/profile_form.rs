use leptos::*;

/// Profile form fields collected for validation
#[derive(Debug, Default, Clone, PartialEq)]
struct ProfileDraft {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: String,
}

/// Local-only validation; the form has no submission target
fn validate(draft: &ProfileDraft) -> Vec<&'static str> {
    let mut problems = Vec::new();

    if draft.first_name.trim().is_empty() {
        problems.push("First name is required");
    }
    if draft.last_name.trim().is_empty() {
        problems.push("Last name is required");
    }
    let email = draft.email.trim();
    if email.is_empty() {
        problems.push("Email is required");
    } else if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        problems.push("Email address looks invalid");
    }

    problems
}

/// Create-profile form page
#[component]
pub fn ProfileForm() -> impl IntoView {
    let (draft, set_draft) = create_signal(ProfileDraft::default());
    let (problems, set_problems) = create_signal(Vec::<&'static str>::new());
    let (saved, set_saved) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let found = draft.with(validate);
        let ok = found.is_empty();
        set_problems.set(found);
        set_saved.set(ok);
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Create Profile"</h2>
                <p class="page-subtitle">"Contact details for your account"</p>
            </div>

            <form class="card form-card" on:submit=on_submit>
                <div class="form-row">
                    <label class="form-field">
                        "First Name"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.first_name.clone())
                            on:input=move |ev| {
                                set_draft.update(|d| d.first_name = event_target_value(&ev))
                            }
                        />
                    </label>
                    <label class="form-field">
                        "Last Name"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.last_name.clone())
                            on:input=move |ev| {
                                set_draft.update(|d| d.last_name = event_target_value(&ev))
                            }
                        />
                    </label>
                </div>
                <label class="form-field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| {
                            set_draft.update(|d| d.email = event_target_value(&ev))
                        }
                    />
                </label>
                <label class="form-field">
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || draft.with(|d| d.phone.clone())
                        on:input=move |ev| {
                            set_draft.update(|d| d.phone = event_target_value(&ev))
                        }
                    />
                </label>
                <label class="form-field">
                    "Address"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.address.clone())
                        on:input=move |ev| {
                            set_draft.update(|d| d.address = event_target_value(&ev))
                        }
                    />
                </label>

                <Show when=move || !problems.get().is_empty() fallback=|| ()>
                    <ul class="form-errors">
                        {move || {
                            problems
                                .get()
                                .into_iter()
                                .map(|problem| view! { <li>{problem}</li> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
                <Show when=move || saved.get() fallback=|| ()>
                    <p class="form-success">"Profile saved"</p>
                </Show>

                <button type="submit" class="primary-button">
                    "Create New Profile"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ProfileDraft {
        ProfileDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "(555) 010-1234".to_string(),
            address: "12 Analytical Row".to_string(),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn phone_and_address_are_optional() {
        let draft = ProfileDraft {
            phone: String::new(),
            address: String::new(),
            ..complete_draft()
        };
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn missing_names_are_reported_together() {
        let draft = ProfileDraft {
            first_name: "  ".to_string(),
            last_name: String::new(),
            ..complete_draft()
        };
        let problems = validate(&draft);
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn mangled_email_is_rejected() {
        for bad in ["ada.example.com", "@example.com", "ada@"] {
            let draft = ProfileDraft {
                email: bad.to_string(),
                ..complete_draft()
            };
            assert_eq!(validate(&draft), vec!["Email address looks invalid"], "{bad}");
        }
    }
}
