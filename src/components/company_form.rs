//! Admin form for registering the company record.

use leptos::prelude::*;

use crate::net::ApiConfig;
use crate::net::company_api;
use crate::net::types::CompanyData;
use crate::state::session::SessionState;

/// Registers the company the expenses and approvals are scoped to.
#[component]
pub fn CompanyForm() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ApiConfig>();

    let name = RwSignal::new(String::new());
    let domain_name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let message = RwSignal::new(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get_untracked().trim().is_empty() || domain_name.get_untracked().trim().is_empty()
        {
            message.set(Some("Name and domain are required.".to_owned()));
            return;
        }
        let company = CompanyData {
            name: name.get_untracked().trim().to_owned(),
            domain_name: domain_name.get_untracked().trim().to_owned(),
            address: address.get_untracked(),
        };
        let base = config.company_base.clone();
        let token = session.access_token().unwrap_or_default();
        leptos::task::spawn_local(async move {
            match company_api::register_company(&base, &company, &token).await {
                Ok(record) => {
                    let _ = message.try_set(Some(format!("Registered {}.", record.domain_name)));
                }
                Err(err) => {
                    let _ = message.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <form class="company-form" on:submit=submit>
            <h2>"Company"</h2>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Domain"
                <input
                    type="text"
                    prop:value=move || domain_name.get()
                    on:input=move |ev| domain_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Address"
                <input
                    type="text"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit">
                "Register company"
            </button>
            {move || message.get().map(|m| view! { <p class="company-form__message">{m}</p> })}
        </form>
    }
}
