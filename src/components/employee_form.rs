//! Admin form for creating employee accounts.

use leptos::prelude::*;

use crate::app::AppController;
use crate::net::error::SessionError;
use crate::net::types::RegistrationData;
use crate::state::session::SessionState;

/// Creates a subordinate account with the signed-in admin's authority.
/// The current session is untouched; the new employee signs in on
/// their own.
#[component]
pub fn EmployeeForm() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let session = expect_context::<SessionState>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("EMPLOYEE".to_owned());
    let message = RwSignal::new(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.access_token() else {
            message.set(Some(SessionError::NotSignedIn.to_string()));
            return;
        };
        let data = RegistrationData {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            match controller.new_employee(&data, &token).await {
                Ok(()) => {
                    let _ = message.try_set(Some(format!("Account created for {}.", data.email)));
                }
                Err(err) => {
                    let _ = message.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <form class="employee-form" on:submit=submit>
            <h2>"New employee"</h2>
            <label>
                "Full name"
                <input
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Phone"
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Role"
                <select on:change=move |ev| role.set(event_target_value(&ev))>
                    <option value="EMPLOYEE" selected=true>"Employee"</option>
                    <option value="MANAGER">"Manager"</option>
                    <option value="FINANCE">"Finance"</option>
                </select>
            </label>
            <button class="btn btn--primary" type="submit">
                "Create account"
            </button>
            {move || message.get().map(|m| view! { <p class="employee-form__message">{m}</p> })}
        </form>
    }
}
