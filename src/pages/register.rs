//! Self-registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::net::error::SessionError;
use crate::net::types::RegistrationData;

/// Company sign-up form. The registering account always becomes the
/// administrator; employees are created later from the admin dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = RegistrationData {
            full_name: full_name.get_untracked(),
            email: email.get_untracked().trim().to_owned(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            // Overridden by the controller for self-registration.
            role: String::new(),
        };
        let controller = controller.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match controller.register(data).await {
                Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                Err(SessionError::Busy) => {}
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <section class="register-page">
            <h1>"Create your company account"</h1>
            <form on:submit=submit>
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
                <button class="btn btn--primary" type="submit">
                    "Register"
                </button>
            </form>
            {move || error.get().map(|e| view! { <p class="register-page__error">{e}</p> })}
        </section>
    }
}
