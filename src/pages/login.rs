//! Sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::net::error::SessionError;

/// Email/password sign-in form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            match controller.login(email_value.trim(), &password_value).await {
                Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                // A double-click lands here; the first attempt decides.
                Err(SessionError::Busy) => {}
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <section class="login-page">
            <h1>"Sign in"</h1>
            <form on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                    "Sign in"
                </button>
            </form>
            {move || error.get().map(|e| view! { <p class="login-page__error">{e}</p> })}
        </section>
    }
}
