//! Profile editing page.

use leptos::prelude::*;

use crate::app::AppController;
use crate::components::require_auth::RequireAuth;
use crate::net::error::SessionError;
use crate::net::types::ProfileUpdate;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileForm/>
        </RequireAuth>
    }
}

/// Edit the signed-in user's record. A saved change may rotate the
/// tokens server-side; the controller re-hydrates the session so the
/// client keeps working with the fresh credentials.
#[component]
fn ProfileForm() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let session = expect_context::<SessionState>();

    let current = session.profile();
    let full_name = RwSignal::new(
        current
            .as_ref()
            .map(|p| p.full_name.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(current.as_ref().map(|p| p.phone.clone()).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((session_data, profile)) = session.current() else {
            message.set(Some(SessionError::NotSignedIn.to_string()));
            return;
        };

        let password_value = password.get_untracked();
        let patch = ProfileUpdate {
            full_name: Some(full_name.get_untracked()),
            phone: Some(phone.get_untracked()),
            password: (!password_value.is_empty()).then_some(password_value),
            ..ProfileUpdate::default()
        };

        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            match controller
                .update_user_profile(&profile.email, &patch, &session_data.access_token)
                .await
            {
                Ok(_) => {
                    let _ = message.try_set(Some("Profile saved.".to_owned()));
                }
                Err(SessionError::Busy) => {}
                Err(err) => {
                    let _ = message.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <section class="profile-page">
            <h1>"Your profile"</h1>
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
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "New password (leave blank to keep)"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Save"
                </button>
            </form>
            {move || message.get().map(|m| view! { <p class="profile-page__message">{m}</p> })}
        </section>
    }
}
