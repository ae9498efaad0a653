//! Landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Public landing page; "get started" routes by authentication state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();

    let on_get_started = move |_| {
        let target = if session.is_authenticated() {
            "/dashboard"
        } else {
            "/login"
        };
        navigate(target, NavigateOptions::default());
    };

    view! {
        <section class="home-page">
            <h1>"Take control of your expenses"</h1>
            <p>
                "Track spending, route approvals, and keep the whole company "
                "on one ledger."
            </p>
            <button class="btn btn--primary" on:click=on_get_started>
                "Get started"
            </button>
        </section>
    }
}
