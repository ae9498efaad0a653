//! Fallback page for unknown routes and unrecognized roles.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"There is nothing here for you."</p>
            <A href="/">"Back to home"</A>
        </section>
    }
}
