//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::state::session::SessionState;

/// Site header: brand, navigation, and the sign-in/sign-out corner.
///
/// Re-renders off the session change signal, not off any router or
/// framework side effect.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let version = expect_context::<RwSignal<u64>>();

    let signed_in = {
        let session = session.clone();
        move || {
            version.get();
            session.is_authenticated()
        }
    };

    let greeting = {
        let session = session.clone();
        move || {
            version.get();
            session.profile().map(|p| p.full_name).unwrap_or_default()
        }
    };

    view! {
        <header class="site-header">
            <A href="/">
                <span class="site-header__brand">"Spendboard"</span>
            </A>
            <nav class="site-header__nav">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/login">"Sign in"</A>
                            <A href="/register">"Register"</A>
                        }
                    }
                >
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/profile">"Profile"</A>
                    <span class="site-header__user">{greeting.clone()}</span>
                    <LogoutButton/>
                </Show>
            </nav>
        </header>
    }
}

/// Sign-out intent. The controller clears the local session whether or
/// not the server acknowledges; the failure is logged as feedback only.
#[component]
fn LogoutButton() -> impl IntoView {
    let controller = expect_context::<AppController>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let controller = controller.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = controller.logout().await {
                log::warn!("logout: {err}");
            }
            navigate("/", NavigateOptions::default());
        });
    };

    view! {
        <button class="btn" on:click=on_logout>
            "Sign out"
        </button>
    }
}
