//! Gate wrapper for protected view trees.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::gate::{AccessGate, GateStatus};
use crate::net::ApiConfig;
use crate::net::auth_api::HttpAuthGateway;
use crate::state::session::SessionState;

/// Renders children only once the access gate authorizes the session.
///
/// While the gate is checking, a neutral placeholder renders instead of
/// the protected content; an unauthorized outcome redirects to the
/// login entry point. The liveness check runs once per mount, and its
/// result is discarded if the component unmounts before it resolves.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionState>();
    let config = expect_context::<ApiConfig>();
    let status = RwSignal::new(GateStatus::Checking);

    {
        let session = session.clone();
        let auth_base = config.auth_base.clone();
        leptos::task::spawn_local(async move {
            let gateway = HttpAuthGateway::new(auth_base);
            let mut gate = AccessGate::new();
            let outcome = gate.check(&session, &gateway).await;
            // try_set: if this mount is already gone, drop the result.
            let _ = status.try_set(outcome);
        });
    }

    let navigate = use_navigate();
    Effect::new(move || {
        if status.get() == GateStatus::Unauthorized {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        {move || match status.get() {
            GateStatus::Checking => view! { <p class="gate__checking">"Loading..."</p> }.into_any(),
            GateStatus::Authorized => children().into_any(),
            GateStatus::Unauthorized => ().into_any(),
        }}
    }
}
