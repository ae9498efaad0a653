//! Root application component: routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::controller::SessionController;
use crate::components::header::Header;
use crate::net::ApiConfig;
use crate::net::auth_api::HttpAuthGateway;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::SessionState;
use crate::storage::LocalStorageStore;

/// The controller wired against the real auth service.
pub type AppController = SessionController<HttpAuthGateway>;

/// Root application component.
///
/// Builds the session core once (storage, state, controller), bridges
/// state-change subscriptions into a version signal for reactive
/// consumers, and provides everything via context so each consumer
/// takes the same injected instances.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::default();
    let session = SessionState::new(Arc::new(LocalStorageStore::new()));
    let controller: AppController = SessionController::new(
        session.clone(),
        Arc::new(HttpAuthGateway::new(config.auth_base.clone())),
    );

    // Explicit subscription bridge: any set/clear bumps the version,
    // and reactive consumers track the version instead of relying on
    // framework re-render side effects.
    let session_version = RwSignal::new(0u64);
    session.subscribe(move || {
        let _ = session_version.try_update(|v| *v += 1);
    });

    provide_context(config);
    provide_context(session);
    provide_context(controller);
    provide_context(session_version);

    view! {
        <Title text="Spendboard"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
