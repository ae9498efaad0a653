//! Role-gated dashboard.

use leptos::prelude::*;

use crate::components::panels::{AdminPanel, EmployeePanel, FinancePanel, ManagerPanel};
use crate::components::require_auth::RequireAuth;
use crate::pages::not_found::NotFoundPage;
use crate::state::roles::{DashboardView, dashboard_for_role};
use crate::state::session::SessionState;

/// Dashboard entry point: protected by the access gate, then dispatched
/// to the panel the resolved role is entitled to.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardBody/>
        </RequireAuth>
    }
}

/// Mounts the dashboard for the current role. An unknown or missing
/// role falls through to the not-found view, never an error.
#[component]
fn DashboardBody() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let version = expect_context::<RwSignal<u64>>();

    move || {
        version.get();
        match dashboard_for_role(session.role().as_deref()) {
            DashboardView::Admin => view! { <AdminPanel/> }.into_any(),
            DashboardView::Employee => view! { <EmployeePanel/> }.into_any(),
            DashboardView::Finance => view! { <FinancePanel/> }.into_any(),
            DashboardView::Manager => view! { <ManagerPanel/> }.into_any(),
            DashboardView::NotFound => view! { <NotFoundPage/> }.into_any(),
        }
    }
}
