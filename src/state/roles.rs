//! Role to dashboard mapping.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

/// Dashboard view tree reachable for a resolved role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardView {
    Admin,
    Employee,
    Finance,
    Manager,
    /// Unrecognized or absent role. A valid outcome, not an error.
    #[default]
    NotFound,
}

/// Map a role identifier to its dashboard, case-insensitively.
///
/// Total over all inputs: unknown strings and `None` resolve to
/// [`DashboardView::NotFound`] rather than failing.
pub fn dashboard_for_role(role: Option<&str>) -> DashboardView {
    match role.map(str::to_ascii_lowercase).as_deref() {
        Some("admin") => DashboardView::Admin,
        Some("employee") => DashboardView::Employee,
        Some("finance") => DashboardView::Finance,
        Some("manager") => DashboardView::Manager,
        _ => DashboardView::NotFound,
    }
}
