use super::*;

// =============================================================
// Totality and case-insensitivity
// =============================================================

#[test]
fn known_roles_map_to_their_dashboards() {
    assert_eq!(dashboard_for_role(Some("admin")), DashboardView::Admin);
    assert_eq!(dashboard_for_role(Some("employee")), DashboardView::Employee);
    assert_eq!(dashboard_for_role(Some("finance")), DashboardView::Finance);
    assert_eq!(dashboard_for_role(Some("manager")), DashboardView::Manager);
}

#[test]
fn mapping_ignores_case() {
    assert_eq!(dashboard_for_role(Some("ADMIN")), DashboardView::Admin);
    assert_eq!(dashboard_for_role(Some("Employee")), DashboardView::Employee);
    assert_eq!(dashboard_for_role(Some("fInAnCe")), DashboardView::Finance);
}

#[test]
fn unknown_and_absent_roles_resolve_to_not_found() {
    assert_eq!(dashboard_for_role(Some("unknown")), DashboardView::NotFound);
    assert_eq!(dashboard_for_role(Some("")), DashboardView::NotFound);
    assert_eq!(dashboard_for_role(None), DashboardView::NotFound);
}

#[test]
fn only_admin_maps_to_admin() {
    assert_ne!(dashboard_for_role(Some("administrator")), DashboardView::Admin);
}
