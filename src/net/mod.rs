//! REST plumbing: error taxonomy, wire types, and per-service wrappers.
//!
//! DESIGN
//! ======
//! Each backend service gets its own module of thin stateless calls; the
//! auth service additionally sits behind the `AuthGateway` trait because
//! the session core needs to be tested against mock backends.

pub mod approval_api;
pub mod auth_api;
pub mod company_api;
pub mod error;
pub mod expense_api;
pub mod types;

/// Base URLs of the backend services.
///
/// The defaults match the original gateway layout where every service is
/// reverse-proxied under its own prefix; deployments override them via
/// context at mount time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub auth_base: String,
    pub expense_base: String,
    pub company_base: String,
    pub approval_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base: "/auth-service".to_owned(),
            expense_base: "/expense-service".to_owned(),
            company_base: "/company-service".to_owned(),
            approval_base: "/approval-service".to_owned(),
        }
    }
}
