//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. `session` owns authentication truth; `roles` is the
//! pure role-to-dashboard mapping.

pub mod roles;
pub mod session;
