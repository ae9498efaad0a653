//! Reusable view components.

pub mod company_form;
pub mod employee_form;
pub mod expense_form;
pub mod expense_list;
pub mod header;
pub mod panels;
pub mod require_auth;
