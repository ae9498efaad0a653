//! Wire types shared with the remote services.
//!
//! All services speak camelCase JSON; the serde renames here are the
//! contract, not a convenience.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Token pair issued by sign-in, sign-up, and profile update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    /// Retained for future renewal; the client never exchanges it today.
    #[serde(default)]
    pub refresh_token: String,
}

/// Canonical user record returned by the auth service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: String,
}

/// Sign-up payload, for both self-registration and employee creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
}

/// PATCH body for partial profile updates; absent fields stay untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// New expense submitted from the entry form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub expense_date: String,
    pub company_domain: String,
}

/// Expense as the expense service reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub expense_date: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// PATCH body for partial expense updates; absent fields stay untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<String>,
}

/// Company registration payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    pub name: String,
    pub domain_name: String,
    #[serde(default)]
    pub address: String,
}

/// Company record keyed by domain name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: i64,
    pub name: String,
    pub domain_name: String,
    #[serde(default)]
    pub address: String,
}

/// Approval request for a submitted expense.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub expense_id: i64,
    pub company_domain: String,
}

/// Approval record returned by the approval service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRecord {
    pub id: i64,
    pub expense_id: i64,
    pub status: String,
    #[serde(default)]
    pub approver: Option<String>,
}

/// Optional year/month window for approval and invoice queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeriodFilter {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub start_month: Option<u8>,
    pub end_month: Option<u8>,
}

impl PeriodFilter {
    /// Render the filter as query pairs, omitting unset bounds.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.start_year {
            pairs.push(("startYear", v.to_string()));
        }
        if let Some(v) = self.end_year {
            pairs.push(("endYear", v.to_string()));
        }
        if let Some(v) = self.start_month {
            pairs.push(("startMonth", v.to_string()));
        }
        if let Some(v) = self.end_month {
            pairs.push(("endMonth", v.to_string()));
        }
        pairs
    }
}
