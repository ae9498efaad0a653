//! Expense service wrappers.
//!
//! Thin bearer-authorized calls; none of them touch session state. The
//! invoice endpoint returns opaque PDF bytes the caller hands straight
//! to the browser for download.

use super::error::ApiError;
use super::types::{ExpenseDraft, ExpensePatch, ExpenseRecord, PeriodFilter};

/// Submit a new expense via `POST {base}/submit`.
pub async fn submit_expense(
    base: &str,
    draft: &ExpenseDraft,
    access_token: &str,
) -> Result<ExpenseRecord, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/submit", base.trim_end_matches('/'));
        let req = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(draft)
            .map_err(|e| ApiError::Service(e.to_string()))?;
        super::auth_api::read_json(req.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, draft, access_token);
        Err(off_browser())
    }
}

/// Fetch every visible expense via `GET {base}/get-all-expenses`.
pub async fn fetch_all_expenses(
    base: &str,
    access_token: &str,
) -> Result<Vec<ExpenseRecord>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/get-all-expenses", base.trim_end_matches('/'));
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await;
        super::auth_api::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, access_token);
        Err(off_browser())
    }
}

/// Partially update an expense via `PATCH {base}/update/{id}`.
pub async fn update_expense(
    base: &str,
    expense_id: i64,
    patch: &ExpensePatch,
    access_token: &str,
) -> Result<ExpenseRecord, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/update/{expense_id}", base.trim_end_matches('/'));
        let req = gloo_net::http::Request::patch(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(patch)
            .map_err(|e| ApiError::Service(e.to_string()))?;
        super::auth_api::read_json(req.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, expense_id, patch, access_token);
        Err(off_browser())
    }
}

/// Delete an expense via `DELETE {base}/delete/{id}`.
pub async fn delete_expense(base: &str, expense_id: i64, access_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/delete/{expense_id}", base.trim_end_matches('/'));
        let resp = gloo_net::http::Request::delete(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await;
        super::auth_api::read_ack(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, expense_id, access_token);
        Err(off_browser())
    }
}

/// Generate the company invoice PDF via
/// `GET {base}/generate/invoice/{domain}`, returning raw bytes.
pub async fn generate_invoice(
    base: &str,
    domain: &str,
    filter: &PeriodFilter,
    access_token: &str,
) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/generate/invoice/{domain}", base.trim_end_matches('/'));
        let resp = gloo_net::http::Request::get(&url)
            .query(filter.query_pairs())
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_status(resp.status(), body));
        }
        resp.binary()
            .await
            .map_err(|e| ApiError::Service(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, domain, filter, access_token);
        Err(off_browser())
    }
}

#[cfg(not(feature = "csr"))]
fn off_browser() -> ApiError {
    ApiError::Service("not available outside the browser".to_owned())
}
