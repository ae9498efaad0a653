//! Approval service wrappers.

use super::error::ApiError;
use super::types::{ApprovalRecord, ApprovalRequest, PeriodFilter};

/// Request approval for an expense via `POST {base}/ask-for-approve`.
pub async fn ask_for_approval(
    base: &str,
    request: &ApprovalRequest,
    access_token: &str,
) -> Result<ApprovalRecord, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/ask-for-approve", base.trim_end_matches('/'));
        let req = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(request)
            .map_err(|e| ApiError::Service(e.to_string()))?;
        super::auth_api::read_json(req.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, request, access_token);
        Err(off_browser())
    }
}

/// Fetch approvals for a company via `GET {base}/get-approvals/{domain}`,
/// optionally windowed by year/month.
pub async fn fetch_approvals(
    base: &str,
    domain: &str,
    filter: &PeriodFilter,
    access_token: &str,
) -> Result<Vec<ApprovalRecord>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/get-approvals/{domain}", base.trim_end_matches('/'));
        let resp = gloo_net::http::Request::get(&url)
            .query(filter.query_pairs())
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await;
        super::auth_api::read_json(resp).await
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
