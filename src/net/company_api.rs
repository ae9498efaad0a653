//! Company service wrappers.

use super::error::ApiError;
use super::types::{CompanyData, CompanyRecord};

/// Register a company via `POST {base}/register`.
pub async fn register_company(
    base: &str,
    company: &CompanyData,
    access_token: &str,
) -> Result<CompanyRecord, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/register", base.trim_end_matches('/'));
        let req = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(company)
            .map_err(|e| ApiError::Service(e.to_string()))?;
        super::auth_api::read_json(req.send().await).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, company, access_token);
        Err(off_browser())
    }
}

/// Look up a company via `GET {base}/domain-name/{domain}`.
pub async fn fetch_company_by_domain(
    base: &str,
    domain: &str,
    access_token: &str,
) -> Result<CompanyRecord, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{}/domain-name/{domain}", base.trim_end_matches('/'));
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await;
        super::auth_api::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, domain, access_token);
        Err(off_browser())
    }
}

#[cfg(not(feature = "csr"))]
fn off_browser() -> ApiError {
    ApiError::Service("not available outside the browser".to_owned())
}
