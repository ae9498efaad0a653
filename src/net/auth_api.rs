//! Auth service gateway.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a service error, since these endpoints
//! are only reachable from the browser. The trait seam exists so the
//! session controller and access gate can be driven by mock gateways in
//! tests.

use super::error::ApiError;
use super::types::{ProfileUpdate, RegistrationData, TokenPair, UserRecord};

/// Stateless auth-service operations.
///
/// Futures here are not `Send`; the client runs on the single-threaded
/// browser event loop and is never polled across threads.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Create an account. `bearer` is `None` for self-registration and
    /// the requester's token when an admin creates an employee.
    async fn register(
        &self,
        data: &RegistrationData,
        bearer: Option<&str>,
    ) -> Result<TokenPair, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError>;

    /// Best-effort server-side revocation; callers clear local state
    /// regardless of the outcome.
    async fn logout(&self, email: &str, access_token: &str) -> Result<(), ApiError>;

    /// Liveness check for a held token.
    async fn validate_token(&self, access_token: &str) -> Result<(), ApiError>;

    async fn fetch_user(&self, email: &str, access_token: &str) -> Result<UserRecord, ApiError>;

    /// Partial update; the server rotates and returns fresh tokens.
    async fn update_profile(
        &self,
        email: &str,
        patch: &ProfileUpdate,
        access_token: &str,
    ) -> Result<TokenPair, ApiError>;
}

/// `AuthGateway` over HTTP against the auth service.
#[derive(Clone, Debug)]
pub struct HttpAuthGateway {
    base: String,
}

impl HttpAuthGateway {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base.trim_end_matches('/'))
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn register(
        &self,
        data: &RegistrationData,
        bearer: Option<&str>,
    ) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::post(&self.url("sign-up"));
            if let Some(token) = bearer {
                req = req.header("Authorization", &format!("Bearer {token}"));
            }
            let req = req.json(data).map_err(request_error)?;
            read_json(req.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (data, bearer);
            Err(off_browser())
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "csr")]
        {
            #[derive(serde::Serialize)]
            struct Credentials<'a> {
                email: &'a str,
                password: &'a str,
            }
            let req = gloo_net::http::Request::post(&self.url("sign-in"))
                .json(&Credentials { email, password })
                .map_err(request_error)?;
            read_json(req.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(off_browser())
        }
    }

    async fn logout(&self, email: &str, access_token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            #[derive(serde::Serialize)]
            #[serde(rename_all = "camelCase")]
            struct LogoutRequest<'a> {
                email: &'a str,
                access_token: &'a str,
            }
            let req = gloo_net::http::Request::post(&self.url("log-out"))
                .json(&LogoutRequest {
                    email,
                    access_token,
                })
                .map_err(request_error)?;
            read_ack(req.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, access_token);
            Err(off_browser())
        }
    }

    async fn validate_token(&self, access_token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&format!("validate-access-token/{access_token}"));
            read_ack(gloo_net::http::Request::post(&url).send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = access_token;
            Err(off_browser())
        }
    }

    async fn fetch_user(&self, email: &str, access_token: &str) -> Result<UserRecord, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&format!("get-user/{email}"));
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, access_token);
            Err(off_browser())
        }
    }

    async fn update_profile(
        &self,
        email: &str,
        patch: &ProfileUpdate,
        access_token: &str,
    ) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&format!("partial-update/{email}"));
            let req = gloo_net::http::Request::patch(&url)
                .header("Authorization", &format!("Bearer {access_token}"))
                .json(patch)
                .map_err(request_error)?;
            read_json(req.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, patch, access_token);
            Err(off_browser())
        }
    }
}

#[cfg(not(feature = "csr"))]
fn off_browser() -> ApiError {
    ApiError::Service("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn request_error(err: gloo_net::Error) -> ApiError {
    ApiError::Service(err.to_string())
}

/// Parse a JSON response, classifying non-success statuses.
#[cfg(feature = "csr")]
pub(super) async fn read_json<T: serde::de::DeserializeOwned>(
    resp: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = resp.map_err(request_error)?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), body));
    }
    resp.json::<T>().await.map_err(request_error)
}

/// Consume an ack-only response, classifying non-success statuses.
#[cfg(feature = "csr")]
pub(super) async fn read_ack(
    resp: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<(), ApiError> {
    let resp = resp.map_err(request_error)?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), body));
    }
    Ok(())
}
