//! Session orchestration: login, registration, profile update, logout.
//!
//! The controller is the only writer of [`SessionState`]. Every flow
//! that yields tokens funnels through one hydration routine (fetch the
//! canonical user record, then set session and profile together), so
//! login, registration, and token-rotating profile updates cannot
//! drift apart. Mutating operations are serialized by an in-flight
//! guard; a second trigger while one is pending fails fast with
//! [`SessionError::Busy`] instead of letting a stale response win.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::auth_api::AuthGateway;
use crate::net::error::SessionError;
use crate::net::types::{ProfileUpdate, RegistrationData, TokenPair};
use crate::state::session::{Profile, Session, SessionState};

/// Self-registration always creates the company administrator; the
/// caller-supplied role is ignored. Employee accounts are created only
/// through [`SessionController::new_employee`].
const SELF_REGISTRATION_ROLE: &str = "ADMIN";

/// Orchestrates the session lifecycle against an [`AuthGateway`].
pub struct SessionController<G> {
    state: SessionState,
    gateway: Arc<G>,
    in_flight: Arc<AtomicBool>,
}

impl<G> Clone for SessionController<G> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            gateway: Arc::clone(&self.gateway),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<G: AuthGateway> SessionController<G> {
    pub fn new(state: SessionState, gateway: Arc<G>) -> Self {
        Self {
            state,
            gateway,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Sign in and hydrate the session. Returns the issued tokens for
    /// UI feedback; on any failure the state is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, SessionError> {
        let _guard = self.begin()?;
        let tokens = self.gateway.login(email, password).await?;
        self.hydrate_session(email, tokens.clone()).await?;
        Ok(tokens)
    }

    /// Self-register and hydrate the session, forcing the
    /// administrative role regardless of what the form supplied.
    pub async fn register(&self, data: RegistrationData) -> Result<TokenPair, SessionError> {
        let _guard = self.begin()?;
        let mut data = data;
        data.role = SELF_REGISTRATION_ROLE.to_owned();
        let tokens = self.gateway.register(&data, None).await?;
        self.hydrate_session(&data.email, tokens.clone()).await?;
        Ok(tokens)
    }

    /// Create a subordinate account with the requester's authority.
    ///
    /// Deliberately outside the in-flight group: it never reads or
    /// writes SessionState, so it cannot race the session flows.
    pub async fn new_employee(
        &self,
        data: &RegistrationData,
        requester_token: &str,
    ) -> Result<(), SessionError> {
        self.gateway.register(data, Some(requester_token)).await?;
        Ok(())
    }

    /// Partially update the user record. When the server rotates the
    /// tokens, the session is re-hydrated exactly as after login, so a
    /// password or email change keeps the client consistent with the
    /// server's fresh credentials.
    pub async fn update_user_profile(
        &self,
        email: &str,
        patch: &ProfileUpdate,
        access_token: &str,
    ) -> Result<TokenPair, SessionError> {
        let _guard = self.begin()?;
        let tokens = self
            .gateway
            .update_profile(email, patch, access_token)
            .await?;
        if tokens.access_token.is_empty() {
            // No rotation; the held session stays valid.
            return Ok(tokens);
        }
        // The patch may have changed the email the record is keyed by.
        let effective_email = patch.email.as_deref().unwrap_or(email);
        self.hydrate_session(effective_email, tokens.clone()).await?;
        Ok(tokens)
    }

    /// Sign out. The local session is cleared whether or not the server
    /// acknowledges, so the client never keeps a session the server may
    /// have already invalidated; a network failure is still surfaced
    /// for user feedback.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let _guard = self.begin()?;
        let Some((session, profile)) = self.state.current() else {
            self.state.clear();
            return Ok(());
        };
        let result = self
            .gateway
            .logout(&profile.email, &session.access_token)
            .await;
        self.state.clear();
        if let Err(err) = result {
            log::warn!("server logout failed, local session cleared anyway: {err}");
            return Err(err.into());
        }
        Ok(())
    }

    /// Shared hydration path: fetch the canonical record for `email`
    /// with the fresh token, then set session and profile atomically.
    /// A fetch failure propagates with the state untouched, never
    /// partially populated.
    async fn hydrate_session(&self, email: &str, tokens: TokenPair) -> Result<(), SessionError> {
        let user = self.gateway.fetch_user(email, &tokens.access_token).await?;
        self.state.set(Session::from(tokens), Profile::from(user));
        Ok(())
    }

    fn begin(&self) -> Result<FlightGuard, SessionError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(SessionError::Busy);
        }
        Ok(FlightGuard(Arc::clone(&self.in_flight)))
    }
}

/// Releases the in-flight flag when the operation settles, on success
/// and on every early return alike.
struct FlightGuard(Arc<AtomicBool>);

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
