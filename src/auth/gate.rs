//! Access gate guarding protected view trees.
//!
//! A gate is created per mount and settles exactly once: no session
//! means immediately unauthorized; otherwise one liveness round-trip
//! decides. Any validation failure, whatever the cause, de-authenticates
//! locally — a client-side gate must fail closed whenever it cannot
//! confirm validity. The gate only signals; redirecting to the login
//! entry point is the caller's job.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::auth_api::AuthGateway;
use crate::state::session::SessionState;

/// Gate lifecycle. `Checking` is the initial state; the other two are
/// terminal until the gate is remounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateStatus {
    #[default]
    Checking,
    Authorized,
    Unauthorized,
}

/// One-shot authorization check for a mounted protected view.
#[derive(Debug, Default)]
pub struct AccessGate {
    status: GateStatus,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state. While `Checking`, protected content must not
    /// render; presence of a session alone proves nothing.
    pub fn status(&self) -> GateStatus {
        self.status
    }

    /// Settle the gate. The liveness round-trip happens at most once
    /// per gate; once settled, further calls return the same answer.
    pub async fn check<G: AuthGateway>(
        &mut self,
        session: &SessionState,
        gateway: &G,
    ) -> GateStatus {
        if self.status != GateStatus::Checking {
            return self.status;
        }

        let Some(token) = session.access_token() else {
            self.status = GateStatus::Unauthorized;
            return self.status;
        };

        self.status = match gateway.validate_token(&token).await {
            Ok(()) => GateStatus::Authorized,
            Err(err) => {
                // Invalid token and unreachable service read the same:
                // the session cannot be confirmed, so it is dead.
                log::warn!("token validation failed, clearing session: {err}");
                session.clear();
                GateStatus::Unauthorized
            }
        };
        self.status
    }
}
