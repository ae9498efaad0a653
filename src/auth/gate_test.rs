use std::cell::Cell;
use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{ProfileUpdate, RegistrationData, TokenPair, UserRecord};
use crate::state::session::{Profile, Session};
use crate::storage::MemoryStore;

/// Gateway that only answers liveness checks, counting them.
#[derive(Default)]
struct ValidateOnlyGateway {
    fail: Cell<bool>,
    calls: Cell<u32>,
}

impl AuthGateway for ValidateOnlyGateway {
    async fn register(
        &self,
        _data: &RegistrationData,
        _bearer: Option<&str>,
    ) -> Result<TokenPair, ApiError> {
        unreachable!("gate never registers")
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<TokenPair, ApiError> {
        unreachable!("gate never logs in")
    }

    async fn logout(&self, _email: &str, _access_token: &str) -> Result<(), ApiError> {
        unreachable!("gate never logs out")
    }

    async fn validate_token(&self, _access_token: &str) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail.get() {
            Err(ApiError::Auth("expired".to_owned()))
        } else {
            Ok(())
        }
    }

    async fn fetch_user(&self, _email: &str, _access_token: &str) -> Result<UserRecord, ApiError> {
        unreachable!("gate never fetches users")
    }

    async fn update_profile(
        &self,
        _email: &str,
        _patch: &ProfileUpdate,
        _access_token: &str,
    ) -> Result<TokenPair, ApiError> {
        unreachable!("gate never updates profiles")
    }
}

fn signed_in_state() -> SessionState {
    let state = SessionState::new(Arc::new(MemoryStore::new()));
    state.set(
        Session {
            access_token: "T1".to_owned(),
            refresh_token: "R1".to_owned(),
        },
        Profile {
            id: 1,
            full_name: "Ada".to_owned(),
            email: "ada@x.com".to_owned(),
            phone: String::new(),
            role: "ADMIN".to_owned(),
        },
    );
    state
}

// =============================================================
// State machine
// =============================================================

#[test]
fn gate_starts_checking() {
    assert_eq!(AccessGate::new().status(), GateStatus::Checking);
}

#[test]
fn no_session_is_unauthorized_without_a_network_call() {
    let state = SessionState::new(Arc::new(MemoryStore::new()));
    let gateway = ValidateOnlyGateway::default();
    let mut gate = AccessGate::new();

    assert_eq!(
        block_on(gate.check(&state, &gateway)),
        GateStatus::Unauthorized
    );
    assert_eq!(gateway.calls.get(), 0);
}

#[test]
fn live_token_authorizes_and_keeps_the_session() {
    let state = signed_in_state();
    let gateway = ValidateOnlyGateway::default();
    let mut gate = AccessGate::new();

    assert_eq!(
        block_on(gate.check(&state, &gateway)),
        GateStatus::Authorized
    );
    assert!(state.is_authenticated());
}

#[test]
fn failed_validation_fails_closed_and_clears_the_session() {
    let state = signed_in_state();
    let gateway = ValidateOnlyGateway::default();
    gateway.fail.set(true);
    let mut gate = AccessGate::new();

    assert_eq!(
        block_on(gate.check(&state, &gateway)),
        GateStatus::Unauthorized
    );
    assert_eq!(state.current(), None);
}

#[test]
fn gate_validates_at_most_once() {
    let state = signed_in_state();
    let gateway = ValidateOnlyGateway::default();
    let mut gate = AccessGate::new();

    block_on(gate.check(&state, &gateway));
    block_on(gate.check(&state, &gateway));
    assert_eq!(gateway.calls.get(), 1);
}

#[test]
fn settled_gate_keeps_its_answer_until_remounted() {
    let state = signed_in_state();
    let gateway = ValidateOnlyGateway::default();
    gateway.fail.set(true);
    let mut gate = AccessGate::new();

    block_on(gate.check(&state, &gateway));
    // Even if validation would now pass, this mount stays unauthorized.
    gateway.fail.set(false);
    assert_eq!(
        block_on(gate.check(&state, &gateway)),
        GateStatus::Unauthorized
    );

    // A fresh mount re-checks, and the cleared session denies it.
    let mut remounted = AccessGate::new();
    assert_eq!(
        block_on(remounted.check(&state, &gateway)),
        GateStatus::Unauthorized
    );
}
