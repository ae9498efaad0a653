//! Authenticated-session state: the token pair and cached profile.
//!
//! `SessionState` is the single source of truth for "who is signed in".
//! It owns both records jointly (never one without the other), mirrors
//! every change into the persisted store, rehydrates exactly once at
//! construction, and notifies subscribers on every change so consumers
//! react to state, not to framework re-renders.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::net::types::{TokenPair, UserRecord};
use crate::storage::{Slot, SlotStore};

/// Proof of authentication held by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    /// Kept for renewal; never exchanged by the current client.
    #[serde(default)]
    pub refresh_token: String,
}

impl From<TokenPair> for Session {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

/// Cached copy of the server's user record for the current session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: String,
}

impl From<UserRecord> for Profile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            role: user.role,
        }
    }
}

/// Handle returned by [`SessionState::subscribe`] for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Arc<dyn Fn() + Send + Sync>;

struct Inner {
    session: Option<Session>,
    profile: Option<Profile>,
    store: Arc<dyn SlotStore>,
    subscribers: Vec<(usize, Listener)>,
    next_subscriber: usize,
}

/// Shared, cheaply clonable handle to the session state.
///
/// All mutation goes through the session controller, except
/// [`SessionState::clear`], which the access gate also calls and which
/// is idempotent.
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<Mutex<Inner>>,
}

impl SessionState {
    /// Build the state, rehydrating once from the store.
    ///
    /// Both slots must be present and well-formed to restore a session;
    /// anything else (absent, partial, corrupt) fails open to signed-out
    /// and resets the mirror so storage cannot stay inconsistent.
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        let raw_session = store.read(Slot::Session);
        let raw_profile = store.read(Slot::Profile);
        let had_content = raw_session.is_some() || raw_profile.is_some();

        let restored = raw_session
            .as_deref()
            .and_then(|s| serde_json::from_str::<Session>(s).ok())
            .zip(
                raw_profile
                    .as_deref()
                    .and_then(|p| serde_json::from_str::<Profile>(p).ok()),
            );

        let (session, profile) = match restored {
            Some((session, profile)) => (Some(session), Some(profile)),
            None => {
                if had_content {
                    log::warn!("discarding unreadable persisted session");
                    store.clear(Slot::Session);
                    store.clear(Slot::Profile);
                }
                (None, None)
            }
        };

        Self {
            inner: Arc::new(Mutex::new(Inner {
                session,
                profile,
                store,
                subscribers: Vec::new(),
                next_subscriber: 0,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current session and profile, jointly present or jointly absent.
    pub fn current(&self) -> Option<(Session, Profile)> {
        let inner = self.lock();
        inner.session.clone().zip(inner.profile.clone())
    }

    pub fn session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.lock().profile.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.lock().session.as_ref().map(|s| s.access_token.clone())
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<String> {
        self.lock().profile.as_ref().map(|p| p.role.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().session.is_some()
    }

    /// Atomically set both records and mirror them to storage.
    pub fn set(&self, session: Session, profile: Profile) {
        {
            let mut inner = self.lock();
            if let Ok(json) = serde_json::to_string(&session) {
                inner.store.write(Slot::Session, &json);
            }
            if let Ok(json) = serde_json::to_string(&profile) {
                inner.store.write(Slot::Profile, &json);
            }
            inner.session = Some(session);
            inner.profile = Some(profile);
        }
        self.notify();
    }

    /// Atomically null both records and their storage mirror. Idempotent.
    pub fn clear(&self) {
        {
            let mut inner = self.lock();
            inner.store.clear(Slot::Session);
            inner.store.clear(Slot::Profile);
            inner.session = None;
            inner.profile = None;
        }
        self.notify();
    }

    /// Register a change listener, fired after every `set`/`clear`.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.push((id, Arc::new(listener)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().subscribers.retain(|(sub_id, _)| *sub_id != id.0);
    }

    fn notify(&self) {
        // Listeners may read state, so the lock must be released first.
        let listeners: Vec<Listener> = self
            .lock()
            .subscribers
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}
