use std::{collections::HashMap, sync::Arc, time::Duration};

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};
use tokio::{sync::Mutex, time::Instant};

use crate::{types::Credential, utils};

pub const SESSION_COOKIE: &str = "chartbridge_session";

const SESSION_ID_LEN: usize = 32;
const LOGIN_STATE_LEN: usize = 32;

/// How long an OAuth `state` handed out by `/auth` stays redeemable.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(600);

/// Cookie signing key derived from the configured secret.
///
/// SHA-512 stretches secrets of any length to the 64 bytes the key needs.
pub fn session_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

/// Server-side state of one caller.
#[derive(Debug, Clone, Default)]
pub struct SessionRecord {
    pub credential: Option<Credential>,
}

struct PendingLogin {
    session_id: String,
    started: Instant,
}

impl PendingLogin {
    fn is_expired(&self) -> bool {
        self.started.elapsed() >= LOGIN_TIMEOUT
    }
}

#[derive(Default)]
struct SessionTable {
    sessions: HashMap<String, SessionRecord>,
    // OAuth `state` value -> session that started the login
    pending_logins: HashMap<String, PendingLogin>,
}

/// In-memory session records keyed by the id in the signed session cookie.
///
/// Nothing here is persisted; a restart logs everybody out.
#[derive(Clone, Default)]
pub struct SessionManager {
    table: Arc<Mutex<SessionTable>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session id carried by the request, if any.
    pub fn session_id(jar: &SignedCookieJar) -> Option<String> {
        jar.get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|id| !id.is_empty())
    }

    /// Session id of the request, issuing a new cookie when there is none.
    pub fn identify(&self, jar: SignedCookieJar) -> (SignedCookieJar, String) {
        if let Some(id) = Self::session_id(&jar) {
            return (jar, id);
        }

        let id = utils::generate_token(SESSION_ID_LEN);
        let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        tracing::debug!("issued new session");
        (jar.add(cookie), id)
    }

    pub async fn record(&self, session_id: &str) -> SessionRecord {
        let table = self.table.lock().await;
        table
            .sessions
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn credential(&self, session_id: &str) -> Option<Credential> {
        self.record(session_id).await.credential
    }

    /// Stores a credential, replacing any earlier one of the session.
    pub async fn store_credential(&self, session_id: &str, credential: Credential) {
        let mut table = self.table.lock().await;
        table
            .sessions
            .entry(session_id.to_string())
            .or_default()
            .credential = Some(credential);
    }

    /// Writes back the credential a catalog session ended up with.
    ///
    /// `original` is the credential the request started from. Nothing is
    /// written when the request left it untouched, and nothing is written when
    /// the stored credential is no longer `original` (the session logged in
    /// again or another request refreshed it meanwhile). Otherwise a refreshed
    /// credential replaces the stored one, and `None` (dropped after a failed
    /// refresh) clears it.
    pub async fn sync_credential(
        &self,
        session_id: &str,
        original: &Credential,
        current: Option<&Credential>,
    ) {
        if current == Some(original) {
            return;
        }

        let mut table = self.table.lock().await;
        let Some(record) = table.sessions.get_mut(session_id) else {
            return;
        };

        if record.credential.as_ref() != Some(original) {
            tracing::debug!("session credential changed during request, keeping newer one");
            return;
        }

        record.credential = current.cloned();
    }

    /// Starts a login for a session and returns the OAuth `state` for it.
    ///
    /// A session has at most one pending login; starting another replaces it.
    /// Logins older than [`LOGIN_TIMEOUT`] are dropped.
    pub async fn begin_login(&self, session_id: &str) -> String {
        let state = utils::generate_token(LOGIN_STATE_LEN);
        let mut table = self.table.lock().await;
        table
            .pending_logins
            .retain(|_, login| !login.is_expired() && login.session_id != session_id);
        table.pending_logins.insert(
            state.clone(),
            PendingLogin {
                session_id: session_id.to_string(),
                started: Instant::now(),
            },
        );
        state
    }

    /// Session that started the login identified by `state`. Each state
    /// can be used once, and only within [`LOGIN_TIMEOUT`].
    pub async fn finish_login(&self, state: &str) -> Option<String> {
        let mut table = self.table.lock().await;
        table
            .pending_logins
            .remove(state)
            .filter(|login| !login.is_expired())
            .map(|login| login.session_id)
    }

    pub async fn pending_logins(&self) -> usize {
        self.table.lock().await.pending_logins.len()
    }
}
