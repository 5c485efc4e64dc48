//! Session store and permission resolver
//!
//! The one process-wide mutable resource: the authenticated identity,
//! token and permission set. The session value is always replaced as a
//! whole unit (login, permission refresh) or dropped entirely (logout,
//! 401) so role and permissions can never disagree.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use shared::models::UserInfo;

const SESSION_FILE: &str = "session.json";

/// The locally cached authenticated identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    /// Unix millis of the login that produced this session
    pub logged_in_at: i64,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: token.into(),
            user,
            logged_in_at: shared::util::now_millis(),
        }
    }
}

/// Holds the current session and optionally persists it to disk
///
/// Written only by login, logout, permission refresh and the 401
/// teardown; read everywhere permissions gate an action.
#[derive(Debug)]
pub struct SessionStore {
    file_path: Option<PathBuf>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// In-memory store, nothing persisted
    pub fn in_memory() -> Self {
        Self {
            file_path: None,
            current: RwLock::new(None),
        }
    }

    /// Load the persisted session from `dir`, if any.
    ///
    /// A malformed session file is discarded and deleted, not repaired;
    /// the store then starts without a session.
    pub fn load(dir: &Path) -> Self {
        let file_path = dir.join(SESSION_FILE);

        let current = match std::fs::read_to_string(&file_path) {
            Ok(content) => match serde_json::from_str::<Session>(&content) {
                Ok(session) => {
                    tracing::info!(email = %session.user.email, "Loaded cached session");
                    Some(session)
                }
                Err(err) => {
                    tracing::warn!(%err, "Discarding malformed session file");
                    let _ = std::fs::remove_file(&file_path);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            file_path: Some(file_path),
            current: RwLock::new(current),
        }
    }

    /// Current session, if authenticated
    pub fn current(&self) -> Option<Session> {
        self.current.read().expect("session lock poisoned").clone()
    }

    /// Current auth token, if authenticated
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().expect("session lock poisoned").is_some()
    }

    /// Replace the session wholesale and persist it
    pub fn set(&self, session: Session) {
        *self.current.write().expect("session lock poisoned") = Some(session);
        self.persist();
    }

    /// Drop the session and remove the persisted file
    pub fn clear(&self) {
        *self.current.write().expect("session lock poisoned") = None;
        if let Some(path) = &self.file_path
            && path.exists()
            && let Err(err) = std::fs::remove_file(path)
        {
            tracing::warn!(%err, "Failed to remove session file");
        }
    }

    /// Swap in a freshly fetched permission set.
    ///
    /// Builds a new session value and replaces the old one wholesale; a
    /// no-op when there is no active session.
    pub fn replace_permissions(
        &self,
        role: String,
        role_display: String,
        permissions: Vec<String>,
    ) {
        let mut guard = self.current.write().expect("session lock poisoned");
        if let Some(old) = guard.take() {
            let Session {
                token,
                mut user,
                logged_in_at,
            } = old;
            user.role = Some(role);
            user.role_display = Some(role_display);
            user.permissions = permissions;
            *guard = Some(Session {
                token,
                user,
                logged_in_at,
            });
        }
        drop(guard);
        self.persist();
    }

    /// Can the current session perform the named action?
    ///
    /// No session means no; a superuser identity means yes regardless of
    /// the explicit permission set. Never errors.
    pub fn has_permission(&self, name: &str) -> bool {
        match self.current.read().expect("session lock poisoned").as_ref() {
            None => false,
            Some(session) if session.user.is_superuser => true,
            Some(session) => session.user.permissions.iter().any(|p| p == name),
        }
    }

    /// True iff a session exists and its role is one of `roles`
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .and_then(|s| s.user.role.as_deref())
            .is_some_and(|role| roles.contains(&role))
    }

    fn persist(&self) {
        let Some(path) = &self.file_path else {
            return;
        };
        let guard = self.current.read().expect("session lock poisoned");
        let Some(session) = guard.as_ref() else {
            return;
        };

        let write = (|| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content =
                serde_json::to_string_pretty(session).map_err(std::io::Error::other)?;
            std::fs::write(path, content)
        })();

        if let Err(err) = write {
            // The session stays usable in memory; only rehydration after
            // a restart is lost.
            tracing::warn!(%err, "Failed to persist session");
        }
    }
}
