use anyhow::Result;
use legal_assistant::QueryView;
use std::collections::HashMap;
use std::env;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
const DEFAULT_MAX_SESSIONS: usize = 10_000;

const IDLE_TTL_VAR: &str = "LEGAL_ASSISTANT_SESSION_TTL_SECS";
const MAX_SESSIONS_VAR: &str = "LEGAL_ASSISTANT_MAX_SESSIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub idle_ttl: Duration,
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_ttl: DEFAULT_IDLE_TTL,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl SessionLimits {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut limits = Self::default();

        if let Some(raw) = lookup(IDLE_TTL_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("{} must be a number of seconds, got {:?}", IDLE_TTL_VAR, raw)
            })?;
            limits.idle_ttl = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(MAX_SESSIONS_VAR) {
            limits.max_sessions = raw
                .trim()
                .parse()
                .ok()
                .filter(|max: &usize| *max > 0)
                .ok_or_else(|| {
                    anyhow::anyhow!("{} must be a positive integer, got {:?}", MAX_SESSIONS_VAR, raw)
                })?;
        }

        Ok(limits)
    }
}

struct Session {
    view: QueryView,
    last_seen: Instant,
}

/// Per-browser views, dropped after sitting idle or when the store is full.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    limits: SessionLimits,
}

impl SessionStore {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            limits,
        }
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Runs `f` against an existing session without creating one.
    pub async fn read<R>(&self, id: &Uuid, f: impl FnOnce(&QueryView) -> R) -> Option<R> {
        self.sessions.read().await.get(id).map(|s| f(&s.view))
    }

    /// Runs `f` against a session, creating it if needed.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut QueryView) -> R) -> R {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        if !sessions.contains_key(&id) {
            self.make_room(&mut sessions, now);
            log::info!("Started session {}", id);
        }

        let session = sessions.entry(id).or_insert_with(|| Session {
            view: QueryView::new(),
            last_seen: now,
        });
        session.last_seen = now;
        f(&mut session.view)
    }

    /// Runs `f` against a session only if it still exists.
    pub async fn update_existing<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut QueryView) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(|session| {
            session.last_seen = Instant::now();
            f(&mut session.view)
        })
    }

    /// Drops every session idle for longer than the TTL as of `now`.
    pub async fn sweep_idle(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now)
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, Session>, now: Instant) -> usize {
        let before = sessions.len();
        let ttl = self.limits.idle_ttl;
        sessions.retain(|_, s| now.saturating_duration_since(s.last_seen) <= ttl);
        before - sessions.len()
    }

    fn make_room(&self, sessions: &mut HashMap<Uuid, Session>, now: Instant) {
        if sessions.len() < self.limits.max_sessions {
            return;
        }

        let evicted = self.evict_idle(sessions, now);
        if evicted > 0 {
            log::info!("Evicted {} idle sessions", evicted);
        }

        while sessions.len() >= self.limits.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    log::info!("Evicted least recently used session {}", id);
                }
                None => break,
            }
        }
    }
}
