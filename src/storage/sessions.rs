use crate::rounds::models::RoundState;
use crate::storage::interface::{ISessionStorage, SessionRepo};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

struct Session {
    state: RoundState,
    last_touched: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            state: RoundState::new(),
            last_touched: Instant::now(),
        }
    }

    fn touch(&mut self) -> &mut RoundState {
        self.last_touched = Instant::now();
        &mut self.state
    }
}

#[derive(Clone, Default)]
pub struct HashMapSessionStorage {
    storage: Arc<RwLock<HashMap<String, Session>>>,
}

impl HashMapSessionStorage {
    /// Every `period`, drops the sessions nobody has touched for longer than `max_idle`.
    pub fn spawn_idle_eviction(&self, period: Duration, max_idle: Duration) -> JoinHandle<()> {
        let sessions = self.clone();
        tokio::spawn(async move {
            let mut ticks = time::interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let evicted = sessions.evict_idle(max_idle).await;
                if evicted > 0 {
                    let sessions_count = sessions.count().await;
                    tracing::info!(evicted, sessions_count, "Evicted idle sessions.");
                }
            }
        })
    }
}

impl ISessionStorage for HashMapSessionStorage {}

impl SessionRepo for HashMapSessionStorage {
    async fn round_state(&self, session_id: &str) -> RoundState {
        *self
            .storage
            .write()
            .await
            .entry(session_id.to_string())
            .or_insert_with(Session::new)
            .touch()
    }

    async fn apply<T, F>(&self, session_id: &str, transition: F) -> (RoundState, T)
    where
        T: Send,
        F: FnOnce(&mut RoundState) -> T + Send,
    {
        let mut storage = self.storage.write().await;
        let state = storage
            .entry(session_id.to_string())
            .or_insert_with(Session::new)
            .touch();
        let outcome = transition(state);
        (*state, outcome)
    }

    async fn end(&self, session_id: &str) -> bool {
        self.storage.write().await.remove(session_id).is_some()
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut storage = self.storage.write().await;
        let before = storage.len();
        storage.retain(|_, session| session.last_touched.elapsed() <= max_idle);
        before - storage.len()
    }
}
