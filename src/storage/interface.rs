use crate::rounds::models::RoundState;
use std::time::Duration;

pub trait ISessionStorage: SessionRepo + Clone + Send + Sync + 'static {}

pub trait SessionRepo {
    /// State of the session, starting a fresh one at round 0 if there is none yet.
    async fn round_state(&self, session_id: &str) -> RoundState;

    /// Runs `transition` on the session's state while no other event can touch it.
    async fn apply<T, F>(&self, session_id: &str, transition: F) -> (RoundState, T)
    where
        T: Send,
        F: FnOnce(&mut RoundState) -> T + Send;

    async fn end(&self, session_id: &str) -> bool;

    async fn count(&self) -> usize;

    /// Drops sessions untouched for longer than `max_idle`, returning how many went away.
    async fn evict_idle(&self, max_idle: Duration) -> usize;
}
