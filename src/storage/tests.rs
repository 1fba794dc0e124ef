use crate::map::models::LatLng;
use crate::rounds::consts::DEFAULT_MARKER;
use crate::rounds::models::RoundState;
use crate::storage::interface::SessionRepo;
use crate::storage::sessions::HashMapSessionStorage;
use std::num::NonZeroUsize;
use std::time::Duration;

#[tokio::test]
async fn test_unknown_session_starts_at_round_zero() {
    let storage = HashMapSessionStorage::default();

    let state = storage.round_state("session").await;

    assert_eq!(state, RoundState::new());
    assert_eq!(storage.count().await, 1);
}

#[tokio::test]
async fn test_transitions_are_kept_per_session() {
    let storage = HashMapSessionStorage::default();
    let sample_count = NonZeroUsize::new(5).unwrap();

    let (state, _) = storage
        .apply("first", |state| state.advance_round(sample_count))
        .await;
    let (_, moved) = storage
        .apply("second", |state| state.move_marker(LatLng::new(1.0, 2.0)))
        .await;

    assert!(moved);
    assert_eq!(state.current_index(), 1);
    assert_eq!(storage.round_state("first").await.current_index(), 1);
    assert_eq!(storage.round_state("first").await.player_marker(), DEFAULT_MARKER);
    assert_eq!(storage.round_state("second").await.current_index(), 0);
    assert_eq!(
        storage.round_state("second").await.player_marker(),
        LatLng::new(1.0, 2.0)
    );
}

#[tokio::test]
async fn test_ended_session_restarts_from_scratch() {
    let storage = HashMapSessionStorage::default();
    let sample_count = NonZeroUsize::new(5).unwrap();
    storage
        .apply("session", |state| state.advance_round(sample_count))
        .await;

    assert!(storage.end("session").await);
    assert!(!storage.end("session").await);
    assert_eq!(storage.count().await, 0);
    assert_eq!(storage.round_state("session").await, RoundState::new());
}

#[tokio::test(start_paused = true)]
async fn test_idle_session_is_evicted_and_active_one_survives() {
    let storage = HashMapSessionStorage::default();
    storage.round_state("idle").await;
    storage.round_state("active").await;

    tokio::time::advance(Duration::from_secs(40 * 60)).await;
    storage.round_state("active").await;
    tokio::time::advance(Duration::from_secs(30 * 60)).await;
    let evicted = storage.evict_idle(Duration::from_secs(60 * 60)).await;

    assert_eq!(evicted, 1);
    assert_eq!(storage.count().await, 1);
    let (state, _) = storage
        .apply("active", |state| state.advance_round(NonZeroUsize::new(5).unwrap()))
        .await;
    assert_eq!(state.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_eviction_task_sweeps_periodically() {
    let storage = HashMapSessionStorage::default();
    storage
        .apply("session", |state| state.advance_round(NonZeroUsize::new(5).unwrap()))
        .await;
    let eviction = storage.spawn_idle_eviction(Duration::from_secs(60), Duration::from_secs(120));

    tokio::time::sleep(Duration::from_secs(100)).await;
    assert_eq!(storage.count().await, 1);
    tokio::time::sleep(Duration::from_secs(100)).await;
    assert_eq!(storage.count().await, 0);

    eviction.abort();
}
