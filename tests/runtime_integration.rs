//! Async runtime driver integration tests
//!
//! Drives a session through [`SessionHandle`] the way a live frontend would:
//! the ticker task fills gauges in the background while the test resolves
//! actions through the shared mutex.

use std::time::Duration;

use chrono_gate::battle::{ActionKind, GameSession};
use chrono_gate::core::CombatantId;
use chrono_gate::runtime::SessionHandle;

#[tokio::test(start_paused = true)]
async fn test_ticker_fills_gauges_until_an_ally_can_act() {
    let handle = SessionHandle::new(GameSession::with_seed(5));
    handle.session.lock().await.start_battle();

    let ticker = handle.spawn_ticker();

    // 100ms per tick at 2.0 per tick: 5.5 simulated seconds is plenty
    tokio::time::sleep(Duration::from_millis(5500)).await;

    let mut session = handle.session.lock().await;
    assert!(session.roster.allies[0].is_ready());

    let entry = session.resolve(CombatantId(1), ActionKind::Attack, None);
    assert!(entry.is_some());
    assert_eq!(session.roster.allies[0].gauge, 0.0);
    drop(session);

    ticker.shutdown().await.expect("ticker shuts down");
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_the_battle_under_a_running_ticker() {
    let handle = SessionHandle::new(GameSession::with_seed(5));
    {
        let mut session = handle.session.lock().await;
        session.start_battle();
        session.set_scheduler_running(false);
    }

    let ticker = handle.spawn_ticker();
    tokio::time::sleep(Duration::from_millis(2000)).await;

    {
        let session = handle.session.lock().await;
        assert_eq!(session.battle_tick, 0);
        assert_eq!(session.roster.allies[0].gauge, 0.0);
    }

    handle.session.lock().await.set_scheduler_running(true);
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(handle.session.lock().await.battle_tick > 0);

    ticker.shutdown().await.expect("ticker shuts down");
}

#[tokio::test(start_paused = true)]
async fn test_two_handles_share_one_session() {
    let handle = SessionHandle::new(GameSession::with_seed(5));
    let other = handle.clone();

    handle.session.lock().await.start_battle();
    let ticker = other.spawn_ticker();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(handle.session.lock().await.battle_tick > 0);
    assert!(other.session.lock().await.battle_tick > 0);

    ticker.shutdown().await.expect("ticker shuts down");
}
