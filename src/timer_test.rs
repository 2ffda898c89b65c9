use std::time::Duration;

use super::*;

#[tokio::test(start_paused = true)]
async fn fires_epoch_after_delay() {
    let (tx, mut rx) = mpsc::channel(1);
    let timer = DisarmTimer::spawn(7, Duration::from_millis(3000), tx, |epoch| epoch);
    assert_eq!(timer.epoch(), 7);
    assert!(!timer.is_finished());

    tokio::time::sleep(Duration::from_millis(2999)).await;
    assert!(rx.try_recv().is_err());

    assert_eq!(rx.recv().await, Some(7));
    while !timer.is_finished() {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn drop_aborts_before_firing() {
    let (tx, mut rx) = mpsc::channel::<Epoch>(1);
    let timer = DisarmTimer::spawn(1, Duration::from_millis(3000), tx, |epoch| epoch);
    drop(timer);

    // The aborted task drops its sender without sending.
    assert_eq!(rx.recv().await, None);
}
