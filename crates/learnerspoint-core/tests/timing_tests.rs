//! Wall-clock behaviour of the timer driver.
//!
//! Runs machines under `timer::drive` on a paused tokio clock and checks
//! when transitions land.

use std::sync::Arc;
use std::time::Duration;

use learnerspoint_core::loading::LoadingTiming;
use learnerspoint_core::timer::{drive, Step};
use learnerspoint_core::{
    Carousel, Deadline, PhraseCycle, ProgressMeter, Rotator, TimedMachine, TypewriterTiming,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;

/// Run `machine` on its own task, sharing its state with the test.
fn spawn_driver<M>(machine: M) -> (Arc<Mutex<M>>, JoinHandle<()>)
where
    M: TimedMachine + Send + 'static,
{
    let shared = Arc::new(Mutex::new(machine));
    let handle = {
        let shared = shared.clone();
        tokio::spawn(async move {
            drive(move |step: Step<M>| step(&mut shared.lock())).await;
        })
    };
    (shared, handle)
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn loading_done_fires_at_four_seconds() {
    let (done, handle) = spawn_driver(LoadingTiming::default().done_deadline());

    advance(3999).await;
    assert!(!done.lock().is_elapsed(), "done fired early");

    advance(2).await;
    assert!(done.lock().is_elapsed());

    // At rest, so the driver finishes on its own
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn loading_parts_run_independently() {
    let timing = LoadingTiming::default();
    let (meter, _m) = spawn_driver(ProgressMeter::new(
        StdRng::seed_from_u64(42),
        Duration::from_millis(timing.tick_ms),
    ));
    let (messages, _r) = spawn_driver(timing.message_rotator(4));

    let mut last = 0.0;
    for _ in 0..35 {
        advance(100).await;
        let percent = meter.lock().percent();
        assert!(percent >= last);
        assert!(percent <= 100.0);
        last = percent;
    }
    assert!(last > 0.0);
    // 3.5s in: three rotations
    assert_eq!(messages.lock().index(), 3);

    advance(1000).await;
    assert_eq!(messages.lock().index(), 0);
}

#[tokio::test(start_paused = true)]
async fn typewriter_types_first_phrase_on_schedule() {
    let phrases = vec!["Hi there".to_string(), "Bye".to_string()];
    let (cycle, _h) = spawn_driver(PhraseCycle::new(phrases, TypewriterTiming::default()).unwrap());

    advance(450).await;
    assert_eq!(cycle.lock().text(), "Hi t");

    advance(400).await;
    assert_eq!(cycle.lock().text(), "Hi there");

    // Still paused on the full phrase
    advance(1000).await;
    assert_eq!(cycle.lock().text(), "Hi there");
}

#[tokio::test(start_paused = true)]
async fn aborted_driver_stops_mutating() {
    let (cycle, handle) = spawn_driver(
        PhraseCycle::new(vec!["abcdef".to_string()], TypewriterTiming::default()).unwrap(),
    );

    advance(250).await;
    handle.abort();
    let frozen = cycle.lock().text().to_string();
    assert_eq!(frozen, "ab");

    advance(5000).await;
    assert_eq!(cycle.lock().text(), frozen);
}

#[tokio::test(start_paused = true)]
async fn carousel_auto_advances_every_five_seconds() {
    let (carousel, _h) = spawn_driver(Carousel::new(vec!["a", "b", "c"]).unwrap());

    advance(4999).await;
    assert_eq!(carousel.lock().current(), 0);
    advance(2).await;
    assert_eq!(carousel.lock().current(), 1);
    advance(5000).await;
    assert_eq!(carousel.lock().current(), 2);
    advance(5000).await;
    assert_eq!(carousel.lock().current(), 0);
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_rearms_auto_advance() {
    let (carousel, handle) = spawn_driver(Carousel::new(vec![1, 2, 3, 4]).unwrap());

    advance(3000).await;
    let epoch = carousel.lock().epoch();
    carousel.lock().next();
    assert_ne!(carousel.lock().epoch(), epoch);

    // What the UI does on an epoch change: cancel, then re-drive from now
    handle.abort();
    let shared = carousel.clone();
    let _rearmed = tokio::spawn(async move {
        drive(move |step: Step<Carousel<i32>>| step(&mut shared.lock())).await;
    });

    // The first timer would have fired at 5000
    advance(4000).await;
    assert_eq!(carousel.lock().current(), 1);

    advance(1001).await;
    assert_eq!(carousel.lock().current(), 2);
}

#[tokio::test(start_paused = true)]
async fn staggered_reveal_waits_for_its_slot() {
    let mut reveal = learnerspoint_core::visibility::staggered_reveal(3, Duration::from_millis(200));
    reveal.arm();
    let (reveal, _h) = spawn_driver(reveal);

    advance(599).await;
    assert!(reveal.lock().is_pending());
    advance(2).await;
    assert!(reveal.lock().is_elapsed());
}

#[tokio::test(start_paused = true)]
async fn single_message_rotator_rests_immediately() {
    let (rotator, handle) = spawn_driver(Rotator::new(1, Duration::from_millis(1000)));
    handle.await.unwrap();
    assert_eq!(rotator.lock().index(), 0);
}

#[tokio::test(start_paused = true)]
async fn idle_deadline_does_not_run() {
    let (deadline, handle) = spawn_driver(Deadline::idle(Duration::from_millis(10)));
    handle.await.unwrap();
    assert!(!deadline.lock().is_elapsed());
}
