use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use keepsake::{CompletionTimer, Seconds};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn completion_fires_exactly_once_per_activation() {
    init_tracing();
    let fired = Arc::new(AtomicUsize::new(0));
    let observer = Arc::clone(&fired);
    let timer = CompletionTimer::after(Seconds(0.05), move || {
        observer.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    std::thread::sleep(Duration::from_millis(200));
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Keeping the guard alive longer cannot re-fire it.
    std::thread::sleep(Duration::from_millis(100));
    drop(timer);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn disposal_before_the_deadline_means_zero_invocations() {
    init_tracing();
    let fired = Arc::new(AtomicUsize::new(0));
    let observer = Arc::clone(&fired);
    let timer = CompletionTimer::after(Seconds(0.25), move || {
        observer.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    // Dispose well before the scheduled fire time.
    std::thread::sleep(Duration::from_millis(20));
    drop(timer);

    std::thread::sleep(Duration::from_millis(400));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn rescheduling_replaces_the_prior_activation() {
    // A config change mid-run drops the old timer and schedules from the
    // new total; only the new activation may signal.
    let fired = Arc::new(AtomicUsize::new(0));

    let first = {
        let observer = Arc::clone(&fired);
        CompletionTimer::after(Seconds(0.3), move || {
            observer.fetch_add(10, Ordering::SeqCst);
        })
        .unwrap()
    };
    drop(first);

    let observer = Arc::clone(&fired);
    let _second = CompletionTimer::after(Seconds(0.05), move || {
        observer.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    std::thread::sleep(Duration::from_millis(400));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
