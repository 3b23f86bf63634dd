use std::sync::mpsc;
use std::time::Duration;

use pixgrid::fetch::Debouncer;
use tokio::runtime::Handle;

#[tokio::test(flavor = "multi_thread")]
async fn rapid_schedules_collapse_to_the_last() {
    let (tx, rx) = mpsc::channel();
    let mut debouncer = Debouncer::new(Handle::current(), Duration::from_millis(50));

    for value in ["s", "sp", "spo", "sport"] {
        let tx = tx.clone();
        let value = value.to_string();
        debouncer.schedule(move || {
            let _ = tx.send(value);
        });
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let committed = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(committed, "sport");
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn cancel_prevents_the_commit() {
    let (tx, rx) = mpsc::channel::<&'static str>();
    let mut debouncer = Debouncer::new(Handle::current(), Duration::from_millis(50));

    debouncer.schedule(move || {
        let _ = tx.send("never");
    });
    debouncer.cancel();

    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn commit_fires_after_the_quiet_period() {
    let (tx, rx) = mpsc::channel::<&'static str>();
    let mut debouncer = Debouncer::new(Handle::current(), Duration::from_millis(20));

    debouncer.schedule(move || {
        let _ = tx.send("done");
    });

    assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), "done");
}
