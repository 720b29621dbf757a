//! Fill-close-drain lifecycle of the bounded queue

use semprobe::{BoundedQueue, Error};

#[test]
fn fill_close_drain_preserves_fifo_order() {
    crate::init_tracing();

    let mut queue = BoundedQueue::with_capacity(3);
    queue.push(100).unwrap();
    queue.push(200).unwrap();
    queue.push(300).unwrap();

    let mut received = Vec::new();
    for value in queue.close() {
        received.push(value);
    }

    assert_eq!(received, [100, 200, 300]);
}

#[test]
fn overfilling_reports_the_capacity() {
    let mut queue = BoundedQueue::with_capacity(3);
    for i in 0..3 {
        queue.push(i).unwrap();
    }

    let err = queue.push(3).unwrap_err();
    assert!(matches!(err, Error::QueueFull { capacity: 3 }));
}

#[test]
fn drain_terminates_cleanly_after_last_item() {
    let mut queue = BoundedQueue::with_capacity(2);
    queue.push('a').unwrap();
    queue.push('b').unwrap();

    let mut closed = queue.close();
    assert_eq!(closed.next(), Some('a'));
    assert_eq!(closed.next(), Some('b'));
    // Closure is the terminal, non-error end-of-data signal
    assert_eq!(closed.next(), None);
    assert_eq!(closed.next(), None);
}
