//! Capsule state contracts: return sequence and handle independence

use proptest::prelude::*;
use semprobe::Capsule;

#[test]
fn nth_sequential_call_returns_n() {
    crate::init_tracing();

    let mut capsule = Capsule::new();
    for expected in 1..=1000 {
        assert_eq!(capsule.increment(), expected);
    }
}

#[test]
fn fresh_handles_start_over_at_one() {
    let mut first = Capsule::new();
    for _ in 0..10 {
        first.increment();
    }

    let mut second = Capsule::new();
    assert_eq!(second.increment(), 1);
    assert_eq!(first.increment(), 11);
}

proptest! {
    #[test]
    fn any_interleaving_keeps_handles_independent(
        schedule in proptest::collection::vec(any::<bool>(), 0..400)
    ) {
        let mut left = Capsule::new();
        let mut right = Capsule::new();
        let mut left_count = 0i64;
        let mut right_count = 0i64;

        for pick_left in schedule {
            if pick_left {
                left_count += 1;
                prop_assert_eq!(left.increment(), left_count);
            } else {
                right_count += 1;
                prop_assert_eq!(right.increment(), right_count);
            }
        }
    }
}
