use fib::{Fib, FibError, MAX_INDEX, fib};
use proptest::prelude::*;

proptest! {
    #[test]
    fn recurrence_holds(n in 2..=MAX_INDEX) {
        let a = fib(n - 2).unwrap();
        let b = fib(n - 1).unwrap();
        prop_assert_eq!(fib(n).unwrap(), a + b);
    }

    #[test]
    fn negative_indices_are_rejected(n in i64::MIN..0) {
        prop_assert_eq!(fib(n), Err(FibError::Negative(n)));
    }

    #[test]
    fn indices_past_max_overflow(n in (MAX_INDEX + 1)..=i64::MAX) {
        prop_assert_eq!(fib(n), Err(FibError::Overflow(n)));
    }

    #[test]
    fn deterministic(n in i64::MIN..=i64::MAX) {
        prop_assert_eq!(fib(n), fib(n));
    }

    #[test]
    fn matches_iterator(n in 0..=MAX_INDEX) {
        let idx = usize::try_from(n).unwrap();
        prop_assert_eq!(fib(n).ok(), Fib::new().nth(idx));
    }
}

#[test]
fn reference_sequence() {
    let got: Vec<u64> = (3..=6).map(|n| fib(n).unwrap()).collect();
    assert_eq!(got, [2, 3, 5, 8]);
}
