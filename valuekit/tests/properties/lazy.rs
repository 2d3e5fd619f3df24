use std::cell::Cell;
use std::convert::Infallible;

use proptest::prelude::*;
use valuekit::core::lazy::LazyCache;

proptest! {
    #[test]
    fn producer_runs_once_for_any_read_count(reads in 1usize..64, seed in any::<u32>()) {
        let calls = Cell::new(0u32);
        let cache = LazyCache::new(|| {
            calls.set(calls.get() + 1);
            Ok::<_, Infallible>(seed.wrapping_add(calls.get()))
        });

        let first = *cache.force();
        for _ in 1..reads {
            prop_assert_eq!(*cache.force(), first);
        }
        prop_assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failures_before_success_are_retried(failures in 0u32..8) {
        let calls = Cell::new(0u32);
        let cache = LazyCache::new(|| {
            calls.set(calls.get() + 1);
            if calls.get() <= failures {
                Err(calls.get())
            } else {
                Ok("loaded")
            }
        });

        for attempt in 1..=failures {
            prop_assert_eq!(cache.read(), Err(attempt));
            prop_assert!(!cache.is_loaded());
        }
        prop_assert_eq!(cache.read(), Ok(&"loaded"));
        prop_assert_eq!(cache.read(), Ok(&"loaded"));
        prop_assert_eq!(calls.get(), failures + 1);
    }
}
