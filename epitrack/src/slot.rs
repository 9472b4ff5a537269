use std::sync::atomic::AtomicBool;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use epitrack_core::flight::FlightFlag;
use epitrack_core::{CacheState, EpiError, SourceStatus};

struct Stamped<T> {
    value: Arc<T>,
    at: Instant,
}

/// One source's cached value with its refresh bookkeeping.
///
/// The value is only ever replaced by a single pointer swap under the write
/// lock, so a reader holding an `Arc` keeps a consistent snapshot and never
/// waits on a clone or merge.
pub(crate) struct Slot<T> {
    current: RwLock<Option<Stamped<T>>>,
    last_error: RwLock<Option<EpiError>>,
    pub(crate) in_flight: AtomicBool,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            current: RwLock::new(None),
            last_error: RwLock::new(None),
            in_flight: AtomicBool::new(false),
        }
    }
}

impl<T> Slot<T> {
    pub(crate) fn value(&self) -> Option<Arc<T>> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|s| Arc::clone(&s.value))
    }

    pub(crate) fn age(&self, now: Instant) -> Option<Duration> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|s| now.saturating_duration_since(s.at))
    }

    pub(crate) fn state(&self, now: Instant, ttl: Duration) -> CacheState {
        match self.age(now) {
            None => CacheState::Empty,
            Some(age) if age < ttl => CacheState::Fresh,
            Some(_) => CacheState::Stale,
        }
    }

    /// Publish `value` stamped `at` if `still_valid` holds under the write
    /// lock. `still_valid` must be cheap; it blocks readers while it runs.
    pub(crate) fn publish_when(
        &self,
        value: T,
        at: Instant,
        still_valid: impl FnOnce() -> bool,
    ) -> bool {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if !still_valid() {
            return false;
        }
        *guard = Some(Stamped {
            value: Arc::new(value),
            at,
        });
        drop(guard);
        self.clear_error();
        true
    }

    pub(crate) fn publish(&self, value: T, at: Instant) {
        self.publish_when(value, at, || true);
    }

    /// Copy-on-write update of the current value, keeping its timestamp.
    ///
    /// The clone and `f` run outside the lock; the result is swapped in only
    /// if the published value is still the one it was built from, otherwise
    /// `f` is applied again to the newer value. Returns `false` when the slot
    /// is empty.
    pub(crate) fn modify(&self, f: impl Fn(&mut T)) -> bool
    where
        T: Clone,
    {
        loop {
            let Some(base) = self.value() else {
                return false;
            };
            let mut next = T::clone(&base);
            f(&mut next);

            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            match guard.as_mut() {
                Some(stamped) if Arc::ptr_eq(&stamped.value, &base) => {
                    stamped.value = Arc::new(next);
                    return true;
                }
                Some(_) => {}
                None => return false,
            }
        }
    }

    pub(crate) fn record_error(&self, error: EpiError) {
        *self.last_error.write().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    fn clear_error(&self) {
        *self.last_error.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub(crate) fn status(&self, now: Instant, ttl: Duration) -> SourceStatus {
        SourceStatus {
            state: self.state(now, ttl),
            in_flight: self.in_flight.is_active(),
            age: self.age(now),
            last_error: self
                .last_error
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn state_follows_age_against_ttl() {
        let slot: Slot<u32> = Slot::default();
        let t0 = Instant::now();
        let ttl = Duration::from_secs(10);
        assert_eq!(slot.state(t0, ttl), CacheState::Empty);

        slot.publish(1, t0);
        assert_eq!(slot.state(t0 + Duration::from_secs(9), ttl), CacheState::Fresh);
        assert_eq!(slot.state(t0 + ttl, ttl), CacheState::Stale);
    }

    #[test]
    fn modify_swaps_value_and_keeps_stamp() {
        let slot: Slot<Vec<u32>> = Slot::default();
        assert!(!slot.modify(|v| v.push(1)));

        let t0 = Instant::now();
        slot.publish(vec![1], t0);
        let before = slot.value().unwrap();
        assert!(slot.modify(|v| v.push(2)));

        assert_eq!(*before, vec![1]);
        assert_eq!(*slot.value().unwrap(), vec![1, 2]);
        assert_eq!(slot.age(t0), Some(Duration::ZERO));
    }

    #[test]
    fn modify_reapplies_when_value_replaced_meanwhile() {
        let slot: Slot<Vec<u32>> = Slot::default();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(5);
        slot.publish(vec![1], t0);

        let calls = Cell::new(0);
        assert!(slot.modify(|v| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                // Runs outside the lock, so a concurrent publish can land here.
                slot.publish(vec![10], t1);
            }
            v.push(2);
        }));

        assert_eq!(calls.get(), 2);
        assert_eq!(*slot.value().unwrap(), vec![10, 2]);
        assert_eq!(slot.age(t1), Some(Duration::ZERO));
    }

    #[test]
    fn publish_when_skips_invalidated_value() {
        let slot: Slot<u32> = Slot::default();
        let t0 = Instant::now();
        slot.record_error(EpiError::shape("bad"));
        assert!(!slot.publish_when(7, t0, || false));
        assert!(slot.value().is_none());
        assert!(slot.status(t0, Duration::from_secs(1)).last_error.is_some());
        assert!(slot.publish_when(7, t0, || true));
        assert_eq!(*slot.value().unwrap(), 7);
    }

    #[test]
    fn publish_clears_last_error() {
        let slot: Slot<u32> = Slot::default();
        let t0 = Instant::now();
        slot.record_error(EpiError::shape("bad"));
        assert!(slot.status(t0, Duration::from_secs(1)).last_error.is_some());
        slot.publish(7, t0);
        assert!(slot.status(t0, Duration::from_secs(1)).last_error.is_none());
    }
}
