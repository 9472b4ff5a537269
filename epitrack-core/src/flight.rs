//! At-most-one-in-flight coordination for refresh passes.

use std::sync::atomic::{AtomicBool, Ordering};

/// A flag that admits at most one holder at a time.
pub trait FlightFlag {
    /// Try to become the holder; `false` when someone already holds the flag.
    fn try_begin(&self) -> bool;
    /// Release the flag.
    fn finish(&self);
    /// Whether the flag is currently held.
    fn is_active(&self) -> bool;
}

impl FlightFlag for AtomicBool {
    fn try_begin(&self) -> bool {
        self.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn finish(&self) {
        self.store(false, Ordering::Release);
    }

    fn is_active(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// RAII holder of a [`FlightFlag`]; the flag is released on drop, including
/// when the pass that owns the guard fails or panics.
#[must_use = "the flag is released as soon as the guard is dropped"]
pub struct FlightGuard<'a, F: FlightFlag + ?Sized> {
    flag: &'a F,
}

impl<'a, F: FlightFlag + ?Sized> FlightGuard<'a, F> {
    /// Acquire the flag, or `None` when another pass holds it.
    pub fn try_acquire(flag: &'a F) -> Option<Self> {
        flag.try_begin().then_some(Self { flag })
    }
}

impl<F: FlightFlag + ?Sized> Drop for FlightGuard<'_, F> {
    fn drop(&mut self) {
        self.flag.finish();
    }
}
