use core::ops::{Add, AddAssign};
use serde::{Deserialize, Serialize};

/// Cumulative case counts for one region on one date.
///
/// Values are totals as reported upstream; nothing in epitrack diffs them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    /// Confirmed cases.
    pub confirmed: u64,
    /// Deaths.
    pub deaths: u64,
    /// Recovered cases.
    pub recovered: u64,
}

impl Counts {
    /// All-zero counts.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Build counts from the three metrics.
    #[must_use]
    pub const fn new(confirmed: u64, deaths: u64, recovered: u64) -> Self {
        Self {
            confirmed,
            deaths,
            recovered,
        }
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            confirmed: self.confirmed.saturating_add(rhs.confirmed),
            deaths: self.deaths.saturating_add(rhs.deaths),
            recovered: self.recovered.saturating_add(rhs.recovered),
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
