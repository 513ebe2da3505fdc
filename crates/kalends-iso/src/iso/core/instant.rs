//! The comparison capability shared by every calendar value type.

use std::cmp::Ordering;

pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * MICROS_PER_SECOND;

/// A UTC-normalized point on the timeline, at microsecond resolution.
///
/// Civil values resolve as if their fields were UTC; offset values subtract
/// their offset first. Time-only values live on epoch day 0 (shifted by the
/// offset where there is one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    epoch_day: i64,
    /// Always in `0..MICROS_PER_DAY`.
    micro_of_day: i64,
}

impl Instant {
    /// Builds an instant, carrying whole days out of `micro_of_day`.
    pub(crate) const fn from_parts(epoch_day: i64, micro_of_day: i64) -> Self {
        Self {
            epoch_day: epoch_day + micro_of_day.div_euclid(MICROS_PER_DAY),
            micro_of_day: micro_of_day.rem_euclid(MICROS_PER_DAY),
        }
    }

    /// Moves the instant by a signed number of seconds.
    pub(crate) const fn shifted_seconds(self, seconds: i64) -> Self {
        Self::from_parts(
            self.epoch_day,
            self.micro_of_day + seconds * MICROS_PER_SECOND,
        )
    }

    /// Days since 1970-01-01.
    #[must_use]
    pub const fn epoch_day(self) -> i64 {
        self.epoch_day
    }

    /// Microseconds since the start of [`Self::epoch_day`].
    #[must_use]
    pub const fn micro_of_day(self) -> i64 {
        self.micro_of_day
    }

    /// Microseconds since 1970-01-01T00:00:00Z.
    #[must_use]
    pub const fn epoch_microseconds(self) -> i128 {
        self.epoch_day as i128 * MICROS_PER_DAY as i128 + self.micro_of_day as i128
    }
}

/// Resolves a value to its [`Instant`].
pub trait Temporal {
    fn instant(&self) -> Instant;

    /// Orders two values of possibly different types by instant.
    fn compare_instant<T: Temporal + ?Sized>(&self, other: &T) -> Ordering {
        self.instant().cmp(&other.instant())
    }

    fn is_same_instant<T: Temporal + ?Sized>(&self, other: &T) -> bool {
        self.instant() == other.instant()
    }

    fn is_before<T: Temporal + ?Sized>(&self, other: &T) -> bool {
        self.instant() < other.instant()
    }

    fn is_after<T: Temporal + ?Sized>(&self, other: &T) -> bool {
        self.instant() > other.instant()
    }
}

/// Implements `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash` through
/// [`Temporal::instant`], so that equal instants compare and hash equal
/// regardless of the stored offset.
macro_rules! impl_instant_ordering {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::iso::core::Temporal::is_same_instant(self, other)
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                $crate::iso::core::Temporal::compare_instant(self, other)
            }
        }

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::iso::core::Temporal::instant(self), state);
            }
        }
    )+};
}

pub(crate) use impl_instant_ordering;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_days_both_ways() {
        let late = Instant::from_parts(0, MICROS_PER_DAY + 5);
        assert_eq!(late.epoch_day(), 1);
        assert_eq!(late.micro_of_day(), 5);

        let early = Instant::from_parts(0, -1);
        assert_eq!(early.epoch_day(), -1);
        assert_eq!(early.micro_of_day(), MICROS_PER_DAY - 1);
    }

    #[test]
    fn shifting_by_offset() {
        // 19:00 at +01:00 is 18:00 UTC
        let local = Instant::from_parts(10, 19 * 3600 * MICROS_PER_SECOND);
        let utc = local.shifted_seconds(-3600);
        assert_eq!(utc, Instant::from_parts(10, 18 * 3600 * MICROS_PER_SECOND));
    }

    #[test]
    fn ordering_is_lexicographic_on_day_then_time() {
        let a = Instant::from_parts(1, 0);
        let b = Instant::from_parts(0, MICROS_PER_DAY - 1);
        assert!(a > b);
        assert_eq!(a.epoch_microseconds() - b.epoch_microseconds(), 1);
    }
}
