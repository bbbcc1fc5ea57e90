use core::time::Duration as StdDuration;

use crate::unit::ChronoUnit;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// An immutable span of time: signed whole seconds plus a nanosecond remainder.
///
/// The nanosecond part is always in `0..1_000_000_000` and counts forward from `seconds`, so
/// one and a half seconds in the past is `{ seconds: -2, nanos: 500_000_000 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
    seconds: i64,
    nanos: u32,
}

impl Span {
    pub const ZERO: Span = Span {
        seconds: 0,
        nanos: 0,
    };

    /// Creates a [`Span`] from whole seconds and a nanosecond adjustment of any size or sign.
    ///
    /// The adjustment is carried into `seconds` so the stored nanoseconds stay in range.
    /// Saturates at the `i64` seconds bounds.
    #[must_use]
    pub const fn new(seconds: i64, nanos_adjustment: i64) -> Self {
        Self {
            seconds: seconds.saturating_add(nanos_adjustment.div_euclid(NANOS_PER_SECOND)),
            nanos: nanos_adjustment.rem_euclid(NANOS_PER_SECOND) as u32,
        }
    }

    #[must_use]
    pub const fn seconds(seconds: i64) -> Self {
        Self::new(seconds, 0)
    }

    #[must_use]
    pub const fn nanos(nanos: i64) -> Self {
        Self::new(0, nanos)
    }

    /// `count` lengths of the built-in `unit`, or `None` on overflow.
    #[must_use]
    pub fn of(count: i64, unit: ChronoUnit) -> Option<Self> {
        unit.length().checked_mul(count)
    }

    #[must_use]
    pub const fn whole_seconds(&self) -> i64 {
        self.seconds
    }

    #[must_use]
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    #[must_use]
    pub fn checked_add(self, rhs: Span) -> Option<Span> {
        let mut seconds = self.seconds.checked_add(rhs.seconds)?;
        // Both parts are below one second, so the sum fits comfortably in a u32.
        let mut nanos = self.nanos + rhs.nanos;
        if i64::from(nanos) >= NANOS_PER_SECOND {
            seconds = seconds.checked_add(1)?;
            nanos -= NANOS_PER_SECOND as u32;
        }
        Some(Span { seconds, nanos })
    }

    #[must_use]
    pub fn checked_mul(self, rhs: i64) -> Option<Span> {
        let nanos_per_second = i128::from(NANOS_PER_SECOND);
        let total = (i128::from(self.seconds) * nanos_per_second + i128::from(self.nanos))
            .checked_mul(i128::from(rhs))?;
        Some(Span {
            seconds: i64::try_from(total.div_euclid(nanos_per_second)).ok()?,
            nanos: u32::try_from(total.rem_euclid(nanos_per_second)).ok()?,
        })
    }
}

impl From<StdDuration> for Span {
    /// Durations past `i64::MAX` seconds saturate.
    fn from(duration: StdDuration) -> Self {
        Span {
            seconds: i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
            nanos: duration.subsec_nanos(),
        }
    }
}

impl From<time::Duration> for Span {
    fn from(duration: time::Duration) -> Self {
        // `time` keeps the nanoseconds on the same side of zero as the seconds.
        Span::new(
            duration.whole_seconds(),
            i64::from(duration.subsec_nanoseconds()),
        )
    }
}
