//! Counting how many whole units fit into what is left of a span.

use crate::{
    error::PrettyError,
    span::Span,
    unit::{TemporalUnit, UnitLength},
};

/// What is left of a span while it is being split into units.
///
/// Seconds and nanoseconds are tracked apart; a unit is measured in exactly one of them, so
/// nothing is counted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Remainder {
    pub seconds: i64,
    pub nanos: i64,
}

impl From<Span> for Remainder {
    fn from(span: Span) -> Self {
        Self {
            seconds: span.whole_seconds(),
            nanos: i64::from(span.subsec_nanos()),
        }
    }
}

impl Remainder {
    /// Number of whole `length`s in the remainder, truncated towards zero.
    pub fn fit_count(&self, length: UnitLength) -> i64 {
        match length {
            // Lengths past i64::MAX never fit.
            UnitLength::Seconds(seconds) => i64::try_from(seconds.get())
                .map_or(0, |seconds| self.seconds / seconds),
            UnitLength::Nanos(nanos) => self.nanos / i64::from(nanos.get()),
        }
    }

    /// Remove `count` lengths from the remainder.
    pub fn take(&mut self, count: i64, length: UnitLength) {
        match length {
            UnitLength::Seconds(seconds) => {
                if let Ok(seconds) = i64::try_from(seconds.get()) {
                    self.seconds -= count * seconds;
                }
            }
            UnitLength::Nanos(nanos) => self.nanos -= count * i64::from(nanos.get()),
        }
    }
}

/// Number of whole `unit`s that fit into the remaining seconds and nanoseconds.
///
/// Units measured in nanoseconds only divide `nanos_remaining`, and units measured in seconds
/// only divide `seconds_remaining`.
///
/// # Errors
///
/// Returns [`PrettyError::UnsupportedUnit`] if the unit length mixes seconds and nanoseconds.
pub fn fit_count(
    seconds_remaining: i64,
    nanos_remaining: i64,
    unit: &TemporalUnit,
) -> Result<i64, PrettyError> {
    let remainder = Remainder {
        seconds: seconds_remaining,
        nanos: nanos_remaining,
    };
    Ok(remainder.fit_count(unit.length()?))
}
