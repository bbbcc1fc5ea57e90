use core::fmt;
use std::num::{NonZeroU32, NonZeroU64};

use clap::ValueEnum;

use crate::{error::PrettyError, span::Span};

const SECONDS_PER_YEAR: i64 = 31_556_952; // 365.2425d

/// The built-in units of time.
///
/// Variants are declared from the shortest to the longest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum ChronoUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

impl ChronoUnit {
    pub const ALL: [ChronoUnit; 16] = [
        ChronoUnit::Nanos,
        ChronoUnit::Micros,
        ChronoUnit::Millis,
        ChronoUnit::Seconds,
        ChronoUnit::Minutes,
        ChronoUnit::Hours,
        ChronoUnit::HalfDays,
        ChronoUnit::Days,
        ChronoUnit::Weeks,
        ChronoUnit::Months,
        ChronoUnit::Years,
        ChronoUnit::Decades,
        ChronoUnit::Centuries,
        ChronoUnit::Millennia,
        ChronoUnit::Eras,
        ChronoUnit::Forever,
    ];

    /// The estimated length of the unit.
    ///
    /// Date based units use the average Gregorian year, and `Forever` is the largest
    /// representable span, which mixes seconds and nanoseconds.
    #[must_use]
    pub const fn length(self) -> Span {
        match self {
            Self::Nanos => Span::nanos(1),
            Self::Micros => Span::nanos(1_000),
            Self::Millis => Span::nanos(1_000_000),
            Self::Seconds => Span::seconds(1),
            Self::Minutes => Span::seconds(60),
            Self::Hours => Span::seconds(3_600),
            Self::HalfDays => Span::seconds(43_200),
            Self::Days => Span::seconds(86_400),
            Self::Weeks => Span::seconds(7 * 86_400),
            Self::Months => Span::seconds(SECONDS_PER_YEAR / 12),
            Self::Years => Span::seconds(SECONDS_PER_YEAR),
            Self::Decades => Span::seconds(SECONDS_PER_YEAR * 10),
            Self::Centuries => Span::seconds(SECONDS_PER_YEAR * 100),
            Self::Millennia => Span::seconds(SECONDS_PER_YEAR * 1_000),
            Self::Eras => Span::seconds(SECONDS_PER_YEAR * 1_000_000_000),
            Self::Forever => Span::new(i64::MAX, 999_999_999),
        }
    }

    /// Identifier of the unit, the same one accepted on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Nanos => "nanos",
            Self::Micros => "micros",
            Self::Millis => "millis",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::HalfDays => "half-days",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
            Self::Decades => "decades",
            Self::Centuries => "centuries",
            Self::Millennia => "millennia",
            Self::Eras => "eras",
            Self::Forever => "forever",
        }
    }

    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Nanos => "nanosecond",
            Self::Micros => "microsecond",
            Self::Millis => "millisecond",
            Self::Seconds => "second",
            Self::Minutes => "minute",
            Self::Hours => "hour",
            Self::HalfDays => "half-day",
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Months => "month",
            Self::Years => "year",
            Self::Decades => "decade",
            Self::Centuries => "century",
            Self::Millennia => "millennium",
            Self::Eras => "era",
            Self::Forever => "forever",
        }
    }

    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Nanos => "nanoseconds",
            Self::Micros => "microseconds",
            Self::Millis => "milliseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::HalfDays => "half-days",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
            Self::Decades => "decades",
            Self::Centuries => "centuries",
            Self::Millennia => "millennia",
            Self::Eras => "eras",
            Self::Forever => "forevers",
        }
    }
}

impl fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A caller defined unit of time.
///
/// The length is not checked on construction; units mixing whole seconds with a
/// nanosecond part are rejected wherever they are used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomUnit {
    id: String,
    length: Span,
}

impl CustomUnit {
    #[must_use]
    pub fn new(id: impl Into<String>, length: Span) -> Self {
        Self {
            id: id.into(),
            length,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn length(&self) -> Span {
        self.length
    }
}

/// Any unit of time the printer can divide a span by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemporalUnit {
    Chrono(ChronoUnit),
    Custom(CustomUnit),
}

impl TemporalUnit {
    /// Collect anything unit-like into a unit list.
    pub fn list<I>(units: I) -> Vec<TemporalUnit>
    where
        I: IntoIterator,
        I::Item: Into<TemporalUnit>,
    {
        units.into_iter().map(Into::into).collect()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Chrono(unit) => unit.id(),
            Self::Custom(unit) => unit.id(),
        }
    }

    /// The length as declared, before validation.
    #[must_use]
    pub fn declared_length(&self) -> Span {
        match self {
            Self::Chrono(unit) => unit.length(),
            Self::Custom(unit) => unit.length(),
        }
    }

    /// The validated length of this unit.
    ///
    /// # Errors
    ///
    /// Returns [`PrettyError::UnsupportedUnit`] unless the declared length is a positive whole
    /// number of seconds or a positive whole number of nanoseconds.
    pub fn length(&self) -> Result<UnitLength, PrettyError> {
        UnitLength::try_from(self)
    }
}

impl From<ChronoUnit> for TemporalUnit {
    fn from(unit: ChronoUnit) -> Self {
        Self::Chrono(unit)
    }
}

impl From<CustomUnit> for TemporalUnit {
    fn from(unit: CustomUnit) -> Self {
        Self::Custom(unit)
    }
}

impl fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A unit length which is exactly one of whole seconds or whole nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitLength {
    Seconds(NonZeroU64),
    Nanos(NonZeroU32),
}

impl UnitLength {
    #[must_use]
    pub fn as_span(self) -> Span {
        match self {
            Self::Seconds(seconds) => Span::seconds(i64::try_from(seconds.get()).unwrap_or(i64::MAX)),
            Self::Nanos(nanos) => Span::nanos(i64::from(nanos.get())),
        }
    }
}

impl TryFrom<&TemporalUnit> for UnitLength {
    type Error = PrettyError;

    fn try_from(unit: &TemporalUnit) -> Result<Self, Self::Error> {
        let length = unit.declared_length();
        let seconds = u64::try_from(length.whole_seconds())
            .ok()
            .and_then(NonZeroU64::new);
        let nanos = NonZeroU32::new(length.subsec_nanos());

        match (seconds, nanos) {
            (Some(seconds), None) => Ok(Self::Seconds(seconds)),
            (None, Some(nanos)) if length.whole_seconds() == 0 => Ok(Self::Nanos(nanos)),
            _ => Err(PrettyError::UnsupportedUnit {
                unit: unit.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_distinct() {
        for unit in ChronoUnit::ALL {
            assert!(!unit.singular().is_empty());
            assert!(!unit.plural().is_empty());
            assert_ne!(unit.singular(), unit.plural(), "{unit}");
        }
    }

    #[test]
    fn test_builtin_ids_match_value_enum() {
        for unit in ChronoUnit::ALL {
            assert_eq!(ChronoUnit::from_str(unit.id(), false), Ok(unit));
        }
    }

    #[test]
    fn test_builtins_are_sorted_by_length() {
        let lengths: Vec<Span> = ChronoUnit::ALL.iter().map(|u| u.length()).collect();
        assert!(lengths.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_builtin_lengths() {
        assert_eq!(
            TemporalUnit::from(ChronoUnit::Millis).length(),
            Ok(UnitLength::Nanos(NonZeroU32::new(1_000_000).unwrap()))
        );
        assert_eq!(
            TemporalUnit::from(ChronoUnit::Months).length(),
            Ok(UnitLength::Seconds(NonZeroU64::new(2_629_746).unwrap()))
        );
        assert_eq!(
            ChronoUnit::Eras.length(),
            Span::seconds(31_556_952_000_000_000)
        );
    }

    #[test]
    fn test_forever_is_unsupported() {
        assert_eq!(
            TemporalUnit::from(ChronoUnit::Forever).length(),
            Err(PrettyError::UnsupportedUnit {
                unit: "forever".to_string()
            })
        );
    }

    #[test]
    fn test_mixed_custom_length_is_unsupported() {
        let weird = TemporalUnit::from(CustomUnit::new("weird", Span::new(1, 999_000_000)));
        assert!(matches!(
            weird.length(),
            Err(PrettyError::UnsupportedUnit { unit }) if unit == "weird"
        ));
    }

    #[test]
    fn test_zero_and_negative_lengths_are_unsupported() {
        let zero = TemporalUnit::from(CustomUnit::new("zero", Span::ZERO));
        let negative = TemporalUnit::from(CustomUnit::new("negative", Span::seconds(-5)));
        let negative_nanos = TemporalUnit::from(CustomUnit::new("tick", Span::nanos(-10)));
        assert!(zero.length().is_err());
        assert!(negative.length().is_err());
        assert!(negative_nanos.length().is_err());
    }

    #[test]
    fn test_custom_lengths() {
        let fortnight = TemporalUnit::from(CustomUnit::new("fortnight", Span::seconds(1_209_600)));
        assert_eq!(fortnight.length().unwrap().as_span(), Span::seconds(1_209_600));

        let tick = TemporalUnit::from(CustomUnit::new("tick", Span::nanos(100)));
        assert_eq!(
            tick.length(),
            Ok(UnitLength::Nanos(NonZeroU32::new(100).unwrap()))
        );
    }
}
