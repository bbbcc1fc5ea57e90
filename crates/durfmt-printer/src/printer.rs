use clap::ValueEnum;
use log::trace;
use typed_builder::TypedBuilder;

use crate::{
    catalog::UnitCatalog,
    divisor::Remainder,
    error::PrettyError,
    span::Span,
    unit::{ChronoUnit, TemporalUnit},
};

/// Units generally encountered in the majority of software, from the largest to the smallest.
pub const DEFAULT_UNITS: [ChronoUnit; 9] = [
    ChronoUnit::Years,
    ChronoUnit::Months,
    ChronoUnit::Days,
    ChronoUnit::Hours,
    ChronoUnit::Minutes,
    ChronoUnit::Seconds,
    ChronoUnit::Millis,
    ChronoUnit::Micros,
    ChronoUnit::Nanos,
];

/// Three most significant units are enough to get a feel for a span.
pub const DEFAULT_SHORTENED_LENGTH: usize = 3;

pub const DEFAULT_SEPARATOR: &str = " ";

const NULL: &str = "null";

/// How zero valued units are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ZeroPolicy {
    /// Omit every zero valued unit: "12 years 4 months 10 hours".
    #[default]
    DropAll,
    /// Omit nothing: "0 centuries 12 years 4 months 0 weeks 0 days".
    KeepAll,
    /// Omit zero valued units only until the first non-zero one: "12 years 4 months 0 days".
    DropLeadingOnly,
}

impl ZeroPolicy {
    /// Whether a unit that fits `count` times is left out, given `kept` units already printed.
    fn skips(self, count: i64, kept: usize) -> bool {
        if count != 0 {
            return false;
        }
        match self {
            Self::DropAll => true,
            Self::KeepAll => false,
            Self::DropLeadingOnly => kept == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
/// Parameters for a single formatting call.
///
/// * `units`: units to print, from the largest to the smallest. The order is trusted as given
///   unless `strict_order` is set.
/// * `cap`: how many units to print at most, `None` to print all of them.
/// * `zero_policy`: what to do with units that do not fit at all.
/// * `separator`: placed between printed units.
/// * `strict_order`: fail with [`PrettyError::UnitsOutOfOrder`] on an ascending unit pair.
pub struct FormatSpec {
    #[builder(default = TemporalUnit::list(DEFAULT_UNITS))]
    pub units: Vec<TemporalUnit>,

    #[builder(default)]
    pub cap: Option<usize>,

    #[builder(default)]
    pub zero_policy: ZeroPolicy,

    #[builder(default = DEFAULT_SEPARATOR.to_string(), setter(into))]
    pub separator: String,

    #[builder(default)]
    pub strict_order: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec::builder().build()
    }
}

impl FormatSpec {
    /// Drop zeros and print at most `cap` units.
    #[must_use]
    pub fn shortened(units: Vec<TemporalUnit>, cap: usize) -> Self {
        FormatSpec::builder()
            .units(units)
            .cap(Some(cap))
            .zero_policy(ZeroPolicy::DropAll)
            .build()
    }

    /// Drop zeros, no cap.
    #[must_use]
    pub fn nonzero(units: Vec<TemporalUnit>) -> Self {
        FormatSpec::builder()
            .units(units)
            .zero_policy(ZeroPolicy::DropAll)
            .build()
    }

    /// Drop leading zeros only, no cap.
    #[must_use]
    pub fn full(units: Vec<TemporalUnit>) -> Self {
        FormatSpec::builder()
            .units(units)
            .zero_policy(ZeroPolicy::DropLeadingOnly)
            .build()
    }

    /// Checks the units are listed from the largest to the smallest.
    fn check_order(&self) -> Result<(), PrettyError> {
        for pair in self.units.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            if first.length()?.as_span() < second.length()?.as_span() {
                return Err(PrettyError::UnitsOutOfOrder {
                    larger: second.to_string(),
                    smaller: first.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Turns spans into phrases like "12 years 4 months 10 hours", naming units through a
/// [`UnitCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct DurationPrinter<'c> {
    catalog: &'c UnitCatalog,
}

impl Default for DurationPrinter<'static> {
    fn default() -> Self {
        Self::new(UnitCatalog::builtin())
    }
}

impl<'c> DurationPrinter<'c> {
    #[must_use]
    pub fn new(catalog: &'c UnitCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c UnitCatalog {
        self.catalog
    }

    /// Formats `duration` as described by `spec`.
    ///
    /// Each unit in turn takes as many whole lengths as fit out of what the larger units left
    /// over. A `None` duration prints as `"null"`.
    ///
    /// # Errors
    ///
    /// - [`PrettyError::UnsupportedUnit`] when a unit reached before the cap has an invalid length.
    /// - [`PrettyError::MissingName`] when a printed unit has no name in the catalog.
    /// - [`PrettyError::UnitsOutOfOrder`] when `spec.strict_order` is set and the units ascend.
    pub fn format(
        &self,
        duration: impl Into<Option<Span>>,
        spec: &FormatSpec,
    ) -> Result<String, PrettyError> {
        let Some(duration) = duration.into() else {
            return Ok(String::from(NULL));
        };

        if spec.strict_order {
            spec.check_order()?;
        }

        let cap = spec.cap.unwrap_or(usize::MAX);
        let mut remainder = Remainder::from(duration);
        let mut parts: Vec<String> = Vec::with_capacity(spec.units.len().min(cap));

        for unit in &spec.units {
            // Checked first so a cap of zero never touches a unit.
            if parts.len() >= cap {
                break;
            }

            let length = unit.length()?;
            let count = remainder.fit_count(length);

            if spec.zero_policy.skips(count, parts.len()) {
                continue;
            }

            let name = self.name(unit, count)?;
            trace!("{unit}: {count} {name}");
            parts.push(format!("{count} {name}"));

            remainder.take(count, length);
        }

        Ok(parts.join(spec.separator.as_str()))
    }

    fn name(&self, unit: &TemporalUnit, count: i64) -> Result<&'c str, PrettyError> {
        let name = if count == 1 {
            self.catalog.singular(unit)
        } else {
            self.catalog.plural(unit)
        };
        name.ok_or_else(|| PrettyError::MissingName {
            unit: unit.to_string(),
        })
    }

    /// "12 years 4 months 10 hours": the three largest non-zero default units.
    ///
    /// # Errors
    ///
    /// See [`DurationPrinter::format`].
    pub fn shortened(&self, duration: impl Into<Option<Span>>) -> Result<String, PrettyError> {
        self.shortened_with(
            duration,
            &TemporalUnit::list(DEFAULT_UNITS),
            DEFAULT_SHORTENED_LENGTH,
        )
    }

    /// At most `cap` of the largest non-zero `units`.
    ///
    /// # Errors
    ///
    /// See [`DurationPrinter::format`].
    pub fn shortened_with(
        &self,
        duration: impl Into<Option<Span>>,
        units: &[TemporalUnit],
        cap: usize,
    ) -> Result<String, PrettyError> {
        self.format(duration, &FormatSpec::shortened(units.to_vec(), cap))
    }

    /// "12 years 4 months 10 hours 30 seconds 999 milliseconds 777 nanoseconds": every
    /// non-zero default unit.
    ///
    /// # Errors
    ///
    /// See [`DurationPrinter::format`].
    pub fn nonzero(&self, duration: impl Into<Option<Span>>) -> Result<String, PrettyError> {
        self.nonzero_with(duration, &TemporalUnit::list(DEFAULT_UNITS))
    }

    /// Every non-zero unit of `units`.
    ///
    /// # Errors
    ///
    /// See [`DurationPrinter::format`].
    pub fn nonzero_with(
        &self,
        duration: impl Into<Option<Span>>,
        units: &[TemporalUnit],
    ) -> Result<String, PrettyError> {
        self.format(duration, &FormatSpec::nonzero(units.to_vec()))
    }

    /// "12 years 4 months 0 days 10 hours 0 minutes 30 seconds ...": every default unit from the
    /// first non-zero one on.
    ///
    /// # Errors
    ///
    /// See [`DurationPrinter::format`].
    pub fn full(&self, duration: impl Into<Option<Span>>) -> Result<String, PrettyError> {
        self.full_with(duration, &TemporalUnit::list(DEFAULT_UNITS))
    }

    /// Every unit of `units` from the first non-zero one on.
    ///
    /// # Errors
    ///
    /// See [`DurationPrinter::format`].
    pub fn full_with(
        &self,
        duration: impl Into<Option<Span>>,
        units: &[TemporalUnit],
    ) -> Result<String, PrettyError> {
        self.format(duration, &FormatSpec::full(units.to_vec()))
    }
}

/// [`DurationPrinter::shortened`] over the built-in catalog.
///
/// # Errors
///
/// See [`DurationPrinter::format`].
pub fn shortened_to_string(duration: impl Into<Option<Span>>) -> Result<String, PrettyError> {
    DurationPrinter::default().shortened(duration)
}

/// [`DurationPrinter::nonzero`] over the built-in catalog.
///
/// # Errors
///
/// See [`DurationPrinter::format`].
pub fn nonzero_to_string(duration: impl Into<Option<Span>>) -> Result<String, PrettyError> {
    DurationPrinter::default().nonzero(duration)
}

/// [`DurationPrinter::full`] over the built-in catalog.
///
/// # Errors
///
/// See [`DurationPrinter::format`].
pub fn full_to_string(duration: impl Into<Option<Span>>) -> Result<String, PrettyError> {
    DurationPrinter::default().full(duration)
}
