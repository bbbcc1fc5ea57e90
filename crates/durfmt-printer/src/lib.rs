//! Pretty printing of spans of time, "12 years 4 months 10 hours".
//!
//! A [`DurationPrinter`] walks a list of units from the largest to the smallest, takes as many
//! whole units out of the span as fit, and names each count through a [`UnitCatalog`].
//!
//! ```
//! use durfmt_printer::{Span, shortened_to_string};
//!
//! let span = Span::new(3_725, 0);
//! assert_eq!(shortened_to_string(span).unwrap(), "1 hour 2 minutes 5 seconds");
//! ```
pub mod catalog;
pub mod divisor;
pub mod error;
pub mod printer;
pub mod settings;
pub mod span;
pub mod unit;

pub use catalog::{NameEntry, UnitCatalog};
pub use divisor::fit_count;
pub use error::PrettyError;
pub use printer::{
    DEFAULT_SEPARATOR, DEFAULT_SHORTENED_LENGTH, DEFAULT_UNITS, DurationPrinter, FormatSpec,
    ZeroPolicy, full_to_string, nonzero_to_string, shortened_to_string,
};
pub use settings::Settings;
pub use span::Span;
pub use unit::{ChronoUnit, CustomUnit, TemporalUnit, UnitLength};
