use thiserror::Error;

/// Errors raised while building units, catalogs or formatting a span.
///
/// All of them are usage errors: retrying the same call fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrettyError {
    /// A unit length is not a positive whole number of either seconds or nanoseconds.
    #[error(
        "units must be a whole number of either seconds or nanoseconds, not both. Culprit: {unit}"
    )]
    UnsupportedUnit { unit: String },

    #[error("a different unit is already registered as {unit}")]
    DuplicateUnit { unit: String },

    #[error("no display name registered for unit {unit}")]
    MissingName { unit: String },

    #[error("units must be listed from largest to smallest, but {smaller} comes before {larger}")]
    UnitsOutOfOrder { larger: String, smaller: String },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown zero policy: {0}")]
    UnknownPolicy(String),
}
