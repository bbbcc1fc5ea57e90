use std::{collections::HashMap, sync::LazyLock};

use clap::ValueEnum;
use log::debug;
use typed_builder::TypedBuilder;

use crate::{
    error::PrettyError,
    unit::{ChronoUnit, TemporalUnit},
};

static BUILTIN: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::default);

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
/// Display names for one unit.
///
/// * `singular`: used when exactly one unit fits, "1 hour".
/// * `plural`: used for every other count, "0 hours", "2 hours".
pub struct NameEntry {
    #[builder(setter(into))]
    pub singular: String,

    #[builder(setter(into))]
    pub plural: String,
}

impl From<ChronoUnit> for NameEntry {
    fn from(unit: ChronoUnit) -> Self {
        NameEntry::builder()
            .singular(unit.singular())
            .plural(unit.plural())
            .build()
    }
}

/// Human readable names for units of time.
///
/// A new catalog knows every [`ChronoUnit`]. Registering names needs `&mut self`, so a catalog
/// shared between threads has to be wrapped in a lock by its owner; formatting only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCatalog {
    names: HashMap<TemporalUnit, NameEntry>,
}

impl Default for UnitCatalog {
    fn default() -> Self {
        let names = ChronoUnit::ALL
            .into_iter()
            .map(|unit| (TemporalUnit::from(unit), NameEntry::from(unit)))
            .collect();
        Self { names }
    }
}

impl UnitCatalog {
    /// The shared, read-only catalog of built-in names.
    #[must_use]
    pub fn builtin() -> &'static UnitCatalog {
        &BUILTIN
    }

    /// A catalog without any names, not even the built-in ones.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    #[must_use]
    pub fn singular(&self, unit: &TemporalUnit) -> Option<&str> {
        self.names.get(unit).map(|entry| entry.singular.as_str())
    }

    #[must_use]
    pub fn plural(&self, unit: &TemporalUnit) -> Option<&str> {
        self.names.get(unit).map(|entry| entry.plural.as_str())
    }

    #[must_use]
    pub fn get(&self, unit: &TemporalUnit) -> Option<&NameEntry> {
        self.names.get(unit)
    }

    /// Add or replace the display names for `unit`.
    ///
    /// * `unit`: any unit, including the built-in ones.
    /// * `singular`: name used for a count of one.
    /// * `plural`: name used for every other count.
    ///
    /// # Errors
    ///
    /// - [`PrettyError::UnsupportedUnit`] if the unit length is not a whole number of seconds
    ///   or a whole number of nanoseconds.
    /// - [`PrettyError::DuplicateUnit`] if a different unit with the same identifier is
    ///   already catalogued.
    ///
    /// The catalog is left untouched on error.
    pub fn register_custom(
        &mut self,
        unit: impl Into<TemporalUnit>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Result<(), PrettyError> {
        let unit = unit.into();
        unit.length()?;
        if self
            .names
            .keys()
            .any(|existing| existing.id() == unit.id() && *existing != unit)
        {
            return Err(PrettyError::DuplicateUnit {
                unit: unit.to_string(),
            });
        }

        let entry = NameEntry::builder()
            .singular(singular)
            .plural(plural)
            .build();
        debug!("registering {unit} as {entry:?}");
        self.names.insert(unit, entry);
        Ok(())
    }

    /// Find a catalogued unit by identifier or by one of its display names.
    ///
    /// Identifiers are unique and win over display names, so a custom unit can not hide a
    /// built-in one by borrowing its plural. Display names shared by several units resolve to
    /// the shortest of them.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<TemporalUnit> {
        if let Some(unit) = self.names.keys().find(|unit| unit.id() == name) {
            return Some(unit.clone());
        }

        if let Ok(unit) = ChronoUnit::from_str(name, true) {
            let unit = TemporalUnit::from(unit);
            if self.names.contains_key(&unit) {
                return Some(unit);
            }
        }

        self.entries()
            .into_iter()
            .find(|(_, entry)| entry.singular == name || entry.plural == name)
            .map(|(unit, _)| unit.clone())
    }

    /// Every catalogued unit with its names, from the shortest to the longest.
    #[must_use]
    pub fn entries(&self) -> Vec<(&TemporalUnit, &NameEntry)> {
        let mut entries: Vec<_> = self.names.iter().collect();
        entries.sort_by(|(a, _), (b, _)| {
            a.declared_length()
                .cmp(&b.declared_length())
                .then_with(|| a.id().cmp(b.id()))
        });
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
