use clap::ValueEnum;
use durfmt_common::config::Config;
use log::debug;

use crate::{
    catalog::UnitCatalog,
    error::PrettyError,
    printer::{DurationPrinter, FormatSpec, ZeroPolicy},
    span::Span,
    unit::{CustomUnit, TemporalUnit},
};

/// A unit catalog and base format parameters built from the user configuration.
///
/// * `catalog`: built-in names plus every configured custom unit.
/// * `spec`: the configured format parameters, library defaults where unset.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub catalog: UnitCatalog,
    pub spec: FormatSpec,
}

impl Settings {
    /// Applies `config` on top of the library defaults.
    ///
    /// # Errors
    ///
    /// - [`PrettyError::UnsupportedUnit`] if a configured unit has a mixed length.
    /// - [`PrettyError::DuplicateUnit`] if a configured unit reuses the identifier of another.
    /// - [`PrettyError::UnknownUnit`] if the configured unit list names an unknown unit.
    /// - [`PrettyError::UnknownPolicy`] if the configured zero policy is not recognized.
    pub fn from_config(config: &Config) -> Result<Self, PrettyError> {
        let mut catalog = UnitCatalog::default();
        for unit in &config.units {
            let custom = CustomUnit::new(&unit.id, Span::new(unit.seconds, unit.nanos));
            catalog.register_custom(custom, &unit.singular, &unit.plural)?;
        }

        let mut settings = Self {
            catalog,
            spec: FormatSpec::default(),
        };

        if let Some(units) = &config.format.units {
            settings.spec.units = settings.resolve_units(units)?;
        }
        if let Some(policy) = &config.format.policy {
            settings.spec.zero_policy = parse_policy(policy)?;
        }
        if let Some(separator) = &config.format.separator {
            settings.spec.separator.clone_from(separator);
        }
        settings.spec.cap = config.format.cap;

        debug!("settings: {:?}", settings.spec);
        Ok(settings)
    }

    /// Looks up every name in `names` in this catalog.
    ///
    /// # Errors
    ///
    /// Returns [`PrettyError::UnknownUnit`] for the first name the catalog does not know.
    pub fn resolve_units<I, S>(&self, names: I) -> Result<Vec<TemporalUnit>, PrettyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.catalog
                    .resolve(name)
                    .ok_or_else(|| PrettyError::UnknownUnit(name.to_string()))
            })
            .collect()
    }

    #[must_use]
    pub fn printer(&self) -> DurationPrinter<'_> {
        DurationPrinter::new(&self.catalog)
    }
}

/// Parse a zero policy name such as `drop-leading-only`, ignoring case.
///
/// # Errors
///
/// Returns [`PrettyError::UnknownPolicy`] if the name is not a known policy.
pub fn parse_policy(name: &str) -> Result<ZeroPolicy, PrettyError> {
    ZeroPolicy::from_str(name, true).map_err(|_| PrettyError::UnknownPolicy(name.to_string()))
}

#[cfg(test)]
mod tests {
    use durfmt_common::config::{FormatConfig, UnitConfig, parse_config};

    use super::*;
    use crate::unit::ChronoUnit;

    fn fortnight_config() -> UnitConfig {
        UnitConfig {
            id: "fortnight".to_string(),
            seconds: 1_209_600,
            nanos: 0,
            singular: "fortnight".to_string(),
            plural: "fortnights".to_string(),
        }
    }

    #[test]
    fn test_default_config() {
        let settings = Settings::from_config(&Config::default()).unwrap();
        assert_eq!(settings.spec, FormatSpec::default());
        assert_eq!(settings.catalog, UnitCatalog::default());
    }

    #[test]
    fn test_from_toml() {
        let config = parse_config(
            r#"
[format]
units = ["fortnights", "days", "hours"]
cap = 2
policy = "drop-leading-only"
separator = ", "

[[units]]
id = "fortnight"
seconds = 1209600
singular = "fortnight"
plural = "fortnights"
"#,
        )
        .unwrap();
        let settings = Settings::from_config(&config).unwrap();

        assert_eq!(settings.spec.cap, Some(2));
        assert_eq!(settings.spec.zero_policy, ZeroPolicy::DropLeadingOnly);
        assert_eq!(settings.spec.units.len(), 3);

        let phrase = settings
            .printer()
            .format(Span::of(15, ChronoUnit::Days), &settings.spec)
            .unwrap();
        assert_eq!(phrase, "1 fortnight, 1 day");
    }

    #[test]
    fn test_unknown_unit() {
        let config = Config {
            format: FormatConfig {
                units: Some(vec!["years".to_string(), "lightyears".to_string()]),
                ..FormatConfig::default()
            },
            units: Vec::new(),
        };
        assert_eq!(
            Settings::from_config(&config).unwrap_err(),
            PrettyError::UnknownUnit("lightyears".to_string())
        );
    }

    #[test]
    fn test_unknown_policy() {
        let config = Config {
            format: FormatConfig {
                policy: Some("drop-some".to_string()),
                ..FormatConfig::default()
            },
            units: Vec::new(),
        };
        assert_eq!(
            Settings::from_config(&config).unwrap_err(),
            PrettyError::UnknownPolicy("drop-some".to_string())
        );
    }

    #[test]
    fn test_mixed_custom_unit_rejected() {
        let config = Config {
            format: FormatConfig::default(),
            units: vec![UnitConfig {
                nanos: 500,
                ..fortnight_config()
            }],
        };
        assert!(matches!(
            Settings::from_config(&config),
            Err(PrettyError::UnsupportedUnit { .. })
        ));
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(parse_policy("keep-all"), Ok(ZeroPolicy::KeepAll));
        assert_eq!(parse_policy("Drop-All"), Ok(ZeroPolicy::DropAll));
        assert!(parse_policy("keep").is_err());
    }

    #[test]
    fn test_resolve_units_with_custom() {
        let config = Config {
            format: FormatConfig::default(),
            units: vec![fortnight_config()],
        };
        let settings = Settings::from_config(&config).unwrap();
        let units = settings.resolve_units(["fortnight", "days"]).unwrap();
        assert_eq!(units[1], TemporalUnit::from(ChronoUnit::Days));
        assert_eq!(units[0].id(), "fortnight");
    }
}
