use std::{error, io::Write};

use clap::{Args, Subcommand, ValueEnum};
use durfmt_printer::{
    DEFAULT_SHORTENED_LENGTH, DEFAULT_UNITS, FormatSpec, Settings, TemporalUnit, ZeroPolicy,
};
use log::{debug, error};

mod format;
mod since;
mod units;

/// Command result type.
pub type CmdResult<T> = std::result::Result<T, Box<dyn error::Error>>;

#[derive(Subcommand, Debug)]
#[command(infer_subcommands = true)]
pub enum Cmd {
    /// Format a span given as seconds and nanoseconds.
    Format(format::Cmd),

    /// Format the time elapsed since a unix timestamp.
    Since(since::Cmd),

    /// List every unit durfmt can print.
    Units(units::Cmd),
}

impl Cmd {
    pub fn run(self, settings: &Settings) {
        // CLI commands block the current thread until they resolve.
        let output = match self {
            Self::Format(format) => format.render(settings),
            Self::Since(since) => since.run(settings),
            Self::Units(units) => Ok(units.render(settings)),
        };

        match output {
            Ok(output) => write_out(&output),
            Err(err) => {
                error!("{err}");
                eprintln!("durfmt: {err}");
                std::process::exit(1);
            }
        }
    }
}

/// Presets of the format parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// The three largest non-zero units.
    Shortened,
    /// Every non-zero unit.
    Nonzero,
    /// Every unit from the first non-zero one on.
    Full,
    /// The configured parameters.
    #[default]
    Custom,
}

/// Format parameters shared by the commands that print a span.
#[derive(Args, Debug, Default, Clone)]
pub struct FormatArgs {
    /// Preset to start from
    #[arg(long, short, value_enum, default_value_t)]
    mode: Mode,

    /// Comma separated units to print, largest first
    #[arg(long, short, value_delimiter = ',')]
    units: Option<Vec<String>>,

    /// Print at most this many units
    #[arg(long, short)]
    cap: Option<usize>,

    /// How to handle units that do not fit
    #[arg(long, short, value_enum)]
    policy: Option<ZeroPolicy>,

    /// Text placed between units
    #[arg(long, short)]
    separator: Option<String>,

    /// Fail unless units are listed from largest to smallest
    #[arg(long)]
    strict: bool,
}

impl FormatArgs {
    /// Build the format parameters for the selected mode, with any flags applied on top.
    fn spec(&self, settings: &Settings) -> CmdResult<FormatSpec> {
        let units = match &self.units {
            Some(names) => settings.resolve_units(names)?,
            None if self.mode == Mode::Custom => settings.spec.units.clone(),
            None => TemporalUnit::list(DEFAULT_UNITS),
        };

        let mut spec = match self.mode {
            Mode::Shortened => FormatSpec::shortened(units, DEFAULT_SHORTENED_LENGTH),
            Mode::Nonzero => FormatSpec::nonzero(units),
            Mode::Full => FormatSpec::full(units),
            Mode::Custom => FormatSpec {
                units,
                ..settings.spec.clone()
            },
        };

        if let Some(cap) = self.cap {
            spec.cap = Some(cap);
        }
        if let Some(policy) = self.policy {
            spec.zero_policy = policy;
        }
        if let Some(separator) = &self.separator {
            spec.separator.clone_from(separator);
        }
        spec.strict_order |= self.strict;

        debug!("format spec: {spec:?}");
        Ok(spec)
    }
}

/// Write the `output` out to stdout
fn write_out(output: &str) {
    let w = std::io::stdout();
    let mut w = w.lock();
    let write = writeln!(w, "{output}");
    if let Err(err) = write {
        error!("write error {}", err);
        std::process::exit(1);
    }
    let _ = w.flush();
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use durfmt_printer::{ChronoUnit, CustomUnit, Span};

    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        cmd: Cmd,
    }

    fn parse(args: &[&str]) -> Cmd {
        TestCli::try_parse_from(std::iter::once("durfmt").chain(args.iter().copied()))
            .unwrap()
            .cmd
    }

    #[test]
    fn test_parse_format() {
        let Cmd::Format(_) = parse(&["format", "90", "--mode", "full"]) else {
            panic!("expected format command");
        };
        let Cmd::Units(_) = parse(&["units"]) else {
            panic!("expected units command");
        };
    }

    #[test]
    fn test_spec_custom_mode_uses_settings() {
        let mut settings = Settings::default();
        settings.spec.separator = String::from(", ");
        settings.spec.cap = Some(2);

        let spec = FormatArgs::default().spec(&settings).unwrap();
        assert_eq!(spec, settings.spec);
    }

    #[test]
    fn test_spec_presets_ignore_settings() {
        let mut settings = Settings::default();
        settings.spec.separator = String::from(", ");

        let args = FormatArgs {
            mode: Mode::Shortened,
            ..FormatArgs::default()
        };
        let spec = args.spec(&settings).unwrap();
        assert_eq!(
            spec,
            FormatSpec::shortened(TemporalUnit::list(DEFAULT_UNITS), DEFAULT_SHORTENED_LENGTH)
        );
    }

    #[test]
    fn test_spec_flags_override() {
        let mut settings = Settings::default();
        settings
            .catalog
            .register_custom(
                CustomUnit::new("fortnight", Span::seconds(1_209_600)),
                "fortnight",
                "fortnights",
            )
            .unwrap();

        let args = FormatArgs {
            mode: Mode::Full,
            units: Some(vec!["fortnight".to_string(), "days".to_string()]),
            cap: Some(1),
            policy: Some(ZeroPolicy::KeepAll),
            separator: Some(String::from("; ")),
            strict: true,
        };
        let spec = args.spec(&settings).unwrap();
        assert_eq!(spec.units[1], TemporalUnit::from(ChronoUnit::Days));
        assert_eq!(spec.cap, Some(1));
        assert_eq!(spec.zero_policy, ZeroPolicy::KeepAll);
        assert_eq!(spec.separator, "; ");
        assert!(spec.strict_order);
    }

    #[test]
    fn test_spec_unknown_unit() {
        let args = FormatArgs {
            units: Some(vec!["lightyears".to_string()]),
            ..FormatArgs::default()
        };
        let err = args.spec(&Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown unit: lightyears");
    }
}
