use clap::Parser;
use durfmt_printer::{Settings, Span};

use super::{CmdResult, FormatArgs};

#[derive(Debug, Parser)]
pub struct Cmd {
    /// Whole seconds of the span
    #[arg(allow_negative_numbers = true)]
    seconds: i64,

    /// Nanoseconds added to the seconds
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    nanos: i64,

    #[command(flatten)]
    format: FormatArgs,
}

impl Cmd {
    /// Render the span given on the command line.
    pub fn render(&self, settings: &Settings) -> CmdResult<String> {
        let spec = self.format.spec(settings)?;
        let span = Span::new(self.seconds, self.nanos);
        Ok(settings.printer().format(span, &spec)?)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use durfmt_common::config::parse_config;
    use insta::assert_snapshot;

    use super::*;

    // 12 years 4 months 10 hours 30 seconds
    const SECONDS: &str = "389238438";
    const NANOS: &str = "999000777";

    fn render(args: &[&str]) -> String {
        render_with(&Settings::default(), args)
    }

    fn render_with(settings: &Settings, args: &[&str]) -> String {
        let cmd = Cmd::try_parse_from(std::iter::once("format").chain(args.iter().copied())).unwrap();
        cmd.render(settings).unwrap()
    }

    #[test]
    fn test_presets() {
        assert_snapshot!(render(&[SECONDS, NANOS, "--mode", "shortened"]), @"12 years 4 months 10 hours");
        assert_snapshot!(render(&[SECONDS, NANOS, "--mode", "nonzero"]), @"12 years 4 months 10 hours 30 seconds 999 milliseconds 777 nanoseconds");
        assert_snapshot!(render(&[SECONDS, NANOS, "--mode", "full"]), @"12 years 4 months 0 days 10 hours 0 minutes 30 seconds 999 milliseconds 0 microseconds 777 nanoseconds");
    }

    #[test]
    fn test_default_mode() {
        assert_snapshot!(render(&["3725"]), @"1 hour 2 minutes 5 seconds");
    }

    #[test]
    fn test_flags() {
        assert_snapshot!(
            render(&[SECONDS, "-u", "years,weeks,hours", "-p", "keep-all", "-s", ", "]),
            @"12 years, 17 weeks, 75 hours"
        );
        assert_snapshot!(render(&[SECONDS, "--cap", "0"]), @"");
    }

    #[test]
    fn test_negative_span() {
        assert_snapshot!(render(&["-1", "-500000000", "-m", "nonzero"]), @"-2 seconds 500 milliseconds");
    }

    #[test]
    fn test_configured_custom_unit() {
        let config = parse_config(
            r#"
[format]
units = ["fortnight", "days"]
separator = " and "

[[units]]
id = "fortnight"
seconds = 1209600
singular = "fortnight"
plural = "fortnights"
"#,
        )
        .unwrap();
        let settings = Settings::from_config(&config).unwrap();
        assert_snapshot!(render_with(&settings, &["1468800"]), @"1 fortnight and 3 days");
    }

    #[test]
    fn test_unsupported_unit_errors() {
        let cmd = Cmd::try_parse_from(["format", "10", "--units", "forever,seconds"]).unwrap();
        let err = cmd.render(&Settings::default()).unwrap_err();
        assert!(err.to_string().contains("forever"));
    }
}
