use clap::Parser;
use durfmt_printer::{Settings, Span};
use log::debug;
use time::OffsetDateTime;

use super::{CmdResult, FormatArgs};

#[derive(Debug, Parser)]
pub struct Cmd {
    /// Unix timestamp (seconds since epoch, utc) to measure from
    #[arg(allow_negative_numbers = true)]
    timestamp: i64,

    #[command(flatten)]
    format: FormatArgs,
}

impl Cmd {
    pub fn run(&self, settings: &Settings) -> CmdResult<String> {
        self.render(settings, &OffsetDateTime::now_utc)
    }

    /// Render the time between the timestamp and `now()`.
    ///
    /// Timestamps in the future produce a negative span.
    fn render(&self, settings: &Settings, now: &dyn Fn() -> OffsetDateTime) -> CmdResult<String> {
        let then = OffsetDateTime::from_unix_timestamp(self.timestamp)?;
        let since = Span::from(now() - then);
        debug!("{since:?} since {then}");

        let spec = self.format.spec(settings)?;
        Ok(settings.printer().format(since, &spec)?)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    // Fixed "now" time: 1700000000 (2023-11-14 22:13:20 UTC)
    fn now() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }

    fn render(args: &[&str]) -> String {
        let cmd = Cmd::try_parse_from(std::iter::once("since").chain(args.iter().copied())).unwrap();
        cmd.render(&Settings::default(), &now).unwrap()
    }

    #[test]
    fn test_since() {
        assert_snapshot!(render(&["1699999995"]), @"5 seconds");
        assert_snapshot!(render(&["1699989000", "-m", "full"]), @"3 hours 3 minutes 20 seconds 0 milliseconds 0 microseconds 0 nanoseconds");
        assert_snapshot!(render(&["1700000000"]), @"");
    }

    #[test]
    fn test_future_timestamp() {
        assert_snapshot!(render(&["1700000120", "-m", "shortened"]), @"-2 minutes");
    }

    #[test]
    fn test_invalid_timestamp() {
        let timestamp = i64::MAX.to_string();
        let cmd = Cmd::try_parse_from(["since", timestamp.as_str()]).unwrap();
        assert!(cmd.render(&Settings::default(), &now).is_err());
    }
}
