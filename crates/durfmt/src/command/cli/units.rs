use clap::Parser;
use durfmt_printer::{Settings, TemporalUnit, UnitLength};

#[derive(Debug, Parser)]
pub struct Cmd {}

impl Cmd {
    /// One line per catalogued unit: identifier, names and length.
    pub fn render(&self, settings: &Settings) -> String {
        settings
            .catalog
            .entries()
            .into_iter()
            .map(|(unit, names)| {
                format!(
                    "{:<10} {:<12} {:<13} {}",
                    unit.id(),
                    names.singular,
                    names.plural,
                    describe_length(unit)
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn describe_length(unit: &TemporalUnit) -> String {
    match unit.length() {
        Ok(UnitLength::Seconds(seconds)) => format!("{seconds}s"),
        Ok(UnitLength::Nanos(nanos)) => format!("{nanos}ns"),
        Err(_) => String::from("unsupported"),
    }
}
