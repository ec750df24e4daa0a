use std::fmt::Write;

use chrono::NaiveDateTime;
use colored::Colorize;
use log::{
    Level, Record,
    kv::{self, Key, VisitSource},
};

use crate::config::Preset;

/// `2006 Jan 2 (Mon) 15:04:05`
pub const TIME_FORMAT: &str = "%Y %b %-d (%a) %H:%M:%S";

fn encode_level(level: Level, colored: bool) -> String {
    if !colored {
        return format!("[{}]", level.as_str());
    }
    let level = match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".blue(),
        Level::Debug => "DEBUG".green(),
        Level::Trace => "TRACE".purple(),
    };
    format!("[{level}]")
}

/// Renders key/values as `key=value` separated by spaces, quoting strings.
struct Pairs<'a>(&'a mut String);

impl<'kvs> VisitSource<'kvs> for Pairs<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        let written = match value.to_borrowed_str() {
            Some(s) => write!(self.0, "{key}={s:?}"),
            None => write!(self.0, "{key}={value}"),
        };
        written.map_err(|_| kv::Error::msg("unable to render log field"))
    }
}

/// Formats one record as a console line:
/// `<time>\t[<LEVEL>]\t[<target>\t]<message>[\t<key>=<value> ...]`.
pub fn format_record(record: &Record, preset: &Preset, time: NaiveDateTime) -> String {
    let mut line = format!(
        "{}\t{}\t",
        time.format(TIME_FORMAT),
        encode_level(record.level(), preset.colored_level)
    );
    if preset.show_target && !record.target().is_empty() {
        line.push_str(record.target());
        line.push('\t');
    }
    write!(line, "{}", record.args()).ok();

    let mut pairs = String::new();
    record.key_values().visit(&mut Pairs(&mut pairs)).ok();
    if !pairs.is_empty() {
        line.push('\t');
        line.push_str(&pairs);
    }
    line
}
