// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use anyhow::{Context, ensure};
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Explicit indices to evaluate
    #[serde(default)]
    pub indices: Vec<i64>,
    /// An inclusive range of indices to evaluate after `indices`
    pub range: Option<IndexRange>,
    /// The verbosity level of logging output
    pub log_level: Option<LogLevel>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IndexRange {
    pub start: i64,
    pub end: i64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        text.parse()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// All indices named by this config, explicit ones first.
    pub fn indices(&self) -> impl Iterator<Item = i64> + '_ {
        self.indices
            .iter()
            .copied()
            .chain(self.range.into_iter().flat_map(RangeInclusive::<i64>::from))
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;

        if let Some(range) = config.range {
            ensure!(
                range.start <= range.end,
                "range start {} is greater than range end {}",
                range.start,
                range.end
            );
        }

        Ok(config)
    }
}

impl From<IndexRange> for RangeInclusive<i64> {
    fn from(range: IndexRange) -> Self {
        range.start..=range.end
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let config: Config = r#"
            indices = [1, 2, 7]
            range = { start = 3, end = 5 }
            log-level = "debug"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.indices().collect::<Vec<_>>(), [1, 2, 7, 3, 4, 5]);
        assert_eq!(config.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn empty_config() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.indices().count(), 0);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn negative_indices_parse() {
        // rejecting them is up to `fib`, not the config
        let config: Config = "indices = [-10]".parse().unwrap();
        assert_eq!(config.indices, [-10]);
    }

    #[test]
    fn backwards_range() {
        let err = "range = { start = 5, end = 1 }"
            .parse::<Config>()
            .unwrap_err();
        assert!(err.to_string().contains("greater than range end"));
    }

    #[test]
    fn unknown_keys() {
        assert!("memoize = true".parse::<Config>().is_err());
        assert!("range = { start = 0, end = 1, step = 2 }".parse::<Config>().is_err());
    }

    #[test]
    fn unknown_log_level() {
        assert!("log-level = \"loud\"".parse::<Config>().is_err());
    }

    #[test]
    fn level_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    }
}
