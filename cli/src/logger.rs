// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use anstyle::{AnsiColor, Color, Style};
use log::{Level, LevelFilter, log_enabled};
use std::io::Write;

/// Installs the global logger for `fib-cli`.
///
/// The level comes from the number of `--verbose` flags when any are given, otherwise from the
/// config file's `log-level`, otherwise it is info. Per-module directives from `RUST_LOG` still
/// apply, its global level is replaced. Records are prefixed with a right-aligned, colored level
/// name and, at debug and above, the module that emitted them.
pub fn init(verbosity: u8, configured: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();

    builder
        .format_indent(Some(12))
        .filter(None, effective_level(verbosity, configured))
        .format(|f, record| {
            let style = f.default_level_style(record.level()).bold();

            write!(
                f,
                "{style}{:>12}{style:#} ",
                prettyprint_level(record.level())
            )?;

            if log_enabled!(Level::Debug) {
                let style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)));

                write!(f, "{style}[{}]{style:#} ", record.target())?;
            }

            writeln!(f, "{}", record.args())
        })
        .init();
}

fn effective_level(verbosity: u8, configured: Option<LevelFilter>) -> LevelFilter {
    match (verbosity, configured) {
        (0, Some(level)) => level,
        (num, _) => verbosity_level(num).to_level_filter(),
    }
}

/// This maps the occurrence of `--verbose` flags to the correct log level
fn verbosity_level(num: u8) -> Level {
    match num {
        0 => Level::Info,
        1 => Level::Debug,
        2.. => Level::Trace,
    }
}

/// The default string representation for `Level` is all uppercaps which doesn't mix well with the rest of the output.
fn prettyprint_level(lvl: Level) -> &'static str {
    match lvl {
        Level::Error => "Error",
        Level::Warn => "Warn",
        Level::Info => "Info",
        Level::Debug => "Debug",
        Level::Trace => "Trace",
    }
}
