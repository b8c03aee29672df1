// Copyright 2025 Jonas Kruckenberg
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

mod config;
mod logger;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use config::Config;
use std::path::PathBuf;
use std::process;

/// Helper for passing VERSION to opt.
/// If `CARGO_VERSION_INFO` is set, use it, otherwise use `CARGO_PKG_VERSION`.
fn version() -> &'static str {
    option_env!("CARGO_VERSION_INFO").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Prints Fibonacci numbers
#[derive(Debug, Parser)]
#[clap(version = version())]
struct Cli {
    /// Indices to evaluate
    #[clap(allow_negative_numbers = true)]
    indices: Vec<i64>,
    /// Path to a configuration file with more indices, in TOML.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Enables verbose logging
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        log::error!("{:?}", err);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli.config.as_deref().map(Config::from_file).transpose();
    let configured_level = config
        .as_ref()
        .ok()
        .and_then(|cfg| cfg.as_ref()?.log_level)
        .map(Into::into);

    logger::init(cli.verbose, configured_level);

    let config = config?;
    log::debug!("{config:?}");

    let indices = collect_indices(&cli.indices, config.as_ref());
    for (n, value) in evaluate(indices)? {
        println!("fib({n}) = {value}");
    }

    Ok(())
}

/// Command-line indices first, then whatever the config file names.
fn collect_indices<'a>(
    args: &'a [i64],
    config: Option<&'a Config>,
) -> impl Iterator<Item = i64> + 'a {
    args.iter()
        .copied()
        .chain(config.into_iter().flat_map(Config::indices))
}

/// Computes every index, stopping at the first one `fib` rejects.
///
/// Indices are pulled lazily, so a config range that runs past `MAX_INDEX` fails on
/// the first overflowing index instead of being materialized in full.
fn evaluate(indices: impl IntoIterator<Item = i64>) -> anyhow::Result<Vec<(i64, u64)>> {
    let results = indices
        .into_iter()
        .map(|n| {
            let value = fib::fib(n).with_context(|| format!("failed to compute fib({n})"))?;
            log::trace!("fib({n}) = {value}");
            Ok((n, value))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if results.is_empty() {
        bail!("no indices given, pass them as arguments or via --config");
    }

    Ok(results)
}
