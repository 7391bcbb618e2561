//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use sqltree_lib::{Rule, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::trace::TraceArgs;
use crate::commands::tree::TreeArgs;

pub struct TreeParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Rule,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub json: bool,
    pub compact: bool,
    pub fuel: u32,
    pub color: ColorChoice,
    // Note: strict, verbose, no_result are parsed but not extracted (unified flags)
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            entry: parse_entry(m),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            entry: p.entry,
            raw: p.raw,
            trivia: p.trivia,
            spans: p.spans,
            json: p.json,
            compact: p.compact,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Rule,
    pub strict: bool,
    pub json: bool,
    pub fuel: u32,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            entry: parse_entry(m),
            strict: m.get_flag("strict"),
            json: m.get_flag("json"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            entry: p.entry,
            strict: p.strict,
            json: p.json,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Rule,
    pub verbose: u8,
    pub no_result: bool,
    pub fuel: u32,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            entry: parse_entry(m),
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            fuel: parse_fuel(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            entry: p.entry,
            verbosity,
            fuel: p.fuel,
            no_result: p.no_result,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// `--entry` is restricted to rule names by its value parser.
fn parse_entry(m: &ArgMatches) -> Rule {
    m.get_one::<String>("entry")
        .and_then(|name| name.parse().ok())
        .unwrap_or_default()
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000)
}
