//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::normalize::NormalizeArgs;

pub struct NormalizeParams {
    pub types_path: PathBuf,
    pub type_names: Vec<String>,
    pub no_legacy_array_args: bool,
    pub interfaces: bool,
    pub no_arguments: bool,
    pub rederive: bool,
    pub non_null: bool,
    pub verbose: u8,
}

impl NormalizeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            types_path: types_path(m),
            type_names: m
                .get_many::<String>("type_names")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            no_legacy_array_args: m.get_flag("no_legacy_array_args"),
            interfaces: m.get_flag("interfaces"),
            no_arguments: m.get_flag("no_arguments"),
            rederive: m.get_flag("rederive"),
            non_null: m.get_flag("non_null"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<NormalizeParams> for NormalizeArgs {
    fn from(p: NormalizeParams) -> Self {
        Self {
            types_path: p.types_path,
            type_names: p.type_names,
            legacy_array_arguments: !p.no_legacy_array_args,
            interfaces: p.interfaces,
            arguments: !p.no_arguments,
            rederive: p.rederive.then_some(!p.non_null),
        }
    }
}

pub struct CheckParams {
    pub types_path: PathBuf,
    pub no_legacy_array_args: bool,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            types_path: types_path(m),
            no_legacy_array_args: m.get_flag("no_legacy_array_args"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            types_path: p.types_path,
            legacy_array_arguments: !p.no_legacy_array_args,
        }
    }
}

fn types_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("types_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
