//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Type universe JSON file (positional, "-" for stdin).
pub fn types_path_arg() -> Arg {
    Arg::new("types_path")
        .value_name("TYPES")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Type universe JSON file (use \"-\" for stdin)")
}

/// Names of the types to normalize (positional, one or more).
pub fn type_names_arg() -> Arg {
    Arg::new("type_names")
        .value_name("TYPE")
        .required(true)
        .num_args(1..)
        .help("Registered type names, e.g. 'List<String>'")
}

/// Disable legacy array type arguments (--no-legacy-array-args).
pub fn no_legacy_array_args_arg() -> Arg {
    Arg::new("no_legacy_array_args")
        .long("no-legacy-array-args")
        .action(ArgAction::SetTrue)
        .help("Don't report the element type as the type argument of arrays")
}

/// Show the interface set (--interfaces).
pub fn interfaces_arg() -> Arg {
    Arg::new("interfaces")
        .long("interfaces")
        .action(ArgAction::SetTrue)
        .help("Also print the interface set of each descriptor")
}

/// Hide type arguments (--no-arguments).
pub fn no_arguments_arg() -> Arg {
    Arg::new("no_arguments")
        .long("no-arguments")
        .action(ArgAction::SetTrue)
        .help("Don't print type arguments, only element types")
}

/// Re-derive as an extended descriptor (--rederive).
pub fn rederive_arg() -> Arg {
    Arg::new("rederive")
        .long("rederive")
        .action(ArgAction::SetTrue)
        .help("Re-derive each descriptor as an extended descriptor")
}

/// Mark re-derived descriptors non-null (--non-null).
pub fn non_null_arg() -> Arg {
    Arg::new("non_null")
        .long("non-null")
        .action(ArgAction::SetTrue)
        .requires("rederive")
        .help("Declare re-derived descriptors non-nullable")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
