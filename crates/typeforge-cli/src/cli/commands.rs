//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeforge")
        .about("Canonical type identity normalization")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(normalize_command())
        .subcommand(check_command())
}

/// Normalize named types and print their descriptor trees.
pub fn normalize_command() -> Command {
    Command::new("normalize")
        .about("Normalize types and print their descriptors")
        .override_usage("  typeforge normalize <TYPES> <TYPE>...")
        .after_help(
            r#"EXAMPLES:
  typeforge normalize types.json 'List<String>'
  typeforge normalize types.json 'String[]' --no-legacy-array-args
  typeforge normalize types.json 'NonNullType<StringType>' --interfaces
  typeforge normalize types.json 'List<String>' --rederive --non-null"#,
        )
        .arg(types_path_arg())
        .arg(type_names_arg())
        .arg(no_legacy_array_args_arg())
        .arg(interfaces_arg())
        .arg(no_arguments_arg())
        .arg(rederive_arg())
        .arg(non_null_arg())
        .arg(verbose_arg())
}

/// Validate a type universe file.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a type universe file")
        .override_usage("  typeforge check <TYPES>")
        .after_help(
            r#"EXAMPLES:
  typeforge check types.json
  cat types.json | typeforge check -"#,
        )
        .arg(types_path_arg())
        .arg(no_legacy_array_args_arg())
        .arg(verbose_arg())
}
