use std::path::PathBuf;

use typeforge_core::{DynamicTypeSystem, NativeType, TypeSystem};
use typeforge_lib::{ExtendedType, NormalizeOptions, Normalizer};

use super::types_loader::{load_types, resolve_type};
use crate::error::Result;

pub struct NormalizeArgs {
    pub types_path: PathBuf,
    pub type_names: Vec<String>,
    pub legacy_array_arguments: bool,
    pub interfaces: bool,
    pub arguments: bool,
    /// Re-derive through an extended descriptor with this declared nullability.
    pub rederive: Option<bool>,
}

pub fn run(args: NormalizeArgs) -> Result<()> {
    let types = load_types(&args.types_path)?;
    print!("{}", render(&types, &args)?);
    Ok(())
}

/// Descriptor trees for every requested type, separated by blank lines.
pub fn render(types: &DynamicTypeSystem, args: &NormalizeArgs) -> Result<String> {
    let options = NormalizeOptions::new().legacy_array_arguments(args.legacy_array_arguments);
    let normalizer = Normalizer::new(types).with_options(options);

    let mut out = String::new();
    for (i, name) in args.type_names.iter().enumerate() {
        let ty = resolve_type(types, name)?;
        let descriptor = match args.rederive {
            Some(is_nullable) => normalizer.rederive(&annotate(&normalizer, ty, is_nullable))?,
            None => normalizer.normalize(ty),
        };

        if i > 0 {
            out.push('\n');
        }
        out.push_str(
            &descriptor
                .printer(types)
                .with_interfaces(args.interfaces)
                .with_arguments(args.arguments)
                .dump(),
        );
    }
    Ok(out)
}

/// Extended descriptor tree for `ty`, the way a host annotates a member type.
///
/// Generic arguments keep the nullability the native path gives them.
fn annotate<T: TypeSystem + ?Sized>(
    normalizer: &Normalizer<'_, T>,
    ty: NativeType,
    is_nullable: bool,
) -> ExtendedType {
    let arguments = normalizer
        .types()
        .generic_arguments(ty)
        .iter()
        .map(|&argument| {
            let is_nullable = normalizer.normalize(argument).is_nullable();
            annotate(normalizer, argument, is_nullable)
        })
        .collect();
    normalizer.extended(ty, is_nullable, arguments)
}
