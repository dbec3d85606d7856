use std::fmt::Write;

use typeforge_core::TypeSystem;

use super::ExtendedType;

/// Renders a descriptor tree, one descriptor per line.
///
/// ```text
/// List<String> (unknown, nullable, list)
///   arg: String (unknown, nullable)
///   element: String (unknown, nullable)
/// ```
pub struct TypePrinter<'a, T: TypeSystem + ?Sized> {
    ty: &'a ExtendedType,
    types: &'a T,
    interfaces: bool,
    arguments: bool,
}

impl<'a, T: TypeSystem + ?Sized> TypePrinter<'a, T> {
    pub fn new(ty: &'a ExtendedType, types: &'a T) -> Self {
        Self {
            ty,
            types,
            interfaces: false,
            arguments: true,
        }
    }

    /// Also list the interface set of the root descriptor.
    pub fn with_interfaces(mut self, value: bool) -> Self {
        self.interfaces = value;
        self
    }

    pub fn with_arguments(mut self, value: bool) -> Self {
        self.arguments = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_tree(w, self.ty, None, 0)?;

        if self.interfaces {
            for iface in self.ty.interfaces(self.types) {
                write!(w, "  interface: ")?;
                self.format_header(w, iface)?;
                writeln!(w)?;
            }
        }
        Ok(())
    }

    fn format_tree(
        &self,
        w: &mut impl Write,
        ty: &ExtendedType,
        label: Option<&str>,
        depth: usize,
    ) -> std::fmt::Result {
        write!(w, "{:indent$}", "", indent = depth * 2)?;
        if let Some(label) = label {
            write!(w, "{label}: ")?;
        }
        self.format_header(w, ty)?;
        writeln!(w)?;

        if self.arguments {
            for argument in ty.type_arguments() {
                self.format_tree(w, argument, Some("arg"), depth + 1)?;
            }
        }
        if let Some(element) = ty.element_type() {
            self.format_tree(w, element, Some("element"), depth + 1)?;
        }
        Ok(())
    }

    fn format_header(&self, w: &mut impl Write, ty: &ExtendedType) -> std::fmt::Result {
        let nullability = if ty.is_nullable() {
            "nullable"
        } else {
            "non-null"
        };
        write!(
            w,
            "{} ({}, {nullability}",
            self.types.name(ty.ty()),
            ty.kind()
        )?;
        if ty.is_list() {
            write!(w, ", list")?;
        }
        if ty.is_array() {
            write!(w, ", array")?;
        }
        if ty.is_named_type() {
            write!(w, ", named")?;
        }
        if ty.original_type() != ty.ty() {
            write!(w, ", original: {}", self.types.name(ty.original_type()))?;
        }
        write!(w, ")")
    }
}
