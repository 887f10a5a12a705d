use alloc::string::{String, ToString};

use figura_value::info::{TypeDesc, TypeShape};

use crate::{Figurative, NamingError};

impl Figurative {
    /// Returns the Go spelling of `ty`, qualifying named types.
    ///
    /// # Panics
    ///
    /// If `ty` has no spelling, see [`try_type_name`](Self::try_type_name).
    ///
    /// # Examples
    ///
    /// ```
    /// use figura_render::Figurative;
    /// use figura_value::info::{FieldDesc, TypeDesc, TypePath, TypeShape, Typed};
    ///
    /// let figurative = Figurative::new();
    /// let errors = TypeDesc::named(TypePath::new("", "error"), TypeShape::Interface);
    /// let ty = TypeDesc::func(vec![String::type_desc()], vec![errors]);
    /// assert_eq!(figurative.type_name(&ty), "func(string) error");
    ///
    /// let row = TypeDesc::structure(vec![
    ///     FieldDesc::new("A", i64::type_desc()),
    ///     FieldDesc::hidden("b", bool::type_desc()),
    /// ]);
    /// assert_eq!(figurative.type_name(&row), "struct { A int64; b bool }");
    /// ```
    pub fn type_name(&self, ty: &TypeDesc) -> String {
        match self.try_type_name(ty) {
            Ok(name) => name,
            Err(err) => err.handle_error(),
        }
    }

    /// Returns the Go spelling of `ty`.
    ///
    /// Fails for unnamed opaque types, which have no spelling.
    pub fn try_type_name(&self, ty: &TypeDesc) -> Result<String, NamingError> {
        let mut out = String::new();
        self.write_type_name(&mut out, ty)?;
        Ok(out)
    }

    fn write_type_name(&self, out: &mut String, ty: &TypeDesc) -> Result<(), NamingError> {
        if let Some(path) = ty.path() {
            if path.has_namespace() {
                out.push_str(&self.qualifier(path.namespace()));
            }
            out.push_str(path.name());
            return Ok(());
        }

        match ty.shape() {
            TypeShape::Array { len, elem } => {
                out.push('[');
                out.push_str(&len.to_string());
                out.push(']');
                self.write_type_name(out, elem)?;
            }
            TypeShape::Slice(elem) => {
                out.push_str("[]");
                self.write_type_name(out, elem)?;
            }
            TypeShape::Map { key, value } => {
                out.push_str("map[");
                self.write_type_name(out, key)?;
                out.push(']');
                self.write_type_name(out, value)?;
            }
            TypeShape::Pointer(elem) => {
                out.push('*');
                self.write_type_name(out, elem)?;
            }
            TypeShape::Chan(elem) => {
                out.push_str("chan ");
                self.write_type_name(out, elem)?;
            }
            TypeShape::Func(func) => {
                out.push_str("func(");
                self.write_list(out, func.inputs())?;
                out.push(')');
                match func.outputs() {
                    [] => {}
                    [output] => {
                        out.push(' ');
                        self.write_type_name(out, output)?;
                    }
                    outputs => {
                        out.push_str(" (");
                        self.write_list(out, outputs)?;
                        out.push(')');
                    }
                }
            }
            TypeShape::Struct(fields) if fields.is_empty() => out.push_str("struct{}"),
            TypeShape::Struct(fields) => {
                out.push_str("struct { ");
                for (index, field) in fields.iter().enumerate() {
                    if index > 0 {
                        out.push_str("; ");
                    }
                    out.push_str(field.name());
                    out.push(' ');
                    self.write_type_name(out, field.ty())?;
                }
                out.push_str(" }");
            }
            TypeShape::Interface => out.push_str("interface{}"),
            TypeShape::UnsafePointer => {
                out.push_str(&self.qualifier("unsafe"));
                out.push_str("Pointer");
            }
            TypeShape::Opaque => return Err(NamingError::Unnamed { kind: "opaque" }),
            // Built-in primitives.
            shape => out.push_str(shape.kind().builtin_name().unwrap_or_default()),
        }

        Ok(())
    }

    fn write_list(&self, out: &mut String, types: &[TypeDesc]) -> Result<(), NamingError> {
        for (index, ty) in types.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            self.write_type_name(out, ty)?;
        }
        Ok(())
    }
}
