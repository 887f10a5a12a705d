//! The dispatcher: provider lookup first, then one formatter per shape.

use alloc::string::{String, ToString};

use figura_value::info::Kind;
use figura_value::{Repr, Value};

use crate::format;
use crate::type_key::TypeKeyRef;
use crate::{FailureMode, Figurative, LiteralError};

const NIL: &str = "nil";

/// Renders one top-level value.
pub(crate) fn render(f: &Figurative, value: &Value) -> Result<String, LiteralError> {
    let mut out = String::new();
    write_value(f, &mut out, value)?;
    Ok(out)
}

/// Appends the literal of `value`.
pub(crate) fn write_value(
    f: &Figurative,
    out: &mut String,
    value: &Value,
) -> Result<(), LiteralError> {
    if value.is_nil() {
        out.push_str(NIL);
        return Ok(());
    }

    if let Some(provider) = f.provider_for(value) {
        log::trace!("rendering `{}` with a constructor provider", TypeKeyRef::of_value(value));
        out.push_str(&provider(f, value)?);
        return Ok(());
    }

    match value.repr() {
        Repr::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Repr::Int(i) => out.push_str(&i.to_string()),
        Repr::Uint(u) => out.push_str(&u.to_string()),
        Repr::Float(x) => format::write_float(out, *x, value.kind() == Kind::Float32),
        Repr::Complex(re, im) => {
            format::write_complex(out, *re, *im, value.kind() == Kind::Complex64);
        }
        Repr::String(s) => format::write_quoted(out, s),
        Repr::Seq(items) => format::write_sequence(f, out, value, items)?,
        Repr::Map(pairs) => format::write_mapping(f, out, value, pairs)?,
        Repr::Record(_) => format::write_record(f, out, value)?,
        Repr::Ref(referent) => format::write_reference(f, out, value, referent.as_deref())?,
        Repr::Nil | Repr::Chan { .. } | Repr::Func | Repr::UnsafePointer(_) | Repr::Opaque(_) => {
            write_unsupported(f, out, value)?;
        }
    }

    Ok(())
}

/// Reports a value the dispatcher has no formatter for.
pub(crate) fn write_unsupported(
    f: &Figurative,
    out: &mut String,
    value: &Value,
) -> Result<(), LiteralError> {
    fail(f, out, || LiteralError::Unsupported {
        type_name: name_for_error(f, value),
    })
}

/// Reports a nil reference or a reference to an unsupported kind.
pub(crate) fn write_unsupported_reference(
    f: &Figurative,
    out: &mut String,
    value: &Value,
) -> Result<(), LiteralError> {
    fail(f, out, || LiteralError::UnsupportedReference {
        type_name: match value.ty().elem() {
            Some(elem) => f.try_type_name(elem).unwrap_or_else(|_| elem.kind().to_string()),
            None => name_for_error(f, value),
        },
    })
}

fn fail(
    f: &Figurative,
    out: &mut String,
    err: impl FnOnce() -> LiteralError,
) -> Result<(), LiteralError> {
    match f.failure_mode() {
        FailureMode::Strict => Err(err()),
        FailureMode::Lenient => {
            log::debug!("{}, rendering `nil` instead", err());
            out.push_str(NIL);
            Ok(())
        }
    }
}

// Unnamed opaque types have no spelling; the error message falls back to the kind.
fn name_for_error(f: &Figurative, value: &Value) -> String {
    f.try_type_name(value.ty())
        .unwrap_or_else(|_| value.kind().to_string())
}

impl Figurative {
    /// Reports `value` as unsupported: an error in
    /// [`FailureMode::Strict`], `nil` otherwise.
    ///
    /// Meant for constructor providers that receive a value they cannot
    /// handle.
    pub fn unsupported(&self, value: &Value) -> Result<String, LiteralError> {
        let mut out = String::new();
        write_unsupported(self, &mut out, value)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Figurative, LiteralError, TypeKey};
    use figura_value::derive::Literal;
    use figura_value::impls::{Complex64, Complex128};
    use figura_value::info::{FieldDesc, TypeDesc, TypePath, TypeShape, Typed};
    use figura_value::{Literal, Repr, Value};
    use std::collections::{BTreeMap, BTreeSet, HashMap};

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/literally", name = "testStruct")]
    struct TestStruct {
        #[literal(rename = "Int")]
        pub int: isize,
        #[literal(rename = "String")]
        pub string: String,
        #[literal(rename = "IntSlice")]
        pub int_slice: Vec<isize>,
    }

    #[derive(Literal, Default)]
    #[literal(namespace = "sync")]
    struct Mutex {
        state: i32,
        sema: u32,
    }

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/literally", name = "testEmbeddedStruct")]
    struct TestEmbeddedStruct {
        #[literal(visible, rename = "Mutex")]
        mutex: Mutex,
        #[literal(visible, rename = "testStruct")]
        test_struct: TestStruct,
        #[literal(rename = "Bool")]
        pub flag: bool,
    }

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/pkg")]
    struct T {
        #[literal(rename = "Int")]
        pub int: isize,
        #[literal(rename = "String")]
        pub string: String,
    }

    #[derive(Literal, PartialEq, Eq, PartialOrd, Ord)]
    #[literal(namespace = "github.com/acme/literally", name = "myInt")]
    struct MyInt(isize);

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/literally", name = "myStruct")]
    struct MyStruct;

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/literally", name = "mySet")]
    struct MySet(BTreeMap<MyInt, MyStruct>);

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/literally")]
    struct Tree {
        #[literal(rename = "Children")]
        pub children: Vec<Tree>,
    }

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/literally")]
    struct Node {
        #[literal(rename = "Value")]
        pub value: i32,
        #[literal(rename = "Next")]
        pub next: Option<Box<Node>>,
    }

    fn empty_test_struct() -> TestStruct {
        TestStruct {
            int: 0,
            string: String::new(),
            int_slice: Vec::new(),
        }
    }

    fn chan_value() -> Value {
        Value::new(TypeDesc::chan(isize::type_desc()), Repr::Chan { cap: 0 }).unwrap()
    }

    fn func_slice(inputs: Vec<TypeDesc>, outputs: Vec<TypeDesc>) -> Value {
        let ty = TypeDesc::slice(TypeDesc::func(inputs, outputs));
        Value::new(ty, Repr::Seq(Vec::new())).unwrap()
    }

    #[test]
    fn primitives() {
        let f = Figurative::empty();
        assert_eq!(f.literally(&true), "true");
        assert_eq!(f.literally(&-42_i8), "-42");
        assert_eq!(f.literally(&u64::MAX), "18446744073709551615");
        assert_eq!(f.literally(&4.2_f32), "4.2");
        assert_eq!(f.literally(&1e6_f64), "1e+06");
        assert_eq!(f.literally(&Complex128::new(-5.0, 12.0)), "(-5+12i)");
        assert_eq!(f.literally("some \"string\"\n"), r#""some \"string\"\n""#);
        assert_eq!(f.literally(&'a'), "97");
    }

    #[test]
    fn nil() {
        assert_eq!(Figurative::new().literally(&Value::nil()), "nil");
        assert_eq!(Figurative::new().strict().literally(&Value::nil()), "nil");
    }

    #[test]
    fn sequences() {
        let f = Figurative::new();
        assert_eq!(f.literally(&vec![1_isize, 2, 3, 4]), "[]int{1, 2, 3, 4}");
        assert_eq!(f.literally(&[1_isize, 2, 3, 4]), "[4]int{1, 2, 3, 4}");
        assert_eq!(f.literally(&Vec::<isize>::new()), "[]int{}");
        assert_eq!(f.literally(&vec![4.2_f32]), "[]float32{4.2}");
        assert_eq!(f.literally(b"hi".as_slice()), "[]uint8{104, 105}");
        assert_eq!(
            f.literally(&vec![vec!["a".to_owned()], vec![]]),
            r#"[][]string{[]string{"a"}, []string{}}"#
        );
    }

    #[test]
    fn mappings() {
        let f = Figurative::new();
        let single = BTreeMap::from([(1_isize, "a".to_owned())]);
        assert_eq!(f.literally(&single), r#"map[int]string{1: "a"}"#);

        let nested = BTreeMap::from([(1_isize, vec![10_i64, 11, 12])]);
        assert_eq!(
            f.literally(&nested),
            "map[int][]int64{1: []int64{10, 11, 12}}"
        );

        let sorted = BTreeMap::from([(2_isize, "b".to_owned()), (1, "a".to_owned())]);
        assert_eq!(f.literally(&sorted), r#"map[int]string{1: "a", 2: "b"}"#);

        let set = BTreeSet::from([3_u8, 1]);
        assert_eq!(f.literally(&set), "map[uint8]struct{}{1: struct{}{}, 3: struct{}{}}");

        let hashed = HashMap::from([("k".to_owned(), true)]);
        assert_eq!(f.literally(&hashed), r#"map[string]bool{"k": true}"#);
    }

    #[test]
    fn records() {
        let f = Figurative::new();
        assert_eq!(f.literally(&()), "struct{}{}");

        let value = TestStruct {
            int: 23,
            string: "str".to_owned(),
            int_slice: vec![1, 2, 3],
        };
        assert_eq!(
            f.literally(&value),
            r#"literally.testStruct{Int: 23, String: "str", IntSlice: []int{1, 2, 3}}"#
        );
        assert_eq!(f.literally(&Mutex::default()), "sync.Mutex{}");

        let embedded = TestEmbeddedStruct {
            mutex: Mutex::default(),
            test_struct: empty_test_struct(),
            flag: true,
        };
        assert_eq!(
            f.literally(&embedded),
            r#"literally.testEmbeddedStruct{Mutex: sync.Mutex{}, testStruct: literally.testStruct{Int: 0, String: "", IntSlice: []int{}}, Bool: true}"#
        );
    }

    #[test]
    fn aliased_record() {
        let f = Figurative::new().with_package_name("github.com/acme/pkg", "pkg");
        let value = T {
            int: 23,
            string: "str".to_owned(),
        };
        assert_eq!(f.literally(&value), r#"pkg.T{Int: 23, String: "str"}"#);

        let f = f.with_package_name("github.com/acme/pkg", "");
        assert_eq!(f.literally(&value), r#"T{Int: 23, String: "str"}"#);
    }

    #[test]
    fn anonymous_record_with_fields() {
        let ty = TypeDesc::structure(vec![
            FieldDesc::new("A", i64::type_desc()),
            FieldDesc::hidden("b", bool::type_desc()),
        ]);
        let value = Value::new(ty, Repr::Record(vec![1_i64.to_value(), true.to_value()])).unwrap();
        assert_eq!(
            Figurative::new().literally(&value),
            "struct { A int64; b bool }{A: 1}"
        );
    }

    #[test]
    fn references() {
        let f = Figurative::new().with_helper_namespace("");
        assert_eq!(f.literally(&Box::new(true)), "BoolPtr(true)");
        assert_eq!(f.literally(&Box::new(42_isize)), "IntPtr(42)");
        assert_eq!(f.literally(&Box::new(42_i8)), "Int8Ptr(42)");
        assert_eq!(f.literally(&Box::new(42_u16)), "Uint16Ptr(42)");
        assert_eq!(f.literally(&Box::new(42_usize)), "UintPtr(42)");
        assert_eq!(f.literally(&Box::new(4.2_f32)), "Float32Ptr(4.2)");
        assert_eq!(f.literally(&Box::new(4.2_f64)), "Float64Ptr(4.2)");
        assert_eq!(
            f.literally(&Box::new(Complex64::new(-5.0, 12.0))),
            "Complex64Ptr((-5+12i))"
        );
        assert_eq!(
            f.literally(&Some("some string".to_owned())),
            r#"StringPtr("some string")"#
        );
        assert_eq!(
            f.literally(&Box::new(empty_test_struct())),
            r#"&literally.testStruct{Int: 0, String: "", IntSlice: []int{}}"#
        );
        assert_eq!(f.literally(&Box::new(())), "&struct{}{}");
        assert_eq!(f.literally(&Box::new(Mutex::default())), "&sync.Mutex{}");
    }

    #[test]
    fn helper_namespace_is_qualified() {
        let f = Figurative::new();
        assert_eq!(f.literally(&Box::new(true)), "figura.BoolPtr(true)");

        let f = f.with_package_name("figura", "");
        assert_eq!(f.literally(&Box::new(true)), "BoolPtr(true)");

        let f = Figurative::new().with_helper_namespace("github.com/acme/ptr");
        assert_eq!(f.literally(&Box::new(1_u8)), "ptr.Uint8Ptr(1)");
    }

    #[test]
    fn unsupported_references() {
        let lenient = Figurative::new();
        assert_eq!(lenient.literally(&None::<i32>), "nil");
        assert_eq!(lenient.literally(&Box::new(vec![1_i32])), "nil");
        assert_eq!(lenient.literally(&Box::new(Box::new(1_i32))), "nil");

        let strict = Figurative::new().strict();
        assert_eq!(
            strict.try_literally(&None::<i32>),
            Err(LiteralError::UnsupportedReference {
                type_name: "int32".to_owned()
            })
        );
        let err = strict.try_literally(&Box::new(vec![1_i32])).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type *[]int32");
    }

    #[test]
    fn pointer_to_interface_is_unsupported() {
        let boxed = Box::new(1_i64.to_value());
        assert_eq!(Figurative::new().type_name(&Box::<Value>::type_desc()), "*interface{}");
        assert_eq!(Figurative::new().literally(&boxed), "nil");

        let err = Figurative::new().strict().try_literally(&boxed).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type *interface{}");
    }

    #[test]
    fn recursive_types() {
        let f = Figurative::new();
        let tree = Tree {
            children: vec![Tree { children: vec![] }],
        };
        assert_eq!(
            f.literally(&tree),
            "literally.Tree{Children: []literally.Tree{literally.Tree{Children: []literally.Tree{}}}}"
        );

        let list = Node {
            value: 1,
            next: Some(Box::new(Node { value: 2, next: None })),
        };
        assert_eq!(f.type_name(Node::type_desc().fields()[1].ty()), "*literally.Node");
        assert_eq!(
            f.literally(&list),
            "literally.Node{Value: 1, Next: &literally.Node{Value: 2, Next: nil}}"
        );
        assert_eq!(
            f.strict().try_literally(&list),
            Err(LiteralError::UnsupportedReference {
                type_name: "literally.Node".to_owned()
            })
        );
    }

    #[test]
    fn type_names() {
        let f = Figurative::empty();
        assert_eq!(f.literally(&Vec::<Box<isize>>::new()), "[]*int{}");
        assert_eq!(f.literally(&BTreeMap::<Box<isize>, ()>::new()), "map[*int]struct{}{}");
        assert_eq!(
            f.literally(&Vec::<BTreeMap<Box<isize>, ()>>::new()),
            "[]map[*int]struct{}{}"
        );
        assert_eq!(f.literally(&Vec::<MyInt>::new()), "[]literally.myInt{}");
        assert_eq!(f.literally(&MyStruct), "literally.myStruct{}");
        assert_eq!(
            f.literally(&MySet(BTreeMap::from([(MyInt(1), MyStruct)]))),
            "literally.mySet{1: literally.myStruct{}}"
        );
        assert_eq!(f.literally(&Vec::<Value>::new()), "[]interface{}{}");

        let string = String::type_desc();
        let int = isize::type_desc();
        let error = TypeDesc::named(TypePath::new("", "error"), TypeShape::Interface);
        assert_eq!(
            f.literally(&func_slice(vec![string.clone()], vec![error])),
            "[]func(string) error{}"
        );
        assert_eq!(f.literally(&func_slice(vec![int.clone()], vec![])), "[]func(int){}");
        assert_eq!(
            f.literally(&func_slice(vec![string.clone(), bool::type_desc()], vec![int.clone()])),
            "[]func(string, bool) int{}"
        );
        assert_eq!(
            f.literally(&func_slice(vec![], vec![int, string])),
            "[]func() (int, string){}"
        );
    }

    #[test]
    fn interfaces_hold_dynamic_values() {
        let items = vec![1_isize.to_value(), "a".to_value(), Value::nil()];
        assert_eq!(
            Figurative::new().literally(&items),
            r#"[]interface{}{1, "a", nil}"#
        );
    }

    #[test]
    fn lenient_substitutes_nil_in_place() {
        let items = vec![1_isize.to_value(), chan_value()];
        assert_eq!(Figurative::new().literally(&items), "[]interface{}{1, nil}");

        let unsafe_pointer =
            Value::new(TypeDesc::new(TypeShape::UnsafePointer), Repr::UnsafePointer(0)).unwrap();
        assert_eq!(Figurative::new().literally(&unsafe_pointer), "nil");
    }

    #[test]
    fn strict_reports_the_type() {
        let strict = Figurative::new().strict();
        let items = vec![1_isize.to_value(), chan_value()];
        assert_eq!(
            strict.try_literally(&items),
            Err(LiteralError::Unsupported {
                type_name: "chan int".to_owned()
            })
        );

        let func = Value::new(TypeDesc::func(vec![], vec![]), Repr::Func).unwrap();
        let err = strict.try_literally(&func).unwrap_err();
        assert_eq!(err.type_name(), "func()");
    }

    #[test]
    #[should_panic(expected = "Unable to handle type: chan int")]
    fn strict_literally_panics() {
        Figurative::new().strict().literally(&chan_value());
    }

    #[test]
    fn unnamed_opaque_error_names_the_kind() {
        let opaque = Value::new(
            TypeDesc::new(TypeShape::Opaque),
            Repr::Opaque(figura_value::OpaqueValue::new(7_u8)),
        )
        .unwrap();
        let err = Figurative::new().strict().try_literally(&opaque).unwrap_err();
        assert_eq!(err.type_name(), "opaque");
    }

    #[test]
    fn providers_take_precedence() {
        let f = Figurative::new().with_provider(TypeKey::of::<i64>(), |_, value| {
            match value.repr() {
                Repr::Int(i) => Ok(format!("int64({i})")),
                _ => Ok("0".into()),
            }
        });
        assert_eq!(f.literally(&vec![1_i64, 2]), "[]int64{int64(1), int64(2)}");
        assert_eq!(f.literally(&Box::new(1_i64)), "figura.Int64Ptr(int64(1))");

        let f = f.with_provider(TypeKey::pointer_to::<i64>(), |_, _| Ok("ptr".into()));
        assert_eq!(f.literally(&Box::new(1_i64)), "ptr");
    }

    #[test]
    fn providers_can_recurse() {
        let key = TypeKey::of::<TestStruct>();
        let f = Figurative::new().strict().with_provider(key, |f, value| {
            let fields: Result<Vec<_>, _> = value
                .fields()
                .map(|(_, item)| f.try_literally_value(item))
                .collect();
            Ok(format!("NewTestStruct({})", fields?.join(", ")))
        });
        let value = TestStruct {
            int: 1,
            string: "s".to_owned(),
            int_slice: vec![],
        };
        assert_eq!(f.literally(&value), r#"NewTestStruct(1, "s", []int{})"#);
    }

    #[test]
    fn provider_errors_propagate() {
        let f = Figurative::new()
            .with_provider(TypeKey::of::<bool>(), |f, value| f.unsupported(value));
        assert_eq!(f.literally(&true), "nil");
        assert!(f.strict().try_literally(&vec![true]).is_err());
    }

    #[test]
    fn rendering_is_repeatable() {
        let f = Figurative::new();
        let value = BTreeMap::from([(1_u8, vec![Some(2_i16)])]);
        assert_eq!(f.literally(&value), f.literally(&value));
    }
}
