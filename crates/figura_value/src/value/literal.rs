use crate::Value;

// -----------------------------------------------------------------------------
// Literal

/// Conversion of a Rust value into a renderable [`Value`].
///
/// Usually derived together with [`Typed`](crate::info::Typed):
///
/// ```
/// use figura_value::{Literal, derive::Literal};
/// use figura_value::info::Kind;
///
/// #[derive(Literal)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let v = Point { x: 1, y: 2 }.to_value();
/// assert_eq!(v.kind(), Kind::Struct);
/// assert_eq!(v.ty().name(), "Point");
/// ```
///
/// [`Value`] itself implements `Literal`, so dynamically built values can be
/// passed wherever a `Literal` is expected.
pub trait Literal {
    /// Captures `self` as a [`Value`].
    fn to_value(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use crate::derive::Literal;
    use crate::info::{Kind, TypeDesc, TypeShape, Typed};
    use crate::{Literal, Repr};
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Literal)]
    #[literal(namespace = "github.com/acme/geo")]
    struct Point {
        pub x: i32,
        pub y: i32,
        #[literal(skip)]
        _cache: Vec<u8>,
    }

    #[derive(Literal)]
    struct Account {
        #[literal(rename = "ID")]
        pub id: u64,
        #[literal(visible)]
        owner: String,
        balance: f64,
    }

    #[derive(Literal)]
    #[literal(namespace = "units", name = "Meters")]
    struct Distance(f64);

    #[derive(Literal)]
    struct Marker;

    #[derive(Literal)]
    struct Wrapper<T> {
        pub inner: T,
    }

    #[derive(Literal)]
    struct Tree {
        pub children: Vec<Tree>,
    }

    #[derive(Literal)]
    struct Node {
        pub next: Option<Box<Node>>,
    }

    #[derive(Literal)]
    struct Chain(Vec<Chain>);

    #[test]
    fn named_record() {
        let ty = Point::type_desc();
        assert_eq!(ty.namespace(), "github.com/acme/geo");
        assert_eq!(ty.name(), "Point");
        let names: Vec<_> = ty.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["x", "y"]);

        let v = Point {
            x: 1,
            y: -2,
            _cache: Vec::new(),
        }
        .to_value();
        assert!(matches!(v.repr(), Repr::Record(fields) if fields.len() == 2));
    }

    #[test]
    fn field_visibility_and_rename() {
        let ty = Account::type_desc();
        assert_eq!(ty.namespace(), module_path!());
        let fields: Vec<_> = ty
            .fields()
            .iter()
            .map(|f| (f.name(), f.is_visible()))
            .collect();
        assert_eq!(fields, [("ID", true), ("owner", true), ("balance", false)]);

        let v = Account {
            id: 9,
            owner: String::from("ann"),
            balance: 0.5,
        }
        .to_value();
        assert_eq!(v.fields().count(), 3);
    }

    #[test]
    fn newtype_takes_inner_shape() {
        let ty = Distance::type_desc();
        assert_eq!(ty.shape(), &TypeShape::Float64);
        assert_eq!(ty.path().map(|p| p.to_string()).as_deref(), Some("units.Meters"));
        assert!(matches!(Distance(2.5).to_value().repr(), Repr::Float(f) if *f == 2.5));
    }

    #[test]
    fn unit_struct_is_empty_record() {
        let v = Marker.to_value();
        assert_eq!(v.kind(), Kind::Struct);
        assert_eq!(v.ty().name(), "Marker");
        assert!(v.ty().fields().is_empty());
    }

    #[test]
    fn generic_instantiations() {
        assert_ne!(Wrapper::<i8>::type_desc(), Wrapper::<bool>::type_desc());
        assert_eq!(
            Wrapper::<i8>::type_desc().fields()[0].ty(),
            &TypeDesc::new(TypeShape::Int8)
        );
        assert_eq!(Wrapper { inner: true }.to_value().fields().count(), 1);
    }

    #[test]
    fn self_referential_types() {
        let tree = Tree::type_desc();
        assert_eq!(tree.fields()[0].ty(), &TypeDesc::slice(tree.clone()));
        let v = Tree {
            children: vec![Tree {
                children: Vec::new(),
            }],
        }
        .to_value();
        assert!(matches!(v.repr(), Repr::Record(fields) if fields.len() == 1));

        let node = Node::type_desc();
        assert_eq!(node.fields()[0].ty(), &TypeDesc::pointer(node.clone()));
        let v = Node {
            next: Some(Box::new(Node { next: None })),
        }
        .to_value();
        let next = v.fields().next().map(|(_, value)| value.kind());
        assert_eq!(next, Some(Kind::Pointer));

        let chain = Chain::type_desc();
        assert_eq!(chain.kind(), Kind::Slice);
        assert_eq!(chain.elem(), Some(&chain));
        assert!(format!("{chain:?}").contains("Chain"));
    }
}
