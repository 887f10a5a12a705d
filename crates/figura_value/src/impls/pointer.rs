use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::impls::GenericTypeDescCell;
use crate::info::{Kind, TypeDesc, Typed};
use crate::{Literal, Repr, Value};

fn pointer_desc<T: Typed + ?Sized>() -> TypeDesc {
    static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
    CELL.get_or_insert::<T>(|| TypeDesc::pointer(T::type_desc()))
}

fn ref_value<T: Typed + Literal + ?Sized>(referent: &T) -> Value {
    let referent = Box::new(referent.to_value());
    Value::new_unchecked(pointer_desc::<T>(), Repr::Ref(Some(referent)))
}

macro_rules! impl_smart_pointer {
    ($($ptr:ident),*) => {$(
        impl<T: Typed + Literal + ?Sized> Typed for $ptr<T> {
            #[inline]
            fn type_desc() -> TypeDesc {
                pointer_desc::<T>()
            }
        }

        impl<T: Typed + Literal + ?Sized> Literal for $ptr<T> {
            #[inline]
            fn to_value(&self) -> Value {
                ref_value::<T>(&**self)
            }
        }
    )*};
}

impl_smart_pointer!(Box, Rc, Arc);

/// Returns `true` for `*T` descriptions, which `Option` does not wrap again.
///
/// Named descriptions are never treated as pointers here: their shape may not
/// be built yet.
fn is_unnamed_pointer(desc: &TypeDesc) -> bool {
    desc.path().is_none() && desc.kind() == Kind::Pointer
}

/// `None` is a nil reference.
///
/// An `Option` around an unnamed pointer is that pointer's nullable form, so
/// `Option<Box<T>>` is `*T` like `Box<T>`, not `**T`.
impl<T: Typed + Literal> Typed for Option<T> {
    fn type_desc() -> TypeDesc {
        let inner = T::type_desc();
        if is_unnamed_pointer(&inner) {
            inner
        } else {
            pointer_desc::<T>()
        }
    }
}

impl<T: Typed + Literal> Literal for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) if is_unnamed_pointer(&T::type_desc()) => inner.to_value(),
            referent => {
                let referent = referent.as_ref().map(|r| Box::new(r.to_value()));
                Value::new_unchecked(Self::type_desc(), Repr::Ref(referent))
            }
        }
    }
}
