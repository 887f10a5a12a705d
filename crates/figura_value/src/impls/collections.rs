use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::hash::BuildHasher;
use std::collections::{HashMap, HashSet};

use figura_utils::hash::hashbrown;

use crate::impls::GenericTypeDescCell;
use crate::info::{TypeDesc, Typed};
use crate::{Literal, Repr, Value};

fn seq_value<'a, T: Literal + 'a>(ty: TypeDesc, items: impl Iterator<Item = &'a T>) -> Value {
    Value::new_unchecked(ty, Repr::Seq(items.map(Literal::to_value).collect()))
}

fn map_value<'a, K: Literal + 'a, V: Literal + 'a>(
    ty: TypeDesc,
    pairs: impl Iterator<Item = (&'a K, &'a V)>,
) -> Value {
    let pairs = pairs.map(|(k, v)| (k.to_value(), v.to_value())).collect();
    Value::new_unchecked(ty, Repr::Map(pairs))
}

// Sets are `map[T]struct{}`.
fn set_value<'a, T: Literal + 'a>(ty: TypeDesc, items: impl Iterator<Item = &'a T>) -> Value {
    map_value(ty, items.map(|item| (item, &())))
}

// -----------------------------------------------------------------------------
// Sequences

impl<T: Typed + Literal, const N: usize> Typed for [T; N] {
    fn type_desc() -> TypeDesc {
        static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
        CELL.get_or_insert::<Self>(|| TypeDesc::array(N, T::type_desc()))
    }
}

impl<T: Typed + Literal, const N: usize> Literal for [T; N] {
    fn to_value(&self) -> Value {
        seq_value(Self::type_desc(), self.iter())
    }
}

impl<T: Typed + Literal> Typed for [T] {
    fn type_desc() -> TypeDesc {
        static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
        CELL.get_or_insert::<Self>(|| TypeDesc::slice(T::type_desc()))
    }
}

impl<T: Typed + Literal> Literal for [T] {
    fn to_value(&self) -> Value {
        seq_value(Self::type_desc(), self.iter())
    }
}

impl<T: Typed + Literal> Typed for Vec<T> {
    #[inline]
    fn type_desc() -> TypeDesc {
        <[T]>::type_desc()
    }
}

impl<T: Typed + Literal> Literal for Vec<T> {
    #[inline]
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Typed + Literal> Typed for VecDeque<T> {
    #[inline]
    fn type_desc() -> TypeDesc {
        <[T]>::type_desc()
    }
}

impl<T: Typed + Literal> Literal for VecDeque<T> {
    fn to_value(&self) -> Value {
        seq_value(Self::type_desc(), self.iter())
    }
}

// -----------------------------------------------------------------------------
// Maps

fn map_desc<K: Typed, V: Typed>() -> TypeDesc {
    static CELL: GenericTypeDescCell = GenericTypeDescCell::new();
    CELL.get_or_insert::<(K, V)>(|| TypeDesc::map(K::type_desc(), V::type_desc()))
}

impl<K: Typed + Literal, V: Typed + Literal, S: BuildHasher + 'static> Typed for HashMap<K, V, S> {
    #[inline]
    fn type_desc() -> TypeDesc {
        map_desc::<K, V>()
    }
}

/// Pairs are captured in the map's iteration order, which is unspecified.
impl<K: Typed + Literal, V: Typed + Literal, S: BuildHasher + 'static> Literal
    for HashMap<K, V, S>
{
    fn to_value(&self) -> Value {
        map_value(Self::type_desc(), self.iter())
    }
}

impl<K: Typed + Literal, V: Typed + Literal> Typed for BTreeMap<K, V> {
    #[inline]
    fn type_desc() -> TypeDesc {
        map_desc::<K, V>()
    }
}

/// Pairs are captured in ascending key order.
impl<K: Typed + Literal, V: Typed + Literal> Literal for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        map_value(Self::type_desc(), self.iter())
    }
}

impl<K: Typed + Literal, V: Typed + Literal, S: BuildHasher + 'static> Typed
    for hashbrown::HashMap<K, V, S>
{
    #[inline]
    fn type_desc() -> TypeDesc {
        map_desc::<K, V>()
    }
}

impl<K: Typed + Literal, V: Typed + Literal, S: BuildHasher + 'static> Literal
    for hashbrown::HashMap<K, V, S>
{
    fn to_value(&self) -> Value {
        map_value(Self::type_desc(), self.iter())
    }
}

// -----------------------------------------------------------------------------
// Sets

impl<T: Typed + Literal, S: BuildHasher + 'static> Typed for HashSet<T, S> {
    #[inline]
    fn type_desc() -> TypeDesc {
        map_desc::<T, ()>()
    }
}

impl<T: Typed + Literal, S: BuildHasher + 'static> Literal for HashSet<T, S> {
    fn to_value(&self) -> Value {
        set_value(Self::type_desc(), self.iter())
    }
}

impl<T: Typed + Literal, S: BuildHasher + 'static> Typed for hashbrown::HashSet<T, S> {
    #[inline]
    fn type_desc() -> TypeDesc {
        map_desc::<T, ()>()
    }
}

impl<T: Typed + Literal, S: BuildHasher + 'static> Literal for hashbrown::HashSet<T, S> {
    fn to_value(&self) -> Value {
        set_value(Self::type_desc(), self.iter())
    }
}

impl<T: Typed + Literal> Typed for BTreeSet<T> {
    #[inline]
    fn type_desc() -> TypeDesc {
        map_desc::<T, ()>()
    }
}

impl<T: Typed + Literal> Literal for BTreeSet<T> {
    fn to_value(&self) -> Value {
        set_value(Self::type_desc(), self.iter())
    }
}
