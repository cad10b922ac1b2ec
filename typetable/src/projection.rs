use std::any::Any;
use std::fmt;

use crate::{Field, Index, Schema};

/// A column value seen through a projection.
///
/// Every `'static + Debug` type is a `Cell`. A `&dyn Cell` can be printed directly or turned
/// back into its concrete type with [`downcast_ref`](#method.downcast_ref).
pub trait Cell: Any + fmt::Debug + 'static {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> Cell for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Cell {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Receives the values produced by a projection, one call per projected column of each row.
pub trait Visitor {
    fn visit<T: Cell>(&mut self, index: Index, value: &T);
}

/// Adapts a closure over type-erased cells into a [`Visitor`].
pub(crate) struct CellFn<F>(pub(crate) F);

impl<F> Visitor for CellFn<F>
where
    F: FnMut(Index, &dyn Cell),
{
    #[inline]
    fn visit<T: Cell>(&mut self, index: Index, value: &T) {
        (self.0)(index, value)
    }
}

/// An ordered list of column types read from each row during a traversal.
///
/// Implemented for tuples of up to twelve types. Types may repeat and may appear in any order,
/// but each must be a column of `S`.
pub trait Projection<S: Schema> {
    /// Number of values produced per row.
    const LEN: usize;

    fn project<V: Visitor>(index: Index, row: &S, visitor: &mut V);
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_projection {
    ($($ty:ident),+) => {
        impl<S: Schema, $($ty: Cell),+> Projection<S> for ($($ty,)+)
        where
            $(S: Field<$ty>,)+
        {
            const LEN: usize = count!($($ty)+);

            #[inline]
            fn project<V: Visitor>(index: Index, row: &S, visitor: &mut V) {
                $(visitor.visit(index, <S as Field<$ty>>::field(row));)+
            }
        }
    };
}

impl_projection!(T0);
impl_projection!(T0, T1);
impl_projection!(T0, T1, T2);
impl_projection!(T0, T1, T2, T3);
impl_projection!(T0, T1, T2, T3, T4);
impl_projection!(T0, T1, T2, T3, T4, T5);
impl_projection!(T0, T1, T2, T3, T4, T5, T6);
impl_projection!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_projection!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_projection!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_projection!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_projection!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
