use crate::{Field, Schema};

/// A set of column values that can be written into a fresh row.
///
/// Implemented for `()` and for tuples of up to twelve values. Every value must have a type that
/// is a column of `S`, and no two values may share a type. Each value lands in the column
/// matching its type, so the order of the tuple does not matter.
pub trait Assign<S: Schema> {
    #[doc(hidden)]
    const DISTINCT: ();

    fn assign(self, row: &mut S);
}

impl<S: Schema> Assign<S> for () {
    const DISTINCT: () = ();

    #[inline]
    fn assign(self, _row: &mut S) {}
}

const fn distinct(positions: &[usize]) -> bool {
    let mut i = 0;
    while i < positions.len() {
        let mut j = i + 1;
        while j < positions.len() {
            if positions[i] == positions[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

macro_rules! impl_assign {
    ($($ty:ident $value:ident),+) => {
        impl<S: Schema, $($ty),+> Assign<S> for ($($ty,)+)
        where
            $(S: Field<$ty>,)+
        {
            const DISTINCT: () = assert!(
                distinct(&[$(<S as Field<$ty>>::POSITION),+]),
                "insert values must have pairwise distinct column types"
            );

            #[inline]
            fn assign(self, row: &mut S) {
                #[allow(clippy::let_unit_value)]
                let () = <Self as Assign<S>>::DISTINCT;
                let ($($value,)+) = self;
                $(*<S as Field<$ty>>::field_mut(row) = $value;)+
            }
        }
    };
}

impl_assign!(T0 v0);
impl_assign!(T0 v0, T1 v1);
impl_assign!(T0 v0, T1 v1, T2 v2);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8, T9 v9);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8, T9 v9, T10 v10);
impl_assign!(T0 v0, T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8, T9 v9, T10 v10, T11 v11);
