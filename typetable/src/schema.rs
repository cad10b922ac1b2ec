use crate::Cell;

/// The shape of a row: an ordered list of distinct column types.
///
/// Implemented by `#[derive(Schema)]` on a tuple struct. The struct doubles as the row type,
/// holding one value per column. Column values are reached through [`Field`], keyed by the
/// value's type rather than by position or name.
pub trait Schema: Sized + 'static {
    /// Number of columns.
    const WIDTH: usize;

    /// A row where every column holds its type's default value.
    fn blank() -> Self;

    /// Display names of the columns, in schema order.
    fn headers() -> Vec<String>;

    #[inline]
    fn get<T>(&self) -> &T
    where
        Self: Field<T>,
    {
        <Self as Field<T>>::field(self)
    }

    #[inline]
    fn get_mut<T>(&mut self) -> &mut T
    where
        Self: Field<T>,
    {
        <Self as Field<T>>::field_mut(self)
    }

    /// Overwrites the column of type `T`, returning the value it held before.
    #[inline]
    fn set<T>(&mut self, value: T) -> T
    where
        Self: Field<T>,
    {
        std::mem::replace(<Self as Field<T>>::field_mut(self), value)
    }
}

/// Compile-time check emitted by the derive for every column type.
#[doc(hidden)]
#[inline(always)]
pub fn assert_column<T: Cell + Default>() {}

/// Access to the single column of type `T` in a row.
///
/// There is at most one impl per column type, which is what makes a repeated column type a
/// build error: the derive rejects it outright, and a repeat hidden behind an alias produces
/// conflicting impls.
pub trait Field<T> {
    /// Zero-based column of `T` within the schema.
    const POSITION: usize;

    fn field(&self) -> &T;

    fn field_mut(&mut self) -> &mut T;
}
