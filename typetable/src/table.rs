use crate::projection::CellFn;
use crate::{Assign, Cell, Error, Field, Projection, Result, Schema, Visitor};

/// Identifier of a row. Assigned on insertion in increasing order and never reused.
pub type Index = u64;

#[derive(Clone, Debug)]
struct Entry<S> {
    index: Index,
    row: S,
}

/// Rows of schema `S`, kept sorted by their [`Index`].
///
/// Indices are handed out in increasing order and rows are only ever appended or removed, so
/// the backing vector stays sorted and every point operation is a binary search.
#[derive(Clone, Debug)]
pub struct Table<S: Schema> {
    entries: Vec<Entry<S>>,
    headers: Vec<String>,
    next: Index,
}

impl<S: Schema> Default for Table<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Table<S> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let headers = S::headers();
        debug_assert_eq!(headers.len(), S::WIDTH);
        tracing::debug!(?headers, "created table");
        Self {
            entries: Vec::with_capacity(capacity),
            headers,
            next: 0,
        }
    }

    /// Display names of the columns, in schema order.
    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of live rows.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, index: Index) -> bool {
        self.position(index).is_some()
    }

    /// Appends a row with every column at its default value.
    pub fn insert(&mut self) -> Index {
        self.push(S::blank())
    }

    /// Appends a row, writing each of `values` into the column of the same type.
    ///
    /// Columns not covered by `values` keep their default value.
    ///
    /// ```
    /// use typetable::{Schema, Table};
    ///
    /// #[derive(Debug, Schema)]
    /// struct Sample(i32, char, String);
    ///
    /// let mut table = Table::<Sample>::new();
    /// let index = table.insert_with((String::from("three"), 1));
    /// assert_eq!(table.select::<i32>(index), Some(&1));
    /// assert_eq!(table.select::<char>(index), Some(&'\0'));
    /// ```
    pub fn insert_with<A: Assign<S>>(&mut self, values: A) -> Index {
        let mut row = S::blank();
        values.assign(&mut row);
        self.push(row)
    }

    fn push(&mut self, row: S) -> Index {
        let index = self.next;
        self.next += 1;
        self.entries.push(Entry { index, row });
        tracing::trace!(index, "inserted row");
        index
    }

    fn position(&self, index: Index) -> Option<usize> {
        self.entries
            .binary_search_by_key(&index, |entry| entry.index)
            .ok()
    }

    /// The whole row stored at `index`.
    pub fn row(&self, index: Index) -> Option<&S> {
        let position = self.position(index)?;
        Some(&self.entries[position].row)
    }

    /// The value of column `T` in the row at `index`.
    pub fn select<T>(&self, index: Index) -> Option<&T>
    where
        S: Field<T>,
    {
        self.row(index).map(|row| row.get::<T>())
    }

    /// Overwrites column `T` of the row at `index`. Returns `false`, changing nothing, if there
    /// is no such row.
    pub fn update<T>(&mut self, index: Index, value: T) -> bool
    where
        S: Field<T>,
    {
        self.try_update(index, value).is_ok()
    }

    /// Like [`update`](Self::update), returning the replaced value.
    pub fn try_update<T>(&mut self, index: Index, value: T) -> Result<T>
    where
        S: Field<T>,
    {
        match self.position(index) {
            Some(position) => Ok(self.entries[position].row.set(value)),
            None => {
                tracing::debug!(index, "update of missing row");
                Err(Error::NotFound { index })
            }
        }
    }

    /// Removes the row at `index`. Returns `false` if there is no such row.
    pub fn remove(&mut self, index: Index) -> bool {
        self.try_remove(index).is_ok()
    }

    /// Removes the row at `index` and hands it back.
    pub fn take(&mut self, index: Index) -> Option<S> {
        self.try_remove(index).ok()
    }

    pub fn try_remove(&mut self, index: Index) -> Result<S> {
        match self.position(index) {
            Some(position) => {
                let entry = self.entries.remove(position);
                tracing::trace!(index, "removed row");
                Ok(entry.row)
            }
            None => {
                tracing::debug!(index, "remove of missing row");
                Err(Error::NotFound { index })
            }
        }
    }

    /// Drives `visitor` over the columns in `P` for every row, in ascending index order.
    ///
    /// The visitor is called `P::LEN` times per row, once per projected type in projection order.
    pub fn visit<P, V>(&self, visitor: &mut V)
    where
        P: Projection<S>,
        V: Visitor,
    {
        for entry in &self.entries {
            P::project(entry.index, &entry.row, visitor);
        }
    }

    /// Calls `callback` with the index and value of each projected column, for every row.
    ///
    /// ```
    /// use typetable::{Schema, Table};
    ///
    /// #[derive(Debug, Schema)]
    /// struct Sample(i32, char, String);
    ///
    /// let mut table = Table::<Sample>::new();
    /// table.insert_with((4, '5', String::from("6")));
    ///
    /// let mut seen = Vec::new();
    /// table.project::<(char, i32)>(|index, value| seen.push(format!("{index}:{value:?}")));
    /// assert_eq!(seen, ["0:'5'", "0:4"]);
    /// ```
    pub fn project<P>(&self, callback: impl FnMut(Index, &dyn Cell))
    where
        P: Projection<S>,
    {
        self.visit::<P, _>(&mut CellFn(callback));
    }

    /// Calls `callback` with the value of column `T` for every row, in ascending index order.
    pub fn select_column<T>(&self, mut callback: impl FnMut(Index, &T))
    where
        S: Field<T>,
    {
        for entry in &self.entries {
            callback(entry.index, entry.row.get::<T>());
        }
    }
}
