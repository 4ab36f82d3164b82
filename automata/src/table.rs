use std::collections::btree_map::{self, BTreeMap};

/// A two-key lookup table, keyed first by row and then by column.
///
/// Rows and columns are kept ordered so that iterating a table always yields entries in the same
/// order, which keeps equality and printing canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table<R, C, V>
where
    R: Ord,
    C: Ord,
{
    map: BTreeMap<R, BTreeMap<C, V>>,
}

impl<R, C, V> Table<R, C, V>
where
    R: Ord,
    C: Ord,
{
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Set the value in the table with the given keys, returning the previous value if any.
    #[inline]
    pub fn set(&mut self, row: R, col: C, val: V) -> Option<V> {
        self.map.entry(row).or_default().insert(col, val)
    }

    /// Set the value in the table with the given keys, or if some value already exists for those
    /// keys, execute the given callback on it.
    #[inline]
    pub fn set_or<F>(&mut self, row: R, col: C, val: V, or: F)
    where
        F: FnOnce(&mut V),
    {
        match self.map.entry(row).or_default().entry(col) {
            btree_map::Entry::Occupied(mut entry) => or(entry.get_mut()),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(val);
            }
        }
    }

    /// Retrieve an immutable reference to the value in the table with the given keys.
    #[inline]
    pub fn get(&self, row: &R, col: &C) -> Option<&V> {
        self.map.get(row).and_then(|c| c.get(col))
    }

    /// Iterate over the columns and values of a single row. Missing rows are empty.
    #[inline]
    pub fn get_row(&self, row: &R) -> impl Iterator<Item = (&C, &V)> {
        self.map.get(row).into_iter().flatten()
    }

    /// Number of values stored in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.values().map(BTreeMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every `(row, column, value)` triple, in row then column order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, &V)> {
        self.map
            .iter()
            .flat_map(|(row, c)| c.iter().map(move |(col, val)| (row, col, val)))
    }
}

impl<R, C, V> Default for Table<R, C, V>
where
    R: Ord,
    C: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C, V> FromIterator<(R, C, V)> for Table<R, C, V>
where
    R: Ord,
    C: Ord,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = (R, C, V)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (row, col, val) in iter {
            table.set(row, col, val);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn test_set_or() {
        let mut table: Table<usize, char, Vec<usize>> = Table::new();
        table.set_or(0, 'a', vec![1], |v| v.push(1));
        table.set_or(0, 'a', vec![2], |v| v.push(2));
        table.set_or(1, 'b', vec![3], |v| v.push(3));

        assert_eq!(Some(&vec![1, 2]), table.get(&0, &'a'));
        assert_eq!(Some(&vec![3]), table.get(&1, &'b'));
        assert_eq!(None, table.get(&1, &'a'));
        assert_eq!(2, table.len());
    }

    #[test]
    fn test_iter_ordered() {
        let table: Table<usize, char, usize> =
            vec![(2, 'b', 0), (0, 'b', 1), (0, 'a', 2)].into_iter().collect();
        let entries: Vec<_> = table.iter().map(|(r, c, v)| (*r, *c, *v)).collect();

        assert_eq!(vec![(0, 'a', 2), (0, 'b', 1), (2, 'b', 0)], entries);
        assert_eq!(0, table.get_row(&1).count());
    }
}
