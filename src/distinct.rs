use core::hash::Hash;

use hashbrown::HashSet;

use crate::Seq;

pub trait Distinct<T>: Seq<T> {
    /// The distinct elements of the sequence, keeping the first occurrence of
    /// each in its original position.
    ///
    /// Structural equality is the element type's `Eq`; a hash set keeps the
    /// scan O(n).
    #[must_use]
    fn distinct(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        let slice = self.as_slice();
        let mut seen = HashSet::with_capacity(slice.len());
        let mut list = Vec::new();
        for item in slice {
            if seen.insert(item) {
                list.push(item.clone());
            }
        }
        list
    }

    /// [`Distinct::distinct`] with a caller-supplied equality, for element
    /// types without a usable hash. Pairwise scan, O(n^2).
    #[must_use]
    fn distinct_by(&self, mut eq: impl FnMut(&T, &T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        let mut list: Vec<T> = Vec::new();
        for item in self.as_slice() {
            if !list.iter().any(|kept| eq(kept, item)) {
                list.push(item.clone());
            }
        }
        list
    }
}
impl<S, T> Distinct<T> for S where S: Seq<T> {}
