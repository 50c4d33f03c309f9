use crate::Seq;

pub trait Where<T>: Seq<T> {
    /// The elements for which `predicate` holds, in their original order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enumerable::filter::Where;
    ///
    /// let even = vec![1, 2, 3, 4].where_by(|x| x % 2 == 0);
    /// assert_eq!(even, [2, 4]);
    /// ```
    #[must_use]
    fn where_by(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}
impl<S, T> Where<T> for S where S: Seq<T> {}
