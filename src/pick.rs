use crate::Seq;

/// First-element queries. `None` is the no-match sentinel; nothing here
/// signals an error.
pub trait Pick<T>: Seq<T> {
    /// The element at index 0, or `None` when the sequence is empty.
    ///
    /// Value-independent: a first element such as `0`, `false`, or `""` is
    /// still returned.
    #[must_use]
    fn first_item(&self) -> Option<&T> {
        self.as_slice().first()
    }
    /// The first element satisfying `predicate`, scanning in order.
    #[must_use]
    fn first_where(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.as_slice().iter().find(|item| predicate(item))
    }
}
impl<S, T> Pick<T> for S where S: Seq<T> {}
