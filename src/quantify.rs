use crate::Seq;

pub trait Quantify<T>: Seq<T> {
    /// True iff every element satisfies `predicate`; vacuously true when the
    /// sequence is empty.
    #[must_use]
    fn all(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.as_slice().iter().all(|item| predicate(item))
    }
    /// True iff at least one element satisfies `predicate`; false when the
    /// sequence is empty.
    #[must_use]
    fn any(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.as_slice().iter().any(|item| predicate(item))
    }
}
impl<S, T> Quantify<T> for S where S: Seq<T> {}
