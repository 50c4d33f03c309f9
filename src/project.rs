use crate::Seq;

pub trait Select<T>: Seq<T> {
    /// Projects each element into a new form, one output record per input
    /// element.
    ///
    /// The output carries exactly what `projection` computes; nothing from
    /// the input element is carried over implicitly.
    #[must_use]
    fn select<U>(&self, mut projection: impl FnMut(&T) -> U) -> Vec<U> {
        self.as_slice().iter().map(|item| projection(item)).collect()
    }
}
impl<S, T> Select<T> for S where S: Seq<T> {}
