use crate::Seq;

pub trait Page<T>: Seq<T> {
    /// Everything after the first `count` elements; empty if `count` reaches
    /// past the end.
    #[must_use]
    fn skip(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        let slice = self.as_slice();
        slice[count.min(slice.len())..].to_vec()
    }
    /// At most the first `count` elements; the whole sequence if `count`
    /// reaches past the end.
    #[must_use]
    fn take(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        let slice = self.as_slice();
        slice[..count.min(slice.len())].to_vec()
    }
}
impl<S, T> Page<T> for S where S: Seq<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_take() {
        let items = vec![1, 2, 3, 4];
        assert_eq!(items.skip(1), [2, 3, 4]);
        assert_eq!(items.take(2), [1, 2]);
        assert!(items.skip(9).is_empty());
        assert_eq!(items.take(9), items);
        assert!(items.take(0).is_empty());
    }

    #[test]
    fn test_take_concat_skip_reconstructs() {
        let items = vec![1, 2, 3, 4, 5];
        for m in 0..=items.len() {
            let mut joined = items.take(m);
            joined.extend(items.skip(m));
            assert_eq!(joined, items);
        }
    }
}
