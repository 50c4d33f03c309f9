use core::cmp::Ordering;

use thiserror::Error;

use crate::Seq;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("element at index {0} has no sort key")]
    KeyMissing(usize),
}

/// Comparison strategy of a sort key type.
///
/// - `bool`: `true` sorts before `false`
/// - integers and floats: numeric order (floats use the total order)
/// - `String`, `&str`, `char`: case-insensitive lexicographic order
pub trait SortKey {
    #[must_use]
    fn key_cmp(&self, other: &Self) -> Ordering;
}

impl SortKey for bool {
    fn key_cmp(&self, other: &Self) -> Ordering {
        // true before false
        other.cmp(self)
    }
}

macro_rules! ord_sort_key {
    ($($int:ty),* $(,)?) => {
        $(impl SortKey for $int {
            fn key_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}
ord_sort_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl SortKey for f32 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
impl SortKey for f64 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    let a = a.chars().flat_map(char::to_uppercase);
    let b = b.chars().flat_map(char::to_uppercase);
    a.cmp(b)
}
impl SortKey for String {
    fn key_cmp(&self, other: &Self) -> Ordering {
        caseless_cmp(self, other)
    }
}
impl SortKey for &str {
    fn key_cmp(&self, other: &Self) -> Ordering {
        caseless_cmp(self, other)
    }
}
impl SortKey for char {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.to_uppercase().cmp(other.to_uppercase())
    }
}

pub trait Order<T>: Seq<T> {
    /// Stable ascending sort by the value `key` extracts from each element.
    #[must_use]
    fn order_by<K: SortKey>(&self, mut key: impl FnMut(&T) -> K) -> Vec<T>
    where
        T: Clone,
    {
        let mut list = self.as_slice().to_vec();
        list.sort_by(|a, b| key(a).key_cmp(&key(b)));
        list
    }

    /// [`Order::order_by`] reversed, in a fresh container. Elements with
    /// equal keys therefore appear in reversed input order.
    #[must_use]
    fn order_by_descending<K: SortKey>(&self, key: impl FnMut(&T) -> K) -> Vec<T>
    where
        T: Clone,
    {
        let mut list = self.order_by(key);
        list.reverse();
        list
    }

    /// Best-effort sort for keys that may be absent.
    ///
    /// The strategy is sampled from the first element: if the sequence is
    /// empty or the first element yields no key, the result is an unsorted
    /// copy. Otherwise keyless elements sort after every keyed element.
    #[must_use]
    fn order_by_partial<K: SortKey>(&self, mut key: impl FnMut(&T) -> Option<K>) -> Vec<T>
    where
        T: Clone,
    {
        let mut list = self.as_slice().to_vec();
        let Some(first) = list.first() else {
            return list;
        };
        if key(first).is_none() {
            return list;
        }
        list.sort_by(|a, b| match (key(a), key(b)) {
            (Some(a), Some(b)) => a.key_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        list
    }

    /// Like [`Order::order_by_partial`] but fails on the first keyless
    /// element instead of sorting it to the back.
    fn try_order_by<K: SortKey>(
        &self,
        mut key: impl FnMut(&T) -> Option<K>,
    ) -> Result<Vec<T>, OrderError>
    where
        T: Clone,
    {
        let slice = self.as_slice();
        let mut keys = Vec::with_capacity(slice.len());
        for (i, item) in slice.iter().enumerate() {
            let Some(k) = key(item) else {
                return Err(OrderError::KeyMissing(i));
            };
            keys.push(k);
        }
        let mut order: Vec<usize> = (0..slice.len()).collect();
        order.sort_by(|&a, &b| keys[a].key_cmp(&keys[b]));
        Ok(order.into_iter().map(|i| slice[i].clone()).collect())
    }
}
impl<S, T> Order<T> for S where S: Seq<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.into(),
            age,
        }
    }

    #[test]
    fn test_order_by_string_and_number() {
        let people = vec![person("b", 2), person("a", 1)];
        let by_name = people.order_by(|p| p.name.clone());
        assert_eq!(by_name, [person("a", 1), person("b", 2)]);
        let by_age = people.order_by(|p| p.age);
        assert_eq!(by_age, by_name);
        assert_eq!(people, [person("b", 2), person("a", 1)]);
    }

    #[test]
    fn test_order_by_descending() {
        let items = vec![3, 1, 2];
        assert_eq!(items.order_by(|x| *x), [1, 2, 3]);
        assert_eq!(items.order_by_descending(|x| *x), [3, 2, 1]);
        assert_eq!(items.order_by_descending(|x| *x).len(), items.len());
    }

    #[test]
    fn test_order_by_bool_true_first() {
        let items = vec![false, true, false, true];
        assert_eq!(items.order_by(|b| *b), [true, true, false, false]);
    }

    #[test]
    fn test_order_by_case_insensitive() {
        let items: Vec<String> = vec!["b".into(), "A".into(), "a".into()];
        let sorted = items.order_by(|s| s.clone());
        // "A" and "a" compare equal, stability keeps their input order
        assert_eq!(sorted, ["A", "a", "b"]);
    }

    #[test]
    fn test_order_by_stable() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = items.order_by(|pair| pair.0);
        assert_eq!(sorted, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_order_by_partial_sniffs_first_element() {
        let empty: Vec<(Option<u32>, char)> = vec![];
        assert!(empty.order_by_partial(|pair| pair.0).is_empty());

        // keyless first element disables sorting
        let items = vec![(None, 'a'), (Some(2), 'b'), (Some(1), 'c')];
        assert_eq!(items.order_by_partial(|pair| pair.0), items);

        // keyless later elements sort to the back
        let items = vec![(Some(2), 'a'), (None, 'b'), (Some(1), 'c')];
        let sorted = items.order_by_partial(|pair| pair.0);
        assert_eq!(sorted, [(Some(1), 'c'), (Some(2), 'a'), (None, 'b')]);
    }

    #[test]
    fn test_try_order_by() {
        let items = vec![(Some(2), 'a'), (Some(1), 'b')];
        assert_eq!(
            items.try_order_by(|pair| pair.0).unwrap(),
            [(Some(1), 'b'), (Some(2), 'a')]
        );

        let items = vec![(Some(2), 'a'), (None, 'b')];
        assert_eq!(
            items.try_order_by(|pair| pair.0),
            Err(OrderError::KeyMissing(1))
        );
    }

    #[test]
    fn test_order_by_float_total() {
        let items = vec![2.0_f64, f64::NAN, 1.0, -0.0];
        let sorted = items.order_by(|x| *x);
        assert_eq!(sorted[0], -0.0);
        assert_eq!(sorted[1], 1.0);
        assert_eq!(sorted[2], 2.0);
        assert!(sorted[3].is_nan());
    }
}
