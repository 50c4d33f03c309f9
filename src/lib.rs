#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

pub mod distinct;
pub mod filter;
pub mod order;
pub mod page;
pub mod pick;
pub mod project;
pub mod quantify;

pub use crate::{
    distinct::Distinct,
    filter::Where,
    order::{Order, OrderError, SortKey},
    page::Page,
    pick::Pick,
    project::Select,
    quantify::Quantify,
};

/// An ordered, finite, in-memory sequence of elements.
///
/// Every query trait in this crate has `Seq` as its supertrait and a blanket
/// impl over it, so implementing `Seq` for a container grants it the whole
/// query surface. Queries never mutate the sequence they are called on.
pub trait Seq<T> {
    #[must_use]
    fn as_slice(&self) -> &[T];
}
pub trait SeqExt<T>: Seq<T> {
    /// A new container holding the same elements in the same order.
    ///
    /// The backing storage never aliases the input's; elements cross over by
    /// `Clone`, so shared-ownership element types keep sharing.
    #[must_use]
    fn copy(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}
impl<S, T> SeqExt<T> for S where S: Seq<T> {}

impl<T> Seq<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T, const N: usize> Seq<T> for [T; N] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> Seq<T> for &[T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
impl<T> Seq<T> for &mut [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}
