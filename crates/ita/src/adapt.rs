//! Adapters that build sequences from non-sequence data sources.
//!
//! Many types only expose "a count plus an element-at-index accessor" or
//! "a list of keys plus a lookup". The constructors here turn those shapes
//! into [`Seq`] / [`Seq2`] values so they can be piped through the
//! combinators without changing the type itself.
//!
//! The count (or key list) is read once, at the start of each drain, before
//! any element is produced.

use num_traits::PrimInt;

use crate::seq::{Seq, Seq2};

/// Sequence over `at(0) .. at(num() - 1)`. Created by [`num_at`].
#[derive(Debug, Clone, Copy)]
pub struct NumAt<C, A> {
    num: C,
    at: A,
}

/// Creates a sequence for a source that provides only a count function and
/// an element-at-index function.
///
/// - `num` returns the total number of elements.
/// - `at` takes an index and returns the corresponding element.
///
/// Elements are visited at indices `0, 1, .., num() - 1` in ascending order.
/// A count of zero or less produces nothing.
///
/// ```
/// use ita::{num_at, Chain};
///
/// let words = vec!["rei", "ichi", "ni"];
/// let got: Vec<&str> = Chain::new(num_at(|| words.len(), |i| words[i])).collect();
/// assert_eq!(got, words);
/// ```
pub fn num_at<N, T, C, A>(num: C, at: A) -> NumAt<C, A>
where
    N: PrimInt,
    C: Fn() -> N,
    A: Fn(N) -> T,
{
    NumAt { num, at }
}

impl<N, T, C, A> Seq for NumAt<C, A>
where
    N: PrimInt,
    C: Fn() -> N,
    A: Fn(N) -> T,
{
    type Item = T;

    fn visit<F>(&self, mut f: F)
    where
        F: FnMut(T) -> bool,
    {
        let n = (self.num)();
        let mut i = N::zero();
        while i < n {
            if !f((self.at)(i)) {
                return;
            }
            i = i + N::one();
        }
    }
}

/// Index/element pair sequence. Created by [`num_at_index`].
#[derive(Debug, Clone, Copy)]
pub struct NumAtIndex<C, A> {
    num: C,
    at: A,
}

/// Variation of [`num_at`] that yields each element together with its index.
pub fn num_at_index<N, T, C, A>(num: C, at: A) -> NumAtIndex<C, A>
where
    N: PrimInt,
    C: Fn() -> N,
    A: Fn(N) -> T,
{
    NumAtIndex { num, at }
}

impl<N, T, C, A> Seq2 for NumAtIndex<C, A>
where
    N: PrimInt,
    C: Fn() -> N,
    A: Fn(N) -> T,
{
    type Key = N;
    type Value = T;

    fn visit2<F>(&self, mut f: F)
    where
        F: FnMut(N, T) -> bool,
    {
        let n = (self.num)();
        let mut i = N::zero();
        while i < n {
            if !f(i, (self.at)(i)) {
                return;
            }
            i = i + N::one();
        }
    }
}

/// Key/value pair sequence over a materialized key list. Created by
/// [`keys_values`].
#[derive(Debug, Clone, Copy)]
pub struct KeysValues<KF, VF> {
    keys: KF,
    value: VF,
}

/// Creates a pair sequence for a source that provides only a key-list
/// function and a value-by-key function.
///
/// Pairs are visited in exactly the order `keys()` returns them. A key that
/// appears twice is visited twice, each time with a fresh lookup.
///
/// ```
/// use std::collections::BTreeMap;
/// use ita::{keys_values, Chain2};
///
/// let m = BTreeMap::from([("ni", 2), ("ichi", 1)]);
/// let pairs: Vec<(&str, i32)> = Chain2::new(keys_values(
///     || m.keys().copied().collect::<Vec<_>>(),
///     |k| m[k],
/// ))
/// .collect();
/// assert_eq!(pairs, vec![("ichi", 1), ("ni", 2)]);
/// ```
pub fn keys_values<K, V, I, KF, VF>(keys: KF, value: VF) -> KeysValues<KF, VF>
where
    I: IntoIterator<Item = K>,
    KF: Fn() -> I,
    VF: Fn(&K) -> V,
{
    KeysValues { keys, value }
}

impl<K, V, I, KF, VF> Seq2 for KeysValues<KF, VF>
where
    I: IntoIterator<Item = K>,
    KF: Fn() -> I,
    VF: Fn(&K) -> V,
{
    type Key = K;
    type Value = V;

    fn visit2<F>(&self, mut f: F)
    where
        F: FnMut(K, V) -> bool,
    {
        for k in (self.keys)() {
            let v = (self.value)(&k);
            if !f(k, v) {
                return;
            }
        }
    }
}

/// Key/value pair sequence whose keys come from another sequence. Created by
/// [`keys_values_seq`].
#[derive(Debug, Clone, Copy)]
pub struct KeysValuesSeq<S, VF> {
    keys: S,
    value: VF,
}

/// Variation of [`keys_values`] that takes the keys as a [`Seq`].
///
/// Key production follows the key sequence's own pull semantics; each value
/// is looked up right after its key is produced.
pub fn keys_values_seq<S, V, VF>(keys: S, value: VF) -> KeysValuesSeq<S, VF>
where
    S: Seq,
    VF: Fn(&S::Item) -> V,
{
    KeysValuesSeq { keys, value }
}

impl<S, V, VF> Seq2 for KeysValuesSeq<S, VF>
where
    S: Seq,
    VF: Fn(&S::Item) -> V,
{
    type Key = S::Item;
    type Value = V;

    fn visit2<F>(&self, mut f: F)
    where
        F: FnMut(S::Item, V) -> bool,
    {
        self.keys.visit(|k| {
            let v = (self.value)(&k);
            f(k, v)
        })
    }
}
