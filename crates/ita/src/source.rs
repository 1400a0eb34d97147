//! Traits for types that expose indexed or keyed access.
//!
//! [`Indexed`] and [`Keyed`] give the "count + accessor" and "keys + lookup"
//! shapes a name, so a type can implement them once and then be turned into a
//! sequence with [`indexed`], [`indexed_with_index`] or [`keyed`].

use num_traits::PrimInt;

use crate::adapt::{keys_values, num_at, num_at_index, KeysValues, NumAt, NumAtIndex};

/// A source with a known element count and random access by index.
///
/// # Example
///
/// ```
/// use ita::{indexed, Chain, Indexed};
///
/// struct Words {
///     items: Vec<String>,
/// }
///
/// impl Indexed for Words {
///     type Index = usize;
///     type Item = String;
///
///     fn num(&self) -> usize {
///         self.items.len()
///     }
///
///     fn at(&self, index: usize) -> String {
///         self.items[index].clone()
///     }
/// }
///
/// let words = Words { items: vec!["rei".into(), "ichi".into()] };
/// let got: Vec<String> = Chain::new(indexed(&words)).collect();
/// assert_eq!(got, vec!["rei", "ichi"]);
/// ```
pub trait Indexed {
    /// Integer type used for the count and the indices.
    type Index: PrimInt;
    /// Element type.
    type Item;

    /// Returns the number of elements.
    fn num(&self) -> Self::Index;

    /// Returns the element at `index`, where `0 <= index < num()`.
    fn at(&self, index: Self::Index) -> Self::Item;
}

/// A source with a list of keys and lookup by key.
pub trait Keyed {
    type Key;
    type Value;
    /// Collection returned by [`keys`](Keyed::keys).
    type Keys: IntoIterator<Item = Self::Key>;

    /// Returns the keys, in the order they should be visited.
    fn keys(&self) -> Self::Keys;

    /// Returns the value stored under `key`.
    fn value(&self, key: &Self::Key) -> Self::Value;
}

/// Returns a sequence over the elements of `source`, in index order.
#[allow(clippy::type_complexity)]
pub fn indexed<S: Indexed>(
    source: &S,
) -> NumAt<impl Fn() -> S::Index + '_, impl Fn(S::Index) -> S::Item + '_> {
    num_at(move || source.num(), move |i| source.at(i))
}

/// Returns a pair sequence of `(index, element)` over `source`.
#[allow(clippy::type_complexity)]
pub fn indexed_with_index<S: Indexed>(
    source: &S,
) -> NumAtIndex<impl Fn() -> S::Index + '_, impl Fn(S::Index) -> S::Item + '_> {
    num_at_index(move || source.num(), move |i| source.at(i))
}

/// Returns a pair sequence of `(key, value)` over `source`, in key order.
#[allow(clippy::type_complexity)]
pub fn keyed<S: Keyed>(
    source: &S,
) -> KeysValues<impl Fn() -> S::Keys + '_, impl Fn(&S::Key) -> S::Value + '_> {
    keys_values(move || source.keys(), move |k: &S::Key| source.value(k))
}
