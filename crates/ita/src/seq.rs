//! The sequence protocol.
//!
//! A sequence is anything that can be handed a visitor and will call it once
//! per element, in order, until the visitor returns `false` or the source runs
//! out. [`Seq`] is the single-value form and [`Seq2`] the paired form.
//!
//! This module also provides the generic sources that turn ordinary Rust
//! collections and closures into sequences: [`values`], [`all`], [`from_fn`]
//! and [`from_fn2`].

use std::fmt;
use std::marker::PhantomData;

/// A lazy, push-style sequence of values.
///
/// Implementors call `f` once per element. If `f` returns `false` the
/// implementation must return immediately without producing anything else.
/// If `f` always returns `true`, every element is visited exactly once.
///
/// `visit` takes `&self`, so a sequence can be drained more than once. Whether
/// a second drain sees the same elements is a property of the source.
///
/// # Manual Implementation
///
/// ```
/// use ita::Seq;
///
/// struct Countdown(u32);
///
/// impl Seq for Countdown {
///     type Item = u32;
///
///     fn visit<F>(&self, mut f: F)
///     where
///         F: FnMut(u32) -> bool,
///     {
///         for n in (1..=self.0).rev() {
///             if !f(n) {
///                 return;
///             }
///         }
///     }
/// }
///
/// let mut seen = Vec::new();
/// Countdown(3).visit(|n| {
///     seen.push(n);
///     true
/// });
/// assert_eq!(seen, vec![3, 2, 1]);
/// ```
pub trait Seq {
    /// The element type.
    type Item;

    /// Calls `f` with each element until `f` returns `false`.
    fn visit<F>(&self, f: F)
    where
        F: FnMut(Self::Item) -> bool;
}

/// A lazy, push-style sequence of key/value pairs.
///
/// Same contract as [`Seq`] with a two-argument visitor. Keys are not required
/// to be unique or ordered; that is up to the source.
pub trait Seq2 {
    /// The first component of each pair.
    type Key;
    /// The second component of each pair.
    type Value;

    /// Calls `f` with each pair until `f` returns `false`.
    fn visit2<F>(&self, f: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool;
}

impl<S: Seq + ?Sized> Seq for &S {
    type Item = S::Item;

    #[inline]
    fn visit<F>(&self, f: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        (**self).visit(f)
    }
}

impl<S: Seq2 + ?Sized> Seq2 for &S {
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn visit2<F>(&self, f: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool,
    {
        (**self).visit2(f)
    }
}

// ============================================================================
// Collection sources
// ============================================================================

/// Sequence over the items of a cloneable iterable. Created by [`values`].
#[derive(Debug, Clone, Copy)]
pub struct Values<I>(I);

/// Creates a sequence over the items of `iterable`.
///
/// Each drain clones the iterable and walks the clone, so slices, `&Vec<T>`
/// and ranges can be drained repeatedly.
///
/// ```
/// use ita::{exec, values};
///
/// let words = ["rei", "ichi", "ni"];
/// let mut out = Vec::new();
/// exec(values(&words), |w| out.push(*w));
/// assert_eq!(out, words);
/// ```
pub fn values<I>(iterable: I) -> Values<I>
where
    I: IntoIterator + Clone,
{
    Values(iterable)
}

impl<I> Seq for Values<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn visit<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        for v in self.0.clone() {
            if !f(v) {
                return;
            }
        }
    }
}

/// Position/item sequence over a cloneable iterable. Created by [`all`].
#[derive(Debug, Clone, Copy)]
pub struct All<I>(I);

/// Creates a pair sequence yielding each item of `iterable` with its
/// zero-based position.
pub fn all<I>(iterable: I) -> All<I>
where
    I: IntoIterator + Clone,
{
    All(iterable)
}

impl<I> Seq2 for All<I>
where
    I: IntoIterator + Clone,
{
    type Key = usize;
    type Value = I::Item;

    fn visit2<F>(&self, mut f: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool,
    {
        for (i, v) in self.0.clone().into_iter().enumerate() {
            if !f(i, v) {
                return;
            }
        }
    }
}

// ============================================================================
// Closure sources
// ============================================================================

/// Sequence backed by a closure. Created by [`from_fn`].
pub struct FromFn<G, T> {
    produce: G,
    _item: PhantomData<fn() -> T>,
}

/// Wraps a closure that produces elements by calling the visitor it is given.
///
/// The closure must stop as soon as the visitor returns `false`.
///
/// ```
/// use ita::{from_fn, Seq};
///
/// let evens = from_fn(|visit: &mut dyn FnMut(u32) -> bool| {
///     let mut n = 0;
///     while visit(n) {
///         n += 2;
///     }
/// });
///
/// let mut taken = Vec::new();
/// evens.visit(|n| {
///     taken.push(n);
///     taken.len() < 3
/// });
/// assert_eq!(taken, vec![0, 2, 4]);
/// ```
pub fn from_fn<T, G>(produce: G) -> FromFn<G, T>
where
    G: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        produce,
        _item: PhantomData,
    }
}

impl<T, G> Seq for FromFn<G, T>
where
    G: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    #[inline]
    fn visit<F>(&self, mut f: F)
    where
        F: FnMut(T) -> bool,
    {
        (self.produce)(&mut f)
    }
}

impl<G: Clone, T> Clone for FromFn<G, T> {
    fn clone(&self) -> Self {
        FromFn {
            produce: self.produce.clone(),
            _item: PhantomData,
        }
    }
}

impl<G, T> fmt::Debug for FromFn<G, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Pair sequence backed by a closure. Created by [`from_fn2`].
pub struct FromFn2<G, K, V> {
    produce: G,
    _pair: PhantomData<fn() -> (K, V)>,
}

/// Two-argument counterpart of [`from_fn`].
pub fn from_fn2<K, V, G>(produce: G) -> FromFn2<G, K, V>
where
    G: Fn(&mut dyn FnMut(K, V) -> bool),
{
    FromFn2 {
        produce,
        _pair: PhantomData,
    }
}

impl<K, V, G> Seq2 for FromFn2<G, K, V>
where
    G: Fn(&mut dyn FnMut(K, V) -> bool),
{
    type Key = K;
    type Value = V;

    #[inline]
    fn visit2<F>(&self, mut f: F)
    where
        F: FnMut(K, V) -> bool,
    {
        (self.produce)(&mut f)
    }
}

impl<G: Clone, K, V> Clone for FromFn2<G, K, V> {
    fn clone(&self) -> Self {
        FromFn2 {
            produce: self.produce.clone(),
            _pair: PhantomData,
        }
    }
}

impl<G, K, V> fmt::Debug for FromFn2<G, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn2").finish_non_exhaustive()
    }
}
