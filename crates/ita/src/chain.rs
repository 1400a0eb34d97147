//! Fluent wrappers for chaining combinators left to right.
//!
//! [`Chain`] and [`Chain2`] hold a sequence and nothing else. Each method
//! forwards to the matching free combinator and wraps the result again, so
//!
//! ```text
//! Chain::new(s).pipe(f).filter(p).exec(g)
//! ```
//!
//! is the same computation as `exec(filter(pipe(s, f), p), g)`.

use crate::combinators::{
    exec, exec2, filter, filter2, pipe, pipe2, take_first, take_second, try_exec, try_exec2,
    Filter, Filter2, Pipe, Pipe2, TakeFirst, TakeSecond,
};
use crate::seq::{Seq, Seq2};

/// Chainable wrapper around a [`Seq`].
///
/// # Example
///
/// ```
/// use ita::{values, Chain};
///
/// let mut out = Vec::new();
/// Chain::new(values(["rei", "ichi", "ni", "san", "shi", "go"]))
///     .pipe(str::to_uppercase)
///     .filter(|s| s.len() <= 2)
///     .exec(|s| out.push(s));
///
/// assert_eq!(out, vec!["NI", "GO"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Chain<S>(S);

impl<S: Seq> Chain<S> {
    /// Wraps `seq`.
    pub fn new(seq: S) -> Self {
        Chain(seq)
    }

    /// See [`pipe`].
    pub fn pipe<U, F>(self, f: F) -> Chain<Pipe<S, F>>
    where
        F: Fn(S::Item) -> U,
    {
        Chain(pipe(self.0, f))
    }

    /// See [`filter`].
    pub fn filter<P>(self, pred: P) -> Chain<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        Chain(filter(self.0, pred))
    }

    /// See [`exec`].
    pub fn exec<F>(self, f: F)
    where
        F: FnMut(S::Item),
    {
        exec(self.0, f)
    }

    /// See [`try_exec`].
    pub fn try_exec<E, F>(self, f: F) -> Result<(), E>
    where
        F: FnMut(S::Item) -> Result<(), E>,
    {
        try_exec(self.0, f)
    }

    /// Drains the chain into a new collection.
    pub fn collect<B>(self) -> B
    where
        B: Default + Extend<S::Item>,
    {
        let mut out = B::default();
        exec(self.0, |v| out.extend(Some(v)));
        out
    }

    /// Returns the wrapped sequence.
    pub fn seq(self) -> S {
        self.0
    }
}

impl<S: Seq> Seq for Chain<S> {
    type Item = S::Item;

    #[inline]
    fn visit<F>(&self, f: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        self.0.visit(f)
    }
}

impl<S: Seq> From<S> for Chain<S> {
    fn from(seq: S) -> Self {
        Chain(seq)
    }
}

/// Chainable wrapper around a [`Seq2`].
///
/// The projections [`take_first`](Chain2::take_first) and
/// [`take_second`](Chain2::take_second) step down to a [`Chain`].
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Chain2<S>(S);

impl<S: Seq2> Chain2<S> {
    /// Wraps `seq`.
    pub fn new(seq: S) -> Self {
        Chain2(seq)
    }

    /// See [`pipe2`].
    pub fn pipe<K, V, F>(self, f: F) -> Chain2<Pipe2<S, F>>
    where
        F: Fn(S::Key, S::Value) -> (K, V),
    {
        Chain2(pipe2(self.0, f))
    }

    /// See [`filter2`].
    pub fn filter<P>(self, pred: P) -> Chain2<Filter2<S, P>>
    where
        P: Fn(&S::Key, &S::Value) -> bool,
    {
        Chain2(filter2(self.0, pred))
    }

    /// See [`exec2`].
    pub fn exec<F>(self, f: F)
    where
        F: FnMut(S::Key, S::Value),
    {
        exec2(self.0, f)
    }

    /// See [`try_exec2`].
    pub fn try_exec<E, F>(self, f: F) -> Result<(), E>
    where
        F: FnMut(S::Key, S::Value) -> Result<(), E>,
    {
        try_exec2(self.0, f)
    }

    /// See [`take_first`].
    pub fn take_first(self) -> Chain<TakeFirst<S>> {
        Chain(take_first(self.0))
    }

    /// See [`take_second`].
    pub fn take_second(self) -> Chain<TakeSecond<S>> {
        Chain(take_second(self.0))
    }

    /// Drains the chain into a collection of `(key, value)` pairs.
    pub fn collect<B>(self) -> B
    where
        B: Default + Extend<(S::Key, S::Value)>,
    {
        let mut out = B::default();
        exec2(self.0, |k, v| out.extend(Some((k, v))));
        out
    }

    /// Returns the wrapped sequence.
    pub fn seq(self) -> S {
        self.0
    }
}

impl<S: Seq2> Seq2 for Chain2<S> {
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn visit2<F>(&self, f: F)
    where
        F: FnMut(S::Key, S::Value) -> bool,
    {
        self.0.visit2(f)
    }
}

impl<S: Seq2> From<S> for Chain2<S> {
    fn from(seq: S) -> Self {
        Chain2(seq)
    }
}
