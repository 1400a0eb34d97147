//! Combinators over [`Seq`] and [`Seq2`].
//!
//! Every combinator is lazy: calling it only stores the upstream sequence and
//! the closure. Work happens when the result is drained, one element at a
//! time, with the downstream visitor's stop signal forwarded straight to the
//! upstream. Nothing is buffered between stages.
//!
//! | Single | Paired | Kind |
//! |--------|--------|------|
//! | [`pipe`] | [`pipe2`] | transform each element |
//! | [`filter`] | [`filter2`] | keep elements matching a predicate |
//! | [`exec`] | [`exec2`] | terminal, drain with a side effect |
//! | [`try_exec`] | [`try_exec2`] | terminal, stop on the first error |
//! | [`take_first`], [`take_second`] | | project a pair sequence |

use crate::seq::{Seq, Seq2};

// ============================================================================
// Transform
// ============================================================================

/// Sequence of mapped elements. Created by [`pipe`].
#[derive(Debug, Clone, Copy)]
pub struct Pipe<S, F> {
    seq: S,
    f: F,
}

/// Applies `f` to each element of `seq` and pipes the result downstream.
///
/// The output has exactly as many elements as `seq`, in the same order.
///
/// ```
/// use ita::{pipe, values, Chain};
///
/// let s = ["rei", "ichi"];
/// let upper: Vec<String> = Chain::new(pipe(values(&s), |w| w.to_uppercase())).collect();
/// assert_eq!(upper, vec!["REI", "ICHI"]);
/// ```
pub fn pipe<S, U, F>(seq: S, f: F) -> Pipe<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    Pipe { seq, f }
}

impl<S, U, F> Seq for Pipe<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn visit<V>(&self, mut visit: V)
    where
        V: FnMut(U) -> bool,
    {
        self.seq.visit(|v| visit((self.f)(v)))
    }
}

/// Pair sequence of mapped pairs. Created by [`pipe2`].
#[derive(Debug, Clone, Copy)]
pub struct Pipe2<S, F> {
    seq: S,
    f: F,
}

/// Applies `f` to each pair of `seq`.
pub fn pipe2<S, K, V, F>(seq: S, f: F) -> Pipe2<S, F>
where
    S: Seq2,
    F: Fn(S::Key, S::Value) -> (K, V),
{
    Pipe2 { seq, f }
}

impl<S, K, V, F> Seq2 for Pipe2<S, F>
where
    S: Seq2,
    F: Fn(S::Key, S::Value) -> (K, V),
{
    type Key = K;
    type Value = V;

    #[inline]
    fn visit2<W>(&self, mut visit: W)
    where
        W: FnMut(K, V) -> bool,
    {
        self.seq.visit2(|k, v| {
            let (k, v) = (self.f)(k, v);
            visit(k, v)
        })
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Sequence of the elements matching a predicate. Created by [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<S, P> {
    seq: S,
    pred: P,
}

/// Keeps only the elements of `seq` for which `pred` returns `true`.
///
/// Relative order is preserved. Rejected elements never reach the visitor and
/// cannot stop the drain.
pub fn filter<S, P>(seq: S, pred: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter { seq, pred }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn visit<V>(&self, mut visit: V)
    where
        V: FnMut(S::Item) -> bool,
    {
        self.seq.visit(|v| !(self.pred)(&v) || visit(v))
    }
}

/// Pair sequence of the pairs matching a predicate. Created by [`filter2`].
#[derive(Debug, Clone, Copy)]
pub struct Filter2<S, P> {
    seq: S,
    pred: P,
}

/// Keeps only the pairs of `seq` for which `pred` returns `true`.
pub fn filter2<S, P>(seq: S, pred: P) -> Filter2<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    Filter2 { seq, pred }
}

impl<S, P> Seq2 for Filter2<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn visit2<W>(&self, mut visit: W)
    where
        W: FnMut(S::Key, S::Value) -> bool,
    {
        self.seq.visit2(|k, v| !(self.pred)(&k, &v) || visit(k, v))
    }
}

// ============================================================================
// Terminals
// ============================================================================

/// Drains `seq`, calling `f` on every element.
///
/// `f` cannot stop the drain; `exec` returns once the upstream is exhausted.
pub fn exec<S, F>(seq: S, mut f: F)
where
    S: Seq,
    F: FnMut(S::Item),
{
    seq.visit(|v| {
        f(v);
        true
    })
}

/// Drains `seq`, calling `f` on every pair.
pub fn exec2<S, F>(seq: S, mut f: F)
where
    S: Seq2,
    F: FnMut(S::Key, S::Value),
{
    seq.visit2(|k, v| {
        f(k, v);
        true
    })
}

/// Drains `seq` with a fallible action, stopping at the first error.
///
/// Returns the action's error unchanged, or `Ok(())` once the upstream is
/// exhausted. No element after the failing one is produced.
///
/// ```
/// use ita::{try_exec, values};
///
/// let mut sum = 0;
/// let result = try_exec(values(1..10), |n| {
///     if n > 3 {
///         return Err(format!("{n} is too big"));
///     }
///     sum += n;
///     Ok(())
/// });
/// assert_eq!(result, Err("4 is too big".to_string()));
/// assert_eq!(sum, 6);
/// ```
pub fn try_exec<S, E, F>(seq: S, mut f: F) -> Result<(), E>
where
    S: Seq,
    F: FnMut(S::Item) -> Result<(), E>,
{
    let mut result = Ok(());
    seq.visit(|v| match f(v) {
        Ok(()) => true,
        Err(e) => {
            result = Err(e);
            false
        }
    });
    result
}

/// Pair counterpart of [`try_exec`].
pub fn try_exec2<S, E, F>(seq: S, mut f: F) -> Result<(), E>
where
    S: Seq2,
    F: FnMut(S::Key, S::Value) -> Result<(), E>,
{
    let mut result = Ok(());
    seq.visit2(|k, v| match f(k, v) {
        Ok(()) => true,
        Err(e) => {
            result = Err(e);
            false
        }
    });
    result
}

// ============================================================================
// Projection
// ============================================================================

/// Sequence of the first components of a pair sequence. Created by
/// [`take_first`].
#[derive(Debug, Clone, Copy)]
pub struct TakeFirst<S>(S);

/// Returns a sequence of the keys (or indices) of `seq`.
pub fn take_first<S: Seq2>(seq: S) -> TakeFirst<S> {
    TakeFirst(seq)
}

impl<S: Seq2> Seq for TakeFirst<S> {
    type Item = S::Key;

    #[inline]
    fn visit<V>(&self, mut visit: V)
    where
        V: FnMut(S::Key) -> bool,
    {
        self.0.visit2(|k, _| visit(k))
    }
}

/// Sequence of the second components of a pair sequence. Created by
/// [`take_second`].
#[derive(Debug, Clone, Copy)]
pub struct TakeSecond<S>(S);

/// Returns a sequence of the values of `seq`.
pub fn take_second<S: Seq2>(seq: S) -> TakeSecond<S> {
    TakeSecond(seq)
}

impl<S: Seq2> Seq for TakeSecond<S> {
    type Item = S::Value;

    #[inline]
    fn visit<V>(&self, mut visit: V)
    where
        V: FnMut(S::Value) -> bool,
    {
        self.0.visit2(|_, v| visit(v))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::adapt::num_at;
    use crate::seq::{all, values};

    const WORDS: [&str; 6] = ["rei", "ichi", "ni", "san", "shi", "go"];

    fn drain<S: Seq>(seq: S) -> Vec<S::Item> {
        let mut out = Vec::new();
        exec(seq, |v| out.push(v));
        out
    }

    fn drain2<S: Seq2>(seq: S) -> Vec<(S::Key, S::Value)> {
        let mut out = Vec::new();
        exec2(seq, |k, v| out.push((k, v)));
        out
    }

    // ========================================================================
    // pipe
    // ========================================================================

    #[test]
    fn pipe_maps_each_element() {
        let seq = pipe(values(WORDS), |w| w.len());
        assert_eq!(drain(seq), vec![3, 4, 2, 3, 3, 2]);
    }

    #[test]
    fn pipe_twice() {
        let seq = pipe(values(WORDS), str::to_uppercase);
        let seq = pipe(seq, |s| s[..2].to_string());
        assert_eq!(drain(seq), vec!["RE", "IC", "NI", "SA", "SH", "GO"]);
    }

    #[test]
    fn pipe_is_lazy() {
        let calls = Cell::new(0);
        let seq = pipe(values(0..5), |n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(calls.get(), 0);
        drain(&seq);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn pipe_stops_upstream() {
        let produced = Cell::new(0);
        let mapped = Cell::new(0);
        let src = num_at(
            || 100,
            |i| {
                produced.set(produced.get() + 1);
                i
            },
        );
        let seq = pipe(src, |i| {
            mapped.set(mapped.get() + 1);
            i * 2
        });
        seq.visit(|v| v < 4);
        assert_eq!(produced.get(), 3);
        assert_eq!(mapped.get(), 3);
    }

    #[test]
    fn pipe2_maps_pairs() {
        let seq = pipe2(all(["a", "b"]), |i, s| (s, i + 1));
        assert_eq!(drain2(seq), vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn pipe2_stops_upstream() {
        let mut seen = 0;
        pipe2(all(0..10), |i, v| (i, v)).visit2(|_, _| {
            seen += 1;
            seen < 2
        });
        assert_eq!(seen, 2);
    }

    // ========================================================================
    // filter
    // ========================================================================

    #[test]
    fn filter_keeps_matching_in_order() {
        let seq = filter(values(WORDS), |w| w.len() >= 3);
        let seq = filter(seq, |w| w.starts_with('s'));
        assert_eq!(drain(seq), vec!["san", "shi"]);
    }

    #[test]
    fn filter_rejected_elements_do_not_stop() {
        let mut seen = Vec::new();
        filter(values(0..10), |n| n % 3 == 0).visit(|n| {
            seen.push(n);
            seen.len() < 2
        });
        assert_eq!(seen, vec![0, 3]);
    }

    #[test]
    fn filter_none_match() {
        assert!(drain(filter(values(WORDS), |_| false)).is_empty());
    }

    #[test]
    fn filter2_on_keys_and_values() {
        let seq = filter2(all(WORDS), |i, w| i % 2 == 0 && w.len() > 2);
        assert_eq!(drain2(seq), vec![(0, "rei"), (4, "shi")]);
    }

    // ========================================================================
    // exec / try_exec
    // ========================================================================

    #[test]
    fn exec_drains_everything() {
        let mut count = 0;
        exec(values(WORDS), |_| count += 1);
        assert_eq!(count, WORDS.len());
    }

    #[test]
    fn exec_on_empty_source() {
        let mut count = 0;
        exec(values(Vec::<u8>::new()), |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn exec2_drains_everything() {
        let mut keys = Vec::new();
        exec2(all(WORDS), |i, _| keys.push(i));
        assert_eq!(keys, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn try_exec_ok_when_all_succeed() {
        let mut seen = 0;
        let result: Result<(), ()> = try_exec(values(0..4), |_| {
            seen += 1;
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, 4);
    }

    #[test]
    fn try_exec_stops_at_first_error() {
        let produced = Cell::new(0);
        let src = num_at(
            || 10u8,
            |i| {
                produced.set(produced.get() + 1);
                i
            },
        );
        let result = try_exec(src, |i| if i == 2 { Err(i) } else { Ok(()) });
        assert_eq!(result, Err(2));
        assert_eq!(produced.get(), 3);
    }

    #[test]
    fn try_exec2_returns_caller_error() {
        let result = try_exec2(all(WORDS), |i, w| {
            if w == "san" {
                Err(format!("bad word at {i}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("bad word at 3".to_string()));
    }

    // ========================================================================
    // projection
    // ========================================================================

    #[test]
    fn take_first_yields_indices() {
        assert_eq!(drain(take_first(all(WORDS))), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn take_second_yields_values() {
        assert_eq!(drain(take_second(all(WORDS))), WORDS);
    }

    #[test]
    fn projections_stop_upstream() {
        let mut seen = 0;
        take_second(all(0..100)).visit(|_| {
            seen += 1;
            seen < 3
        });
        assert_eq!(seen, 3);
    }
}
