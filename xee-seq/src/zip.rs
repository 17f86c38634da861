use std::iter::FusedIterator;

use crate::pull::Pull;
use crate::sequence::Sequence;

/// Pair up two sequences in lockstep, stopping as soon as either runs out.
///
/// Each pair pulls one element from `a`, then one from `b`. If `a` yields
/// an element but `b` is exhausted, that element of `a` is discarded. Both
/// pull handles are released as soon as the pairing ends, and otherwise
/// when the result is dropped.
pub fn zip<A, B>(a: A, b: B) -> Zipped<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zipped {
        a: a.pull(),
        b: b.pull(),
    }
}

/// Pair up two sequences in lockstep until both run out.
///
/// Once one side is exhausted, `fill_a` or `fill_b` stands in for its
/// elements. The result ends only when both sides come up empty in the same
/// step.
pub fn zip_all<A, B>(
    a: A,
    b: B,
    fill_a: A::Item,
    fill_b: B::Item,
) -> ZippedAll<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Clone,
    B::Item: Clone,
{
    ZippedAll {
        a: a.pull(),
        b: b.pull(),
        fill_a,
        fill_b,
    }
}

#[derive(Debug, Clone)]
pub struct Zipped<A, B> {
    a: Pull<A>,
    b: Pull<B>,
}

impl<A, B> Zipped<A, B>
where
    A: Iterator,
    B: Iterator,
{
    fn release(&mut self) {
        self.a.release();
        self.b.release();
    }
}

impl<A, B> Iterator for Zipped<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let Some(a) = self.a.next() else {
            self.release();
            return None;
        };
        let Some(b) = self.b.next() else {
            self.release();
            return None;
        };
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        (a_lower.min(b_lower), upper)
    }
}

impl<A, B> FusedIterator for Zipped<A, B>
where
    A: Iterator,
    B: Iterator,
{
}

#[derive(Debug, Clone)]
pub struct ZippedAll<A, B>
where
    A: Iterator,
    B: Iterator,
{
    a: Pull<A>,
    b: Pull<B>,
    fill_a: A::Item,
    fill_b: B::Item,
}

impl<A, B> Iterator for ZippedAll<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        // an exhausted side releases itself and keeps returning None
        match (self.a.next(), self.b.next()) {
            (Some(a), Some(b)) => Some((a, b)),
            (Some(a), None) => Some((a, self.fill_b.clone())),
            (None, Some(b)) => Some((self.fill_a.clone(), b)),
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        (a_lower.max(b_lower), upper)
    }
}

impl<A, B> FusedIterator for ZippedAll<A, B>
where
    A: Iterator,
    B: Iterator,
    A::Item: Clone,
    B::Item: Clone,
{
}

static_assertions::assert_impl_all!(
    Zipped<std::vec::IntoIter<u8>, std::vec::IntoIter<char>>: FusedIterator, Send
);
static_assertions::assert_impl_all!(
    ZippedAll<std::vec::IntoIter<u8>, std::vec::IntoIter<char>>: FusedIterator, Send
);
