use std::iter::FusedIterator;

/// Yield at most the first `n` elements of a sequence.
///
/// A negative `n` yields nothing. Running out of elements before `n` is
/// reached is not an error; the result is simply shorter.
pub fn take<S>(seq: S, n: isize) -> Taken<S::IntoIter>
where
    S: IntoIterator,
{
    Taken {
        iter: seq.into_iter(),
        remaining: usize::try_from(n).unwrap_or(0),
    }
}

/// Yield elements while `predicate` holds, stopping at the first element
/// that fails it. That element is not yielded.
pub fn take_while<S, P>(seq: S, predicate: P) -> TakenWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    TakenWhile {
        iter: seq.into_iter(),
        predicate,
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct Taken<I> {
    iter: I,
    remaining: usize,
}

impl<I> Iterator for Taken<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // once we've taken enough, the source is left alone
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I> FusedIterator for Taken<I> where I: Iterator {}

#[derive(Debug, Clone)]
pub struct TakenWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for TakenWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next();
        match item {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            let (_, upper) = self.iter.size_hint();
            (0, upper)
        }
    }
}

impl<I, P> FusedIterator for TakenWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

static_assertions::assert_impl_all!(Taken<std::ops::RangeFrom<u64>>: FusedIterator, Send);
