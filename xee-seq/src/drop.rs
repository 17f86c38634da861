use std::iter::FusedIterator;

/// Skip the first `n` elements of a sequence and yield the rest.
///
/// A negative `n` skips nothing. The skipping happens when the first
/// element is requested, not here.
pub fn drop<S>(seq: S, n: isize) -> Dropped<S::IntoIter>
where
    S: IntoIterator,
{
    Dropped {
        iter: seq.into_iter(),
        remaining: usize::try_from(n).unwrap_or(0),
    }
}

/// Skip the longest prefix whose elements satisfy `predicate`, then yield
/// everything from the first element that fails it onwards.
///
/// `predicate` is called at most once per element, and never again after it
/// first returns `false`.
pub fn drop_while<S, P>(seq: S, predicate: P) -> DroppedWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    DroppedWhile {
        iter: seq.into_iter(),
        predicate: Some(predicate),
    }
}

#[derive(Debug, Clone)]
pub struct Dropped<I> {
    iter: I,
    remaining: usize,
}

impl<I> Iterator for Dropped<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.iter.next()?;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|upper| upper.saturating_sub(self.remaining)),
        )
    }
}

impl<I> FusedIterator for Dropped<I> where I: FusedIterator {}

#[derive(Debug, Clone)]
pub struct DroppedWhile<I, P> {
    iter: I,
    // None once the prefix has been dropped
    predicate: Option<P>,
}

impl<I, P> Iterator for DroppedWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(mut predicate) = self.predicate.take() {
            loop {
                let item = self.iter.next();
                match item {
                    Some(item) if predicate(&item) => continue,
                    // either the first failing element or the end of the
                    // sequence; in both cases the prefix is done
                    _ => return item,
                }
            }
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.predicate.is_some() {
            // we don't know how much of the prefix will be dropped
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I, P> FusedIterator for DroppedWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

static_assertions::assert_impl_all!(Dropped<std::vec::IntoIter<u8>>: FusedIterator, Send);
