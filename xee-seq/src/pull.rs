use std::iter::FusedIterator;

/// A pull handle: external, one-at-a-time iteration over a sequence with
/// explicit release.
///
/// Releasing drops the underlying iterator, and with it whatever the
/// producer holds (a suspended generator, a channel receiver, a file). A
/// handle is released when it is exhausted, when [`Pull::release`] is
/// called, or when it is dropped, whichever comes first. After release,
/// [`Iterator::next`] keeps returning `None` without touching the source.
#[derive(Debug, Clone)]
pub struct Pull<I> {
    iter: Option<I>,
}

impl<I> Pull<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }

    /// Stop the underlying producer. Releasing twice is a no-op.
    pub fn release(&mut self) {
        self.iter = None;
    }

    pub fn is_released(&self) -> bool {
        self.iter.is_none()
    }
}

impl<I> Iterator for Pull<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.as_mut()?.next();
        if item.is_none() {
            // exhausted, so there's no reason to hold on to the producer
            self.release();
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I> FusedIterator for Pull<I> where I: Iterator {}

static_assertions::assert_impl_all!(Pull<std::vec::IntoIter<u8>>: Iterator, FusedIterator, Send, Sync);
