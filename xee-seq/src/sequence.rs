use crate::pull::Pull;

/// A lazy, possibly infinite producer of values.
///
/// Anything that can be turned into an iterator is a sequence: collections,
/// ranges, iterator chains, channel receivers, and generators. A sequence
/// is a recipe; traversing it runs the producer, and it can be traversed
/// again only if its source can.
///
/// Sequences can be consumed in two ways. Push traversal via
/// [`Sequence::each`] hands each element to a callback that decides whether
/// to continue. Pull traversal via [`Sequence::pull`] opens a handle that
/// is advanced one element at a time, which is what pairing two sequences
/// in lockstep requires.
pub trait Sequence: IntoIterator + Sized {
    /// Push every element into `yield_` until it returns `false`.
    ///
    /// Returns `true` if the sequence ran to completion, `false` if the
    /// consumer stopped it. Once the consumer stops, no further element is
    /// produced.
    fn each<F>(self, mut yield_: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        for item in self {
            if !yield_(item) {
                return false;
            }
        }
        true
    }

    /// Open a pull handle over this sequence.
    fn pull(self) -> Pull<Self::IntoIter> {
        Pull::new(self.into_iter())
    }
}

impl<S> Sequence for S where S: IntoIterator {}

/// A sequence of pairs, as produced by [`zip`](crate::zip) and
/// [`zip_all`](crate::zip_all).
pub trait Sequence2<A, B>: Sequence<Item = (A, B)> {
    /// Push traversal with the pair split into two arguments.
    fn each2<F>(self, mut yield_: F) -> bool
    where
        F: FnMut(A, B) -> bool,
    {
        self.each(|(a, b)| yield_(a, b))
    }
}

impl<S, A, B> Sequence2<A, B> for S where S: IntoIterator<Item = (A, B)> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_runs_to_completion() {
        let mut seen = Vec::new();
        let completed = vec![1, 2, 3].each(|i| {
            seen.push(i);
            true
        });
        assert!(completed);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_each_stops_when_asked() {
        let mut seen = Vec::new();
        let completed = (1..).each(|i| {
            seen.push(i);
            i < 3
        });
        assert!(!completed);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_each_empty() {
        let completed = Vec::<i32>::new().each(|_| panic!("nothing to yield"));
        assert!(completed);
    }

    #[test]
    fn test_each2() {
        let mut seen = Vec::new();
        let completed = vec![(1, "a"), (2, "b")].each2(|i, s| {
            seen.push(format!("{i}{s}"));
            true
        });
        assert!(completed);
        assert_eq!(seen, vec!["1a", "2b"]);
    }

    #[test]
    fn test_pull() {
        let mut pull = ["a", "b"].pull();
        assert_eq!(pull.next(), Some("a"));
        assert_eq!(pull.next(), Some("b"));
        assert_eq!(pull.next(), None);
        assert!(pull.is_released());
    }
}
