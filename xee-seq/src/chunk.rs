use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::error;

// the most a chunk buffer reserves before it has seen any elements
const MAXIMUM_INITIAL_CAPACITY: usize = 1024;

/// Split a sequence into consecutive, non-overlapping chunks of `n`
/// elements.
///
/// The last chunk holds whatever is left over and may be shorter. An empty
/// sequence yields no chunks at all. Each chunk is collected before it is
/// yielded.
///
/// A chunk size of zero or less is rejected with
/// [`Error::InvalidChunkSize`](error::Error::InvalidChunkSize).
pub fn chunk<S>(seq: S, n: isize) -> error::Result<Chunks<S::IntoIter>>
where
    S: IntoIterator,
{
    let size = usize::try_from(n)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(error::Error::InvalidChunkSize(n))?;
    Ok(Chunks {
        iter: seq.into_iter(),
        size,
    })
}

#[derive(Debug, Clone)]
pub struct Chunks<I> {
    iter: I,
    size: NonZeroUsize,
}

impl<I> Iterator for Chunks<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.size.get();
        // a very large chunk size or an infinite source shouldn't allocate
        // up front; the buffer grows as elements arrive
        let (lower, _) = self.iter.size_hint();
        let mut buffer = Vec::with_capacity(size.min(lower).min(MAXIMUM_INITIAL_CAPACITY));
        while buffer.len() < size {
            match self.iter.next() {
                Some(item) => buffer.push(item),
                None => break,
            }
        }
        if buffer.is_empty() {
            None
        } else {
            Some(buffer)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.size.get();
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(size),
            upper.map(|upper| upper.div_ceil(size)),
        )
    }
}

impl<I> FusedIterator for Chunks<I> where I: FusedIterator {}

static_assertions::assert_impl_all!(Chunks<std::vec::IntoIter<u8>>: FusedIterator, Send);

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use insta::assert_debug_snapshot;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::even(vec!["a", "b", "c", "d"], 2, vec![vec!["a", "b"], vec!["c", "d"]])]
    #[case::partial_last(vec!["a", "b", "c", "d", "e"], 2, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]])]
    #[case::size_greater_than_length(vec!["a", "b"], 3, vec![vec!["a", "b"]])]
    #[case::size_one(vec!["a", "b"], 1, vec![vec!["a"], vec!["b"]])]
    #[case::empty(vec![], 2, vec![])]
    fn test_chunk(
        #[case] input: Vec<&'static str>,
        #[case] n: isize,
        #[case] expected: Vec<Vec<&'static str>>,
    ) {
        assert_eq!(chunk(input, n).unwrap().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-2)]
    fn test_chunk_invalid_size(#[case] n: isize) {
        assert_eq!(
            chunk(vec![1, 2, 3], n).unwrap_err(),
            error::Error::InvalidChunkSize(n)
        );
    }

    #[test]
    fn test_chunk_snapshot() {
        let chunks = chunk(1..=5, 2).unwrap().collect::<Vec<_>>();
        assert_debug_snapshot!(chunks, @r###"
        [
            [
                1,
                2,
            ],
            [
                3,
                4,
            ],
            [
                5,
            ],
        ]
        "###);
    }

    #[test]
    fn test_chunk_pulls_one_chunk_at_a_time() {
        let pulled = Cell::new(0);
        let source = (1..).inspect(|_| pulled.set(pulled.get() + 1));
        let mut chunks = chunk(source, 3).unwrap();
        assert_eq!(pulled.get(), 0);
        assert_eq!(chunks.next(), Some(vec![1, 2, 3]));
        assert_eq!(pulled.get(), 3);
        assert_eq!(chunks.next(), Some(vec![4, 5, 6]));
        assert_eq!(pulled.get(), 6);
    }

    #[test]
    fn test_chunk_huge_size() {
        let chunks = chunk(vec![1, 2], isize::MAX).unwrap().collect::<Vec<_>>();
        assert_eq!(chunks, vec![vec![1, 2]]);
    }

    // a finite source that claims to be endless, like `1..` does
    struct Boundless(std::vec::IntoIter<i32>);

    impl Iterator for Boundless {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.0.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX, None)
        }
    }

    #[test]
    fn test_chunk_huge_size_unbounded_size_hint() {
        let mut chunks = chunk(Boundless(vec![1, 2, 3].into_iter()), isize::MAX).unwrap();
        assert_eq!(chunks.next(), Some(vec![1, 2, 3]));
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_chunk_size_hint() {
        assert_eq!(
            chunk(vec![1, 2, 3, 4, 5], 2).unwrap().size_hint(),
            (3, Some(3))
        );
        assert_eq!(chunk(Vec::<i32>::new(), 2).unwrap().size_hint(), (0, Some(0)));
    }
}
