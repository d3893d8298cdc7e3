//! Sources of random choices.

use core::ops::RangeInclusive;

/// Source of uniform random choices.
///
/// Every random decision of the generator goes through this trait,
/// so that tests can replace randomness with a fixed script.
pub trait Choose {
    /// Return a number uniformly drawn from `0..n`.
    ///
    /// Panics if `n` is zero.
    fn below(&mut self, n: usize) -> usize;

    /// Return true with probability `1/n`.
    fn one_in(&mut self, n: usize) -> bool {
        self.below(n) == 0
    }

    /// Return a number uniformly drawn from the range.
    ///
    /// Panics if the range is empty or has more than `usize::MAX` elements.
    fn in_range(&mut self, range: RangeInclusive<usize>) -> usize {
        let (lo, hi) = range.into_inner();
        assert!(lo <= hi, "empty range {lo}..={hi}");
        assert!(hi - lo < usize::MAX, "range {lo}..={hi} too large");
        lo + self.below(hi - lo + 1)
    }

    /// Return a uniformly chosen element of a non-empty slice.
    fn pick<'a, T>(&mut self, xs: &'a [T]) -> &'a T {
        &xs[self.below(xs.len())]
    }
}

impl<R: rand::Rng> Choose for R {
    fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot choose from nothing");
        self.random_range(0..n)
    }
}
