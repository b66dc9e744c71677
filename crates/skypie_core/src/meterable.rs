//! Restartable value streams
//!
//! A [`Meterable`] is anything that evolves month by month: a loan's payment
//! split, an asset's retained value. Every call to [`Meterable::produce`]
//! starts a fresh, independent stream from the same initial state, so one
//! model can be consumed by several readers without sharing cursors.

/// A restartable, infinite producer of monthly values
pub trait Meterable {
    /// Value yielded once per elapsed month
    type Item;

    /// Stream type; implementations never return `None`
    type Stream: Iterator<Item = Self::Item>;

    /// Start a new stream at month zero
    fn produce(&self) -> Self::Stream;

    /// Value at zero-based `index` of a freshly produced stream
    fn at(&self, index: u32) -> Self::Item {
        self.produce()
            .nth(index as usize)
            .unwrap_or_else(|| unreachable!("meterable streams are infinite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts up from a fixed start
    struct Counter(u32);

    impl Meterable for Counter {
        type Item = u32;
        type Stream = std::ops::RangeFrom<u32>;

        fn produce(&self) -> Self::Stream {
            self.0..
        }
    }

    #[test]
    fn test_at_is_zero_indexed() {
        let counter = Counter(5);
        assert_eq!(counter.at(0), 5);
        assert_eq!(counter.at(3), 8);
    }

    #[test]
    fn test_produce_is_independent() {
        let counter = Counter(0);
        let mut first = counter.produce();
        first.next();
        first.next();

        let mut second = counter.produce();
        assert_eq!(second.next(), Some(0));
        assert_eq!(first.next(), Some(2));
    }
}
