//! Fixed-size batching.

use std::num::NonZeroUsize;

/// Iterator over contiguous batches of a slice.
pub type Batches<'a, T> = std::slice::Chunks<'a, T>;

/// Splits `items` into contiguous batches of `size` elements.
///
/// The last batch may be shorter. The iterator is lazy; calling `divide`
/// again restarts from the first batch.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use stocksync_mapper::divide;
///
/// let size = NonZeroUsize::new(2).unwrap();
/// let batches: Vec<_> = divide(&[1, 2, 3], size).collect();
/// assert_eq!(batches, vec![&[1, 2][..], &[3][..]]);
/// ```
pub fn divide<T>(items: &[T], size: NonZeroUsize) -> Batches<'_, T> {
    items.chunks(size.get())
}
