//! Array utility functions
//!
//! This module provides manipulation helpers over slices: shuffling with an
//! optional caller-supplied randomness source, head/tail concatenation,
//! default-initialized allocation, and a non-boxing read-through view over
//! primitive slices.

use std::ops::Index;

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly random permutation of the input elements
///
/// Uses the thread-local RNG. For a reproducible permutation, use
/// [`shuffle_with`] with a seeded RNG.
///
/// # Arguments
///
/// * `arr` - The slice to shuffle
///
/// # Returns
///
/// A new vector containing the same elements in shuffled order
///
/// # Example
///
/// ```rust
/// use platform_utils::array::shuffle;
///
/// let data = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&data);
/// shuffled.sort();
/// assert_eq!(shuffled, data);
/// ```
pub fn shuffle<T: Clone>(arr: &[T]) -> Vec<T> {
    shuffle_with(arr, &mut rand::thread_rng())
}

/// Return a permutation of the input elements drawn from a supplied RNG
///
/// Fisher-Yates over a copy of the input. With a seeded RNG (for example
/// `StdRng::seed_from_u64`) the permutation is deterministic for that seed.
///
/// # Arguments
///
/// * `arr` - The slice to shuffle
/// * `rng` - The randomness source driving the permutation
///
/// # Returns
///
/// A new vector containing the same elements in shuffled order
///
/// # Example
///
/// ```rust
/// use platform_utils::array::shuffle_with;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let data = vec![1, 2, 3, 4, 5];
/// let a = shuffle_with(&data, &mut StdRng::seed_from_u64(7));
/// let b = shuffle_with(&data, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(arr: &[T], rng: &mut R) -> Vec<T> {
    let mut out = arr.to_vec();
    out.shuffle(rng);
    out
}

/// Prepend an element, copying into a vector one element longer
///
/// # Arguments
///
/// * `element` - The element to place at the head
/// * `arr` - The slice whose elements follow in their original order
///
/// # Returns
///
/// A new vector of length `arr.len() + 1`
///
/// # Example
///
/// ```rust
/// use platform_utils::array::concat_front;
///
/// let arr = vec![2, 3, 4];
/// assert_eq!(concat_front(1, &arr), vec![1, 2, 3, 4]);
/// ```
pub fn concat_front<T: Clone>(element: T, arr: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(arr.len() + 1);
    out.push(element);
    out.extend_from_slice(arr);
    out
}

/// Append an element, copying into a vector one element longer
///
/// # Arguments
///
/// * `arr` - The slice whose elements lead in their original order
/// * `element` - The element to place at the tail
///
/// # Returns
///
/// A new vector of length `arr.len() + 1`
///
/// # Example
///
/// ```rust
/// use platform_utils::array::concat_back;
///
/// let arr = vec![1, 2, 3];
/// assert_eq!(concat_back(&arr, 4), vec![1, 2, 3, 4]);
/// ```
pub fn concat_back<T: Clone>(arr: &[T], element: T) -> Vec<T> {
    let mut out = Vec::with_capacity(arr.len() + 1);
    out.extend_from_slice(arr);
    out.push(element);
    out
}

/// Allocate a default-initialized vector of the given length
///
/// The element type is fixed at compile time, so no runtime type token is
/// needed; numeric types come back zeroed.
///
/// # Arguments
///
/// * `length` - The number of elements to allocate
///
/// # Returns
///
/// A vector of `length` default values
///
/// # Example
///
/// ```rust
/// use platform_utils::array::new_array;
///
/// let zeros: Vec<i64> = new_array(4);
/// assert_eq!(zeros, vec![0, 0, 0, 0]);
/// ```
pub fn new_array<T: Default + Clone>(length: usize) -> Vec<T> {
    vec![T::default(); length]
}

/// Read-through list view backed by a primitive slice
///
/// The view holds only a borrow of the backing slice: nothing is copied at
/// construction and elements are produced by value on access. Compared to
/// materializing a `Vec` this saves the per-element copy up front, the same
/// space optimization the boxing-avoiding list views over `int`/`long`/
/// `double` arrays provide in managed languages.
///
/// Constructed via [`as_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceList<'a, T> {
    backing: &'a [T],
}

/// Wrap a primitive slice in a read-through [`SliceList`] view
///
/// Defined for any `Copy` element kind; the usual customers are the fixed-
/// width numeric types.
///
/// # Arguments
///
/// * `backing` - The slice backing the view
///
/// # Returns
///
/// A borrowing view; no allocation takes place
///
/// # Example
///
/// ```rust
/// use platform_utils::array::as_list;
///
/// let ints = as_list(&[1i32, 2, 3]);
/// assert_eq!(ints.get(1), Some(2));
///
/// let longs = as_list(&[1i64 << 40]);
/// assert_eq!(longs.first(), Some(1i64 << 40));
///
/// let doubles = as_list(&[0.5f64, 1.5]);
/// assert_eq!(doubles.iter().sum::<f64>(), 2.0);
/// ```
pub fn as_list<T: Copy>(backing: &[T]) -> SliceList<'_, T> {
    SliceList { backing }
}

impl<'a, T: Copy> SliceList<'a, T> {
    /// Number of elements in the backing slice
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// `true` when the backing slice has no elements
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Element at `index` by value, or `None` when out of bounds
    pub fn get(&self, index: usize) -> Option<T> {
        self.backing.get(index).copied()
    }

    /// First element by value, or `None` when empty
    pub fn first(&self) -> Option<T> {
        self.backing.first().copied()
    }

    /// Last element by value, or `None` when empty
    pub fn last(&self) -> Option<T> {
        self.backing.last().copied()
    }

    /// Iterate over the elements by value
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, T>> {
        self.backing.iter().copied()
    }

    /// Materialize the view into an owned vector
    pub fn to_vec(&self) -> Vec<T> {
        self.backing.to_vec()
    }
}

impl<'a, T: Copy + PartialEq> SliceList<'a, T> {
    /// `true` when the backing slice contains `value`
    pub fn contains(&self, value: &T) -> bool {
        self.backing.contains(value)
    }
}

impl<'a, T: Copy> Index<usize> for SliceList<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.backing[index]
    }
}

impl<'a, T: Copy> IntoIterator for SliceList<'a, T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.iter().copied()
    }
}
