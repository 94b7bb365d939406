//! Element-wise transformation, filtering, predicate tests and clamped
//! slicing.
//!
//! Every function here places no bounds on the element type beyond what the
//! result needs: [`filter`] clones matches into a new vector, the rest work
//! through references or in place.
//!
//! # Mutation contract
//!
//! | Function | Input | Result |
//! |---|---|---|
//! | [`for_each`] | overwritten in place | none |
//! | [`filter`] | untouched | new `Vec` |
//! | [`some`] / [`every`] | untouched | `bool` |
//! | [`safe_slice`] | untouched | borrowed view |

/// Replaces every element with `f(&element)`, in ascending index order.
///
/// A panic in `f` propagates to the caller; slots before the failing index
/// have already been overwritten.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use arrtillery::seq::for_each;
/// let mut v = vec![1, 2, 3];
/// for_each(&mut v, |x| x * 10);
/// assert_eq!(v, vec![10, 20, 30]);
/// ```
pub fn for_each<T, F>(seq: &mut [T], mut f: F)
where
    F: FnMut(&T) -> T,
{
    for slot in seq.iter_mut() {
        *slot = f(&*slot);
    }
}

/// Returns the elements satisfying `predicate`, in their original order.
///
/// The input is not modified. The result never reserves more than
/// `seq.len()` slots and its length is exactly the number of matches, so an
/// empty input or a predicate that never holds yields an empty `Vec`.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use arrtillery::seq::filter;
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |x| x % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut filtered = Vec::with_capacity(seq.len());
    for item in seq {
        if predicate(item) {
            filtered.push(item.clone());
        }
    }
    filtered
}

/// Returns `true` as soon as one element satisfies `predicate`.
///
/// Scanning stops at the first match, so `predicate` is called at most
/// `k + 1` times where `k` is the index of that match. An empty sequence
/// gives `false`.
///
/// # Examples
/// ```
/// use arrtillery::seq::some;
/// assert!(some(&[1, 3, 4], |x| x % 2 == 0));
/// assert!(!some(&[1, 3, 5], |x| x % 2 == 0));
/// ```
pub fn some<T, P>(seq: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// Returns `false` as soon as one element satisfies `predicate`, `true`
/// otherwise.
///
/// Note the polarity: this is a "none match" test. The result is `true`
/// for an empty sequence or when `predicate` holds for no element, and
/// scanning stops at the first element for which `predicate` is `true`.
/// It always equals `!some(seq, predicate)`.
///
/// # Examples
/// ```
/// use arrtillery::seq::every;
/// assert!(every(&[1, 3, 5], |x| x % 2 == 0));
/// assert!(!every(&[1, 2, 3], |x| x % 2 == 0));
/// assert!(every::<i32, _>(&[], |_| true));
/// ```
pub fn every<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    for item in seq {
        if predicate(item) {
            return false;
        }
    }
    true
}

/// Borrows `seq[start..end]` after clamping both bounds into range.
///
/// - `start < 0` is treated as `0`.
/// - `end > len` is treated as `len`, and `end < 0` as `0`.
/// - If `start > end` after clamping, the result is empty.
///
/// Never panics, whatever the bounds.
///
/// # Examples
/// ```
/// use arrtillery::seq::safe_slice;
/// let v = [1, 2, 3];
/// assert_eq!(safe_slice(&v, -5, 1_000_000), &[1, 2, 3]);
/// assert_eq!(safe_slice(&v, 1, 2), &[2]);
/// assert!(safe_slice(&v, 2, 1).is_empty());
/// ```
pub fn safe_slice<T>(seq: &[T], start: isize, end: isize) -> &[T] {
    let end = clamp_index(end, seq.len());
    let start = clamp_index(start, seq.len()).min(end);
    &seq[start..end]
}

/// Maps a signed index into `0..=len`.
fn clamp_index(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |i| i.min(len))
}
