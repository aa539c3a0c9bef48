use std::borrow::Borrow;

use crate::witness::Equality;

/// The number of elements in the sequence.
pub fn length<T>(xs: &[T]) -> usize {
    xs.len()
}

/// Does the sequence contain `value`, as decided by the witness?
///
/// The empty sequence contains nothing, whatever the witness says.
pub fn member<T, E>(eq: &E, xs: &[T], value: &T) -> bool
where
    E: Equality<T>,
{
    xs.iter().any(|x| eq.equal(x, value))
}

/// A reusable containment predicate over one sequence.
///
/// Useful when many candidates are checked against the same sequence:
///
/// ```
/// use xeq::{membership, Structural};
///
/// let primes = [2, 3, 5, 7];
/// let is_prime = membership(Structural, &primes);
/// assert!(is_prime(&5));
/// assert!(!is_prime(&6));
/// ```
pub fn membership<'a, T, E>(eq: E, xs: &'a [T]) -> impl Fn(&T) -> bool + 'a
where
    E: Equality<T> + 'a,
{
    move |value| xs.iter().any(|x| eq.equal(x, value))
}

/// Does the predicate hold for at least one element? False on the empty
/// sequence.
pub fn any<T, P>(predicate: P, xs: &[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    xs.iter().any(predicate)
}

/// Does the predicate hold for every element? True on the empty sequence.
pub fn all<T, P>(predicate: P, xs: &[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    xs.iter().all(predicate)
}

/// Concatenate the pieces with the delimiter between adjacent pieces.
///
/// Empty pieces are kept, so delimiters can end up next to each other.
pub fn join<S>(delimiter: &str, xs: &[S]) -> String
where
    S: Borrow<str>,
{
    xs.join(delimiter)
}
