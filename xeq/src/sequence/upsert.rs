use nonempty::NonEmpty;

use crate::witness::Equality;

/// Insert or update an element, as decided by the witness.
///
/// If some element counts as the same as `value`, the first such element is
/// replaced in place and everything else keeps its position. Otherwise
/// `value` is appended at the end. Either way the result cannot be empty,
/// so it is a [`NonEmpty`].
pub fn upsert<T, E>(eq: &E, value: T, xs: &[T]) -> NonEmpty<T>
where
    T: Clone,
    E: Equality<T>,
{
    match xs.iter().position(|x| eq.equal(x, &value)) {
        Some(0) => NonEmpty {
            head: value,
            tail: xs[1..].to_vec(),
        },
        Some(found) => {
            let mut tail = xs[1..].to_vec();
            tail[found - 1] = value;
            NonEmpty {
                head: xs[0].clone(),
                tail,
            }
        }
        None => match xs.split_first() {
            Some((head, rest)) => {
                let mut tail = rest.to_vec();
                tail.push(value);
                NonEmpty {
                    head: head.clone(),
                    tail,
                }
            }
            None => NonEmpty::new(value),
        },
    }
}
