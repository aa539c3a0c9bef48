/// Pull the first element matching the predicate out of the sequence.
///
/// Returns the plucked element alongside the remainder, which keeps the
/// relative order of everything else. Only the first match is removed;
/// later matches stay. With no match the remainder is simply a copy of
/// the input.
pub fn pluck_first<T, P>(predicate: P, xs: &[T]) -> (Option<T>, Vec<T>)
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    match xs.iter().position(predicate) {
        Some(found) => {
            let mut rest = Vec::with_capacity(xs.len() - 1);
            rest.extend_from_slice(&xs[..found]);
            rest.extend_from_slice(&xs[found + 1..]);
            (Some(xs[found].clone()), rest)
        }
        None => (None, xs.to_vec()),
    }
}
