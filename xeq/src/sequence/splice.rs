use nonempty::NonEmpty;

/// Insert a batch of elements at an index.
///
/// The batch lands between the existing elements, in batch order, with
/// everything else keeping its relative order. `index` counts positions
/// from `0` (prepend) to `xs.len()` (append); anything past that is out of
/// range and yields `None`. The batch is [`NonEmpty`], so `Some` output is
/// always longer than the input.
pub fn insert_many<T>(index: usize, batch: &NonEmpty<T>, xs: &[T]) -> Option<Vec<T>>
where
    T: Clone,
{
    if index > xs.len() {
        return None;
    }
    let mut result = Vec::with_capacity(xs.len() + batch.len());
    result.extend_from_slice(&xs[..index]);
    result.extend(batch.iter().cloned());
    result.extend_from_slice(&xs[index..]);
    Some(result)
}
