use crate::witness::{Equality, Order};

/// Equality of sequences up to reordering.
///
/// Two sequences count as the same when they have the same length and pair
/// up element for element after both are sorted with the wrapped order.
/// Multiplicity matters: `[1, 1, 2]` and `[1, 2, 2]` differ. Paired
/// elements are matched with [`Order::ties`], so elements the order cannot
/// tell apart are interchangeable.
#[derive(Debug, Clone, Copy)]
pub struct Disordered<O> {
    order: O,
}

impl<O> Disordered<O> {
    pub fn new(order: O) -> Self {
        Self { order }
    }
}

impl<T, O> Equality<[T]> for Disordered<O>
where
    T: Clone,
    O: Order<T>,
{
    fn equal(&self, a: &[T], b: &[T]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut left = a.to_vec();
        let mut right = b.to_vec();
        left.sort_by(|x, y| self.order.compare(x, y));
        right.sort_by(|x, y| self.order.compare(x, y));
        left.iter()
            .zip(&right)
            .all(|(x, y)| self.order.ties(x, y))
    }
}
