// Equality and ordering witnesses.
//
// The sequence operations never require `PartialEq` or `Ord` on the element
// type. The caller decides what "the same element" means by passing a
// witness, in the same way a collation decides how strings compare.

use std::cmp::Ordering;

/// Decides whether two values count as the same element.
///
/// A witness is expected to behave like an equivalence relation over the
/// values it is actually applied to. The operations in [`crate::sequence`]
/// only ever call it pairwise; they never assume `Eq` on the element type.
pub trait Equality<T: ?Sized> {
    fn equal(&self, a: &T, b: &T) -> bool;
}

/// Decides how two values are ordered.
///
/// Where an operation needs both an order and an equality, values that
/// compare [`Ordering::Equal`] under the order are treated as the same
/// element. [`Order::ties`] is that derived equality.
pub trait Order<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// The equality induced by this order: two values tie when
    /// [`Order::compare`] returns [`Ordering::Equal`].
    fn ties(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equal(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

impl<T: ?Sized, F> Order<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The witness that defers to the element type's own `PartialEq` and `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structural;

impl<T: PartialEq> Equality<T> for Structural {
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: Ord> Order<T> for Structural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A witness that compares elements through a projection.
///
/// Two elements count as the same when the projected keys do. This is the
/// usual way to compare records by a single field:
///
/// ```
/// use xeq::{member, Keyed};
///
/// #[derive(Debug)]
/// struct Account {
///     id: u32,
///     owner: &'static str,
/// }
///
/// let by_id = Keyed::new(|a: &Account| a.id);
/// let accounts = [Account { id: 1, owner: "ada" }];
/// assert!(member(&by_id, &accounts, &Account { id: 1, owner: "brian" }));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Keyed<F> {
    key: F,
}

impl<F> Keyed<F> {
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Equality<T> for Keyed<F>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    fn equal(&self, a: &T, b: &T) -> bool {
        (self.key)(a) == (self.key)(b)
    }
}

impl<T, K, F> Order<T> for Keyed<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}
