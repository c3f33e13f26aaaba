//! The validity rule.
//!
//! Three cards form a Set when, for every attribute, their values are all
//! the same or all different. With three values per attribute that is the
//! same as the attribute codes summing to a multiple of three.

use crate::cards::{Attribute, Card, Locator};

/// True if `a`, `b` and `c` form a Set.
///
/// ```
/// use set_solver::cards::{Card, Locator};
/// use set_solver::solver::is_set;
///
/// let card = |c, o, f, s| Card::new(c, o, f, s, Locator::default()).unwrap();
/// assert!(is_set(&card(0, 0, 0, 0), &card(1, 1, 1, 1), &card(2, 2, 2, 2)));
/// assert!(!is_set(&card(0, 0, 0, 0), &card(0, 0, 0, 0), &card(1, 1, 1, 1)));
/// ```
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    let (a, b, c) = (a.codes(), b.codes(), c.codes());
    (0..a.len()).all(|i| (a[i] + b[i] + c[i]) % 3 == 0)
}

/// The one card that completes a Set with `a` and `b`.
///
/// The result has a default locator since it was never seen. When `a` and
/// `b` show the same face the completion is that face again.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> Card {
    Card::from_attributes(
        complete(a.count(), b.count()),
        complete(a.color(), b.color()),
        complete(a.fill(), b.fill()),
        complete(a.shape(), b.shape()),
        Locator::default(),
    )
}

fn complete<A: Attribute>(x: A, y: A) -> A {
    let code = (3 - (x.code() + y.code()) % 3) % 3;
    A::ALL[usize::from(code)]
}
