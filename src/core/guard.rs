//! Named guard predicates for controlling transitions.
//!
//! A guard pairs a pure predicate with a short description. Guards are plain
//! function pointers so they can live in `const` items next to the
//! transitions they protect.

use std::fmt;

/// Pure predicate that decides whether a transition may run.
///
/// # Example
///
/// ```rust
/// use divvy::core::Guard;
///
/// fn has_items(pile: &u32) -> bool {
///     *pile > 0
/// }
///
/// const NOT_EMPTY: Guard<u32> = Guard::new("pile is not empty", has_items);
///
/// assert!(NOT_EMPTY.check(&3));
/// assert!(!NOT_EMPTY.check(&0));
/// assert_eq!(NOT_EMPTY.description(), "pile is not empty");
/// ```
pub struct Guard<T> {
    description: &'static str,
    predicate: fn(&T) -> bool,
}

impl<T> Guard<T> {
    /// Create a guard from a description and a pure predicate.
    pub const fn new(description: &'static str, predicate: fn(&T) -> bool) -> Self {
        Self {
            description,
            predicate,
        }
    }

    /// Evaluate the guard against a value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// What the guard requires, in plain words.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Guard<T> {}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pile {
        remaining: u32,
        baskets: u32,
    }

    fn enough_for_every_basket(pile: &Pile) -> bool {
        pile.remaining >= pile.baskets
    }

    const CAN_SHARE: Guard<Pile> = Guard::new("enough for every basket", enough_for_every_basket);

    #[test]
    fn guard_allows_matching_values() {
        assert!(CAN_SHARE.check(&Pile {
            remaining: 6,
            baskets: 3
        }));
        assert!(CAN_SHARE.check(&Pile {
            remaining: 3,
            baskets: 3
        }));
    }

    #[test]
    fn guard_blocks_non_matching_values() {
        assert!(!CAN_SHARE.check(&Pile {
            remaining: 2,
            baskets: 3
        }));
    }

    #[test]
    fn guard_is_deterministic() {
        let pile = Pile {
            remaining: 5,
            baskets: 4,
        };
        assert_eq!(CAN_SHARE.check(&pile), CAN_SHARE.check(&pile));
    }

    #[test]
    fn guard_accepts_non_capturing_closures() {
        let odd = Guard::new("odd", |n: &u32| n % 2 == 1);
        assert!(odd.check(&7));
        assert!(!odd.check(&8));
    }

    #[test]
    fn debug_shows_description() {
        let rendered = format!("{CAN_SHARE:?}");
        assert!(rendered.contains("enough for every basket"));
    }
}
