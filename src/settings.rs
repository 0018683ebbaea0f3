//! Type-level knobs for [`RingDeque`](crate::RingDeque).

use std::fmt::Debug;

/// Smallest backing length a deque will ever use. Always a power of two.
pub const MIN_CAPACITY: usize = 16;

/// Drops live elements starting at the front. This is the default.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrontToBack;

/// Drops live elements starting at the back.
#[derive(Copy, Clone, Debug, Default)]
pub struct BackToFront;

/// Decides which end a [`RingDeque`](crate::RingDeque) empties from when it drops its elements.
pub trait DropBehavior: seal_drop_behavior::Sealed + Debug + Copy + Default {}
pub(crate) mod seal_drop_behavior {
    pub trait Sealed {
        const IS_INVERTED: bool;
    }
}

impl DropBehavior for FrontToBack {}
impl DropBehavior for BackToFront {}

impl seal_drop_behavior::Sealed for FrontToBack {
    const IS_INVERTED: bool = false;
}
impl seal_drop_behavior::Sealed for BackToFront {
    const IS_INVERTED: bool = true;
}

/// Backing length for a deque that must hold `hint` elements without growing.
///
/// This is the smallest power of two strictly greater than `hint`, never less than [`MIN_CAPACITY`].
/// The extra slot is needed because a full ring is indistinguishable from an empty one.
///
/// # Panics
/// Panics if the result does not fit in a `usize`.
pub(crate) fn capacity_for(hint: usize) -> usize {
    match hint.checked_add(1).and_then(usize::checked_next_power_of_two) {
        Some(cap) => cap.max(MIN_CAPACITY),
        None => panic!("capacity overflow"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_hints_clamp_to_minimum() {
        assert_eq!(capacity_for(0), MIN_CAPACITY);
        assert_eq!(capacity_for(1), MIN_CAPACITY);
        assert_eq!(capacity_for(15), MIN_CAPACITY);
    }

    #[test]
    fn hints_round_past_powers_of_two() {
        assert_eq!(capacity_for(16), 32);
        assert_eq!(capacity_for(17), 32);
        assert_eq!(capacity_for(31), 32);
        assert_eq!(capacity_for(1000), 1024);
        assert_eq!(capacity_for(1024), 2048);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn huge_hint_panics() {
        capacity_for(usize::MAX);
    }
}
