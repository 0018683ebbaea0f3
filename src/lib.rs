//! A [`RingDeque`] is a growable double-ended queue stored in a circular buffer whose length is always a power of two.
//! Pushes and pops at either end are amortized O(1), and any element can be reached by its logical index in O(1).
//!
//! With the `snapshot` feature (on by default) the [`snapshot`] module adds helpers for diffing and sizing
//! series of JSON records, which pair naturally with a deque used as a rolling history.
//!
//! # Examples
//! ```
//! use ring_deque::RingDeque;
//! let mut deque = RingDeque::new();
//! deque.push_back(2);
//! deque.push_front(1);
//! deque.push_back(3);
//! assert_eq!(deque.get(1), Some(&2));
//! assert_eq!(deque.to_vec(), vec![1, 2, 3]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ring_deque;
pub mod settings;
#[cfg(feature = "snapshot")]
#[cfg_attr(docsrs, doc(cfg(feature = "snapshot")))]
pub mod snapshot;

pub use ring_deque::{IntoIter, Iter, IterMut, RingDeque};
pub use settings::{BackToFront, DropBehavior, FrontToBack, MIN_CAPACITY};

#[cfg(test)]
mod property_tests;
