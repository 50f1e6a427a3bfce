#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod bucket_map;
pub mod bucket_set;
pub mod error;
pub mod forward_list;
pub mod linked_list;
pub mod queue;
pub mod stack;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

pub use bucket_map::BucketMap;
pub use bucket_map::Entry;
pub use bucket_set::BucketSet;
pub use error::Error;
pub use error::Result;
pub use forward_list::ForwardList;
pub use linked_list::CursorMut;
pub use linked_list::IntoIter;
pub use linked_list::Iter;
pub use linked_list::LinkedList;
pub use linked_list::Sequence;
pub use linked_list::ViewMut;
pub use queue::Queue;
pub use stack::Stack;

use core::num::NonZeroU32;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// An opaque handle identifying one node slot inside a container's arena.
///
/// Handles are only meaningful to the container that produced them. They are
/// **non-generational**: once a node is removed, its slot (and therefore its
/// handle) may be re-used for a new node. Accessing a freed slot through a
/// stale handle panics rather than reading garbage.
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
